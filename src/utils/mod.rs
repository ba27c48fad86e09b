//! Utility functions and helpers.

mod validation;

pub use validation::format_validation_errors;
