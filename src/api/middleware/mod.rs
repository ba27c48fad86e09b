//! API middleware.

mod auth;
mod panic;
mod report;

pub use auth::{auth_middleware, CurrentUser};
pub use panic::handle_panic;
pub use report::report_failures;
