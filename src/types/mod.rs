//! Shared types for list and download responses.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationParams};
pub use response::{CsvAttachment, MessageResponse};
