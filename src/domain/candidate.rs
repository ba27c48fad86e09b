//! Candidate domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::errors::{AppError, AppResult};

/// Entity name used in not-found errors
pub const CANDIDATE: &str = "Candidate";

/// Candidate domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Candidate {
    /// Store-assigned identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

/// Mutable candidate fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct CandidateInput {
    #[validate(length(min = 1, message = "first_name is required"))]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl CandidateInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Reject empty fields with a single validation error.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(crate::utils::format_validation_errors(&e)))
    }
}

/// Search criteria for the candidate listing.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CandidateSearch {
    /// Case-insensitive text matched against first name, last name and email
    #[serde(default)]
    #[param(example = "lovelace")]
    pub query: String,
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(example = 1)]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, message = "per_page must be at least 1"))]
    #[param(example = 10)]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for CandidateSearch {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parse a path identifier; anything that is not a candidate id is simply
/// not found.
pub fn parse_candidate_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(CANDIDATE))
}
