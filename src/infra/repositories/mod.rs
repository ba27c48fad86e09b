//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod candidate_repository;
pub(crate) mod entities;
mod user_repository;

pub use candidate_repository::{CandidateRepository, CandidateStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use candidate_repository::MockCandidateRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
