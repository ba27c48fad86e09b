//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories for users and candidates
//! - Unit of Work for repository access
//! - Error reporting for server failures

pub mod db;
pub mod reporting;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use reporting::{ErrorReporter, TracingReporter};
pub use repositories::{CandidateRepository, CandidateStore, UserRepository, UserStore};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use reporting::MockErrorReporter;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCandidateRepository, MockUserRepository};
