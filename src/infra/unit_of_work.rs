//! Unit of Work - centralized repository access.
//!
//! Hands out the user and candidate repositories over one shared
//! connection pool. Writes are single-statement and rely on the store's
//! per-row atomicity; no cross-repository transaction is opened.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{CandidateRepository, CandidateStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get candidate repository
    fn candidates(&self) -> Arc<dyn CandidateRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    candidate_repo: Arc<CandidateStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            candidate_repo: Arc::new(CandidateStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn candidates(&self) -> Arc<dyn CandidateRepository> {
        self.candidate_repo.clone()
    }
}
