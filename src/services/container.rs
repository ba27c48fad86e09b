//! Service Container - Centralized service access.
//!
//! Builds every service once from the database connection and the
//! startup configuration, then hands out shared handles.

use std::sync::Arc;

use super::{AuthService, Authenticator, CandidateManager, CandidateService, TokenIssuer};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get candidate service
    fn candidates(&self) -> Arc<dyn CandidateService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    candidate_service: Arc<dyn CandidateService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(
            uow.clone(),
            TokenIssuer::from_config(config),
        ));
        let candidate_service = Arc::new(CandidateManager::new(uow));

        Self {
            auth_service,
            candidate_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn candidates(&self) -> Arc<dyn CandidateService> {
        self.candidate_service.clone()
    }
}
