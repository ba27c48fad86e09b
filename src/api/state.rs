//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, ErrorReporter, TracingReporter};
use crate::services::{AuthService, CandidateService, ServiceContainer, Services};

/// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Candidate service
    pub candidate_service: Arc<dyn CandidateService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
    /// Sink for 5xx failures
    pub error_reporter: Arc<dyn ErrorReporter>,
}

impl AppState {
    /// Create application state from the database and startup configuration.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            candidate_service: container.candidates(),
            database,
            error_reporter: Arc::new(TracingReporter),
        }
    }

    /// Replace the default tracing-backed error reporter.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.error_reporter = reporter;
        self
    }
}
