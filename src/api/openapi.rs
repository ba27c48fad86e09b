//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, candidate_handler, health_handler};
use crate::domain::{AuthorizedUser, Candidate, CandidateInput, UserResponse};
use crate::errors::ErrorResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Candidate API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Candidate API",
        version = "0.1.0",
        description = "Candidate records behind JWT authentication, with search, pagination and CSV export"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Health
        health_handler::health,
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::protected,
        // Candidate endpoints
        candidate_handler::create_candidate,
        candidate_handler::list_candidates,
        candidate_handler::get_candidate,
        candidate_handler::update_candidate,
        candidate_handler::delete_candidate,
        candidate_handler::generate_report,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            AuthorizedUser,
            Candidate,
            CandidateInput,
            // Request/response wrappers
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::ProtectedResponse,
            candidate_handler::CandidateListResponse,
            health_handler::HealthResponse,
            health_handler::ServiceStatus,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "User registration, login and token checks"),
        (name = "Candidates", description = "Candidate management and reporting")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_candidate_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/candidates/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/all-candidates"));
        assert!(paths.iter().any(|p| p.as_str() == "/auth/login"));
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
