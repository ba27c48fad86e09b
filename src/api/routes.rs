//! Application route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::health_handler::{health, root};
use super::handlers::{auth_routes, candidate_routes};
use super::middleware::{auth_middleware, handle_panic, report_failures};
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Registration and login are public, /auth/protected checks its own token
        .nest("/auth", auth_routes(state.clone()))
        // Candidate routes (require JWT)
        .merge(candidate_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        )))
        .fallback(not_found)
        // Global middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        // Outside catch-panic so recovered panics are reported as well
        .layer(middleware::from_fn_with_state(
            state.error_reporter.clone(),
            report_failures,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route")
}
