//! Hands server failures to the configured error reporter.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::errors::ServerFailure;
use crate::infra::ErrorReporter;

/// Report every response that carries a `ServerFailure`.
///
/// Must sit outside the catch-panic layer so that recovered panics are
/// reported too.
pub async fn report_failures(
    State(reporter): State<Arc<dyn ErrorReporter>>,
    request: Request,
    next: Next,
) -> Response {
    let context = format!("{} {}", request.method(), request.uri().path());
    let response = next.run(request).await;

    if let Some(failure) = response.extensions().get::<ServerFailure>() {
        reporter.capture(&context, &failure.0);
    }

    response
}
