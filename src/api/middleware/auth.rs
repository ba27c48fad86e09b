//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated identity extracted from the access token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: String,
}

/// JWT authentication middleware.
///
/// Extracts and validates the token from the Authorization header, then
/// injects the CurrentUser into the request extensions. Requests without a
/// valid token never reach the handler.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or(AppError::Unauthorized)?;

    let identity = state.auth_service.authenticate(token)?;

    request.extensions_mut().insert(CurrentUser { id: identity });

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
