//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::domain::{AuthorizedUser, UserResponse};
use crate::errors::AppResult;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Login name, unique across users
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    /// Plaintext password, hashed before storage
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "s3cret")]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "s3cret")]
    pub password: String,
}

/// Identity carried by the presented token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProtectedResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub logged_in_as: String,
}

/// Create authentication routes
pub fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/protected", get(protected))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .register(payload.username, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthorizedUser),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthorizedUser>> {
    let authorized = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(authorized))
}

/// Echo the identity bound to the bearer token
#[utoipa::path(
    get,
    path = "/auth/protected",
    tag = "Authentication",
    responses(
        (status = 200, description = "Token accepted", body = ProtectedResponse),
        (status = 401, description = "Missing, invalid or expired token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn protected(Extension(current_user): Extension<CurrentUser>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        logged_in_as: current_user.id,
    })
}
