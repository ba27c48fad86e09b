//! Authentication service - registration, login and token checks.
//!
//! Password hashing lives in the domain `Password` value object; token
//! signing in `TokenIssuer`. This service composes them over the user
//! repository.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use super::token::TokenIssuer;
use crate::config::TOKEN_TYPE_BEARER;
use crate::domain::{AuthorizedUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Verified against when the username is unknown, so a miss costs the same
/// as a wrong password.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("not-a-real-password").ok());

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, password: String) -> AppResult<User>;

    /// Check credentials and issue an access token
    async fn login(&self, username: String, password: String) -> AppResult<AuthorizedUser>;

    /// Verify an access token and return the identity it was issued to
    fn authenticate(&self, token: &str) -> AppResult<String>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    tokens: TokenIssuer,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, tokens: TokenIssuer) -> Self {
        Self { uow, tokens }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, username: String, password: String) -> AppResult<User> {
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }

        if self.uow.users().find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.uow.users().create(username, password_hash).await?;

        tracing::info!(user_id = %user.id, "User registered: {}", user.username);
        Ok(user)
    }

    async fn login(&self, username: String, password: String) -> AppResult<AuthorizedUser> {
        let user = self.uow.users().find_by_username(&username).await?;

        let password_valid = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()).verify(&password),
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    let _ = dummy.verify(&password);
                }
                false
            }
        };

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::warn!("Failed login attempt for username: {}", username);
                return Err(AppError::InvalidCredentials);
            }
        };

        let issued = self.tokens.issue(&user.identity())?;
        tracing::info!(user_id = %user.id, "User logged in: {}", user.username);

        Ok(AuthorizedUser {
            username: user.username,
            access_token: issued.token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: issued.expires_in,
        })
    }

    fn authenticate(&self, token: &str) -> AppResult<String> {
        self.tokens.verify(token)
    }
}
