//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_MINUTES, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEV_JWT_SECRET, MAX_JWT_EXPIRATION_MINUTES, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(AppError::validation(format!("Unknown APP_ENV '{}'", other))),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything but the store
    /// location and signing key.
    ///
    /// # Errors
    /// Returns a validation error if the secret is shorter than
    /// `MIN_JWT_SECRET_LENGTH` bytes.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        check_secret(&jwt_secret)?;

        Ok(Self {
            environment: Environment::Development,
            database_url: database_url.into(),
            jwt_secret,
            jwt_expiration_minutes: DEFAULT_JWT_EXPIRATION_MINUTES,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Load configuration from environment variables (and `.env`).
    ///
    /// # Errors
    /// Fails if `APP_ENV` is unknown, if `JWT_SECRET_KEY` is missing in
    /// production, if the secret is too short, or if
    /// `JWT_EXPIRATION_MINUTES` is not a positive integer.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Development,
        };

        let jwt_secret = match env::var("JWT_SECRET_KEY") {
            Ok(secret) => secret,
            Err(_) if environment.is_production() => {
                return Err(AppError::validation(
                    "JWT_SECRET_KEY environment variable must be set in production",
                ));
            }
            Err(_) => {
                tracing::warn!("JWT_SECRET_KEY not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
        };

        let mut config = Self::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
        )?;

        config.environment = environment;
        config.jwt_expiration_minutes = match env::var("JWT_EXPIRATION_MINUTES") {
            Ok(raw) => parse_expiration_minutes(&raw)?,
            Err(_) => DEFAULT_JWT_EXPIRATION_MINUTES,
        };
        config.server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        Ok(config)
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Access token lifetime.
    pub fn jwt_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.jwt_expiration_minutes)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn check_secret(secret: &str) -> AppResult<()> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(AppError::validation(format!(
            "JWT_SECRET_KEY must be at least {} characters long",
            MIN_JWT_SECRET_LENGTH
        )));
    }
    Ok(())
}

fn parse_expiration_minutes(raw: &str) -> AppResult<i64> {
    match raw.trim().parse::<i64>() {
        Ok(minutes) if (1..=MAX_JWT_EXPIRATION_MINUTES).contains(&minutes) => Ok(minutes),
        _ => Err(AppError::validation(format!(
            "JWT_EXPIRATION_MINUTES must be between 1 and {} minutes, got {:?}",
            MAX_JWT_EXPIRATION_MINUTES, raw
        ))),
    }
}
