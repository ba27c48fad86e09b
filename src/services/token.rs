//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the identity reference as `sub` and an
//! expiry. Keys are derived once from the configured secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// A freshly signed token and its lifetime in seconds
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Signs and verifies access tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("keys", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expired means expired: no grace period
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), config.jwt_ttl())
    }

    /// Sign a token for `identity` expiring after the configured lifetime.
    pub fn issue(&self, identity: &str) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token encoding failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// Check signature and expiry, returning the bound identity.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            AppError::Unauthorized
        })?;

        Ok(data.claims.sub)
    }
}
