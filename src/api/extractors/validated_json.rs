//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;
use crate::utils::format_validation_errors;

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed bodies, missing fields and failed validation rules all become
/// `AppError::Validation`. Unknown fields are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use candidate_api::api::extractors::ValidatedJson;
/// use candidate_api::domain::CandidateInput;
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CandidateInput>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}
