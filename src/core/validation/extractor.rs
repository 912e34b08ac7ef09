//! Axum extractor for validated request bodies
//!
//! This module provides the `ValidatedJson<T>` extractor that parses a JSON
//! body and runs its `validator` rules before the handler is invoked.
//! Both failure modes are rejected with 400 and an [`ErrorResponse`] body.
//!
//! [`ErrorResponse`]: crate::core::error::ErrorResponse

use crate::core::error::{ApiError, FieldValidationError, RequestError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Axum extractor that deserializes and validates a JSON payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_category(
///     ValidatedJson(request): ValidatedJson<CategoryRequest>,
/// ) -> ApiResult<Json<CategoryResponse>> {
///     // request is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| RequestError::InvalidBody {
                message: e.body_text(),
            })?;

        payload
            .validate()
            .map_err(|errors| RequestError::FieldErrors(flatten(&errors)))?;

        Ok(ValidatedJson(payload))
    }
}

/// Flatten `validator` errors into one entry per failed rule, sorted by field
fn flatten(errors: &ValidationErrors) -> Vec<FieldValidationError> {
    let mut flat: Vec<FieldValidationError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| FieldValidationError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    flat.sort_by(|a, b| a.field.cmp(&b.field));
    flat
}
