//! Typed error handling for the storefront API
//!
//! Errors are split by the layer that produces them:
//!
//! - [`StoreError`]: faults reported by a repository or unit of work
//! - [`ResourceError`]: the closed taxonomy surfaced by datasources and
//!   services (`NOT_FOUND`, `VALIDATION_ERROR`, `DATABASE_ERROR`)
//! - [`RequestError`]: malformed HTTP input rejected before the core runs
//! - [`ApiError`]: what an HTTP handler returns, convertible into a response
//!
//! # Example
//!
//! ```rust,ignore
//! match service.find_by_id(42).await {
//!     Ok(category) => println!("Found: {:?}", category),
//!     Err(ResourceError::NotFound { message }) => println!("{}", message),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Store Errors
// =============================================================================

/// Failures reported by a persistence backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write was rejected by a uniqueness constraint enforced by the store
    #[error("duplicate value '{value}' for unique field '{field}'")]
    UniqueViolation { field: String, value: String },

    /// Any other backend failure (connection, query, lock poisoning, ...)
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    pub fn backend(message: impl fmt::Display) -> Self {
        StoreError::Backend(anyhow::anyhow!("{}", message))
    }
}

/// Result type returned by repositories
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Resource Errors
// =============================================================================

/// Categorical tag attached to every failure surfaced by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    #[serde(rename = "DATABASE_ERROR")]
    Database,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Database => "DATABASE_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors surfaced by resource datasources and services
///
/// `NotFound` and `Validation` are expected outcomes and travel upward
/// unchanged. `Database` is the catch-all for store faults; its message
/// already carries the original cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The referenced id does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// A uniqueness invariant would be violated by the requested write
    #[error("{message}")]
    Validation { message: String },

    /// Any other failure while talking to the store
    #[error("{message}")]
    Database { message: String },
}

impl ResourceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ResourceError::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ResourceError::Validation {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        ResourceError::Database {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResourceError::NotFound { .. } => ErrorKind::NotFound,
            ResourceError::Validation { .. } => ErrorKind::Validation,
            ResourceError::Database { .. } => ErrorKind::Database,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ResourceError::NotFound { message }
            | ResourceError::Validation { message }
            | ResourceError::Database { message } => message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ResourceError::Validation { .. } => StatusCode::CONFLICT,
            ResourceError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type returned by datasources and services
pub type ResourceResult<T> = Result<T, ResourceError>;

// =============================================================================
// Request Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors related to malformed HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    /// Path id is not an integer
    #[error("Invalid entity ID format: '{id}'")]
    InvalidEntityId { id: String },

    /// Body is not valid JSON or does not match the expected shape
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// Body parsed but one or more fields failed validation
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::FieldErrors(_) => "INVALID_FIELDS",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

// =============================================================================
// API Errors
// =============================================================================

/// Error returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Resource(e) => e.status_code(),
            ApiError::Request(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Resource(e) => e.kind().code(),
            ApiError::Request(e) => e.error_code(),
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Request(RequestError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Resource(ResourceError::Database { message }) => {
                tracing::error!(error = %message, "database error while handling request");
            }
            other => {
                tracing::debug!(code = other.error_code(), error = %other, "request failed");
            }
        }

        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================
