//! Typed errors for the mock backend
//!
//! Every failure the in-memory backend can answer with is a variant of
//! [`ApiError`]. Each variant carries its own HTTP status and a stable error
//! code, so handlers can return `Result<_, ApiError>` and let
//! [`IntoResponse`] shape the reply.
//!
//! # Example
//!
//! ```rust,ignore
//! match backend.handle(Method::GET, "/api/customers/42", None) {
//!     Err(ApiError::RecordNotFound { collection, id }) => {
//!         println!("{collection} has no record {id}");
//!     }
//!     other => { /* ... */ }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Everything the in-memory backend can fail with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The URL names no collection the store knows about
    #[error("Collection '{collection}' not found")]
    CollectionNotFound { collection: String },

    /// The collection exists but holds no record with that id
    #[error("'{collection}' with id='{id}' not found")]
    RecordNotFound { collection: String, id: String },

    /// PUT/DELETE without an id to act on
    #[error("Missing '{collection}' id")]
    MissingId { collection: String },

    /// The id in the URL disagrees with the id in the body
    #[error("Request id does not match item.id for '{collection}'")]
    IdMismatch { collection: String },

    /// POST onto an existing id while `post409` is enabled
    #[error(
        "'{collection}' item with id='{id}' exists and may not be updated with POST; use PUT instead."
    )]
    AlreadyExists { collection: String, id: i64 },

    /// No unused id is left for a record created without one
    #[error("No id left to assign in '{collection}'")]
    IdsExhausted { collection: String },

    /// The request body is not a record of the collection's type
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// The HTTP verb is not supported on this resource
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    /// `commands/<name>` with an unrecognised name
    #[error("Unknown command \"{command}\"")]
    UnknownCommand { command: String },

    /// The request should pass through but no pass-through router is set
    #[error("Request for '{url}' is not handled by the mock and no pass-through is configured")]
    NotHandled { url: String },

    /// Internal failures (poisoned locks, serialization of known types)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body sent to HTTP clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CollectionNotFound { .. }
            | ApiError::RecordNotFound { .. }
            | ApiError::MissingId { .. }
            | ApiError::NotHandled { .. } => StatusCode::NOT_FOUND,
            ApiError::IdMismatch { .. } | ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::AlreadyExists { .. } | ApiError::IdsExhausted { .. } => StatusCode::CONFLICT,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnknownCommand { .. } | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::CollectionNotFound { .. } => "COLLECTION_NOT_FOUND",
            ApiError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            ApiError::MissingId { .. } => "MISSING_ID",
            ApiError::IdMismatch { .. } => "ID_MISMATCH",
            ApiError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
            ApiError::IdsExhausted { .. } => "IDS_EXHAUSTED",
            ApiError::InvalidBody { .. } => "INVALID_BODY",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            ApiError::NotHandled { .. } => "NOT_HANDLED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody {
            message: err.to_string(),
        }
    }
}
