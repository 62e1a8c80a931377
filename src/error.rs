//! Error types for the album server
//!
//! Provides unified error handling using thiserror. [`StoreError`] is what a
//! store reports; [`ApiError`] is what the HTTP layer turns into a response.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::models::{ErrorKind, ErrorResponse, JsonBody, ValidationErrors};

// == Store Error Enum ==
/// Failures reported by an [`AlbumStore`](crate::store::AlbumStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No album with this ID
    #[error("Album not found: {0}")]
    NotFound(String),

    /// An album with this ID already exists
    #[error("Album already exists: {0}")]
    Conflict(String),

    /// The backend failed for reasons opaque to the caller
    #[error("Storage failure: {0}")]
    Failure(String),
}

// == API Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Resource or route not found
    #[error("Not found")]
    NotFound,

    /// Create attempted with an ID that is taken
    #[error("Album {0} already exists")]
    AlreadyExists(String),

    /// One or more request fields failed validation
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),

    /// Request body is not valid JSON for an album
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// Request body exceeds the configured size limit
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// Method not supported on this route; carries the `Allow` header value
    #[error("Method not allowed (allow: {0})")]
    MethodNotAllowed(&'static str),

    /// Store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status and machine-readable kind for this error.
    pub fn status_and_kind(&self) -> (StatusCode, ErrorKind) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorKind::NotFound),
            ApiError::AlreadyExists(_) => (StatusCode::CONFLICT, ErrorKind::AlreadyExists),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorKind::Validation),
            ApiError::MalformedJson(_) => (StatusCode::BAD_REQUEST, ErrorKind::MalformedJson),
            ApiError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorKind::PayloadTooLarge)
            }
            ApiError::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, ErrorKind::MethodNotAllowed)
            }
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Database),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Conflict(id) => ApiError::AlreadyExists(id),
            StoreError::Failure(msg) => ApiError::Database(msg),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("{}", self);
        }

        let mut envelope = ErrorResponse::new(status, kind);
        let mut allow = None;
        match self {
            ApiError::Validation(issues) => {
                envelope = envelope.with_data(serde_json::to_value(&issues).unwrap_or_default());
            }
            ApiError::MalformedJson(message) => {
                envelope = envelope.with_data(json!({ "message": message }));
            }
            ApiError::PayloadTooLarge(limit) => {
                envelope = envelope.with_data(json!({ "limit": limit }));
            }
            ApiError::MethodNotAllowed(methods) => allow = Some(methods),
            _ => {}
        }

        let mut response = JsonBody::new(status, envelope).into_response();
        if let Some(methods) = allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(methods));
        }
        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;
