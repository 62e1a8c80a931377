//! Response DTOs for the album server API
//!
//! Defines the structure of outgoing HTTP response bodies. Every body, success
//! or error, goes out through [`JsonBody`] so the content type is uniform.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Content type declared on every response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

// == JSON Body ==
/// A serializable value paired with the status it should be sent with.
#[derive(Debug, Clone)]
pub struct JsonBody<T> {
    pub status: StatusCode,
    pub value: T,
}

impl<T: Serialize> JsonBody<T> {
    pub fn new(status: StatusCode, value: T) -> Self {
        Self { status, value }
    }

    /// 200 OK
    pub fn ok(value: T) -> Self {
        Self::new(StatusCode::OK, value)
    }

    /// 201 Created
    pub fn created(value: T) -> Self {
        Self::new(StatusCode::CREATED, value)
    }
}

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.value) {
            Ok(bytes) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to encode response body: {}", err);
                let fallback =
                    ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal);
                let bytes = serde_json::to_vec(&fallback).unwrap_or_default();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static(JSON_CONTENT_TYPE),
                    )],
                    bytes,
                )
                    .into_response()
            }
        }
    }
}

// == Error Envelope ==
/// Machine-readable error category, independent of the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    AlreadyExists,
    Database,
    Internal,
    MalformedJson,
    MethodNotAllowed,
    NotFound,
    PayloadTooLarge,
    Validation,
}

/// Error response body for all error conditions
///
/// `data` is left out of the JSON entirely when there is nothing to attach.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse without structured data
    pub fn new(status: StatusCode, error: ErrorKind) -> Self {
        Self {
            status: status.as_u16(),
            error,
            data: None,
        }
    }

    /// Attaches structured data to the envelope
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
