//! Request and Response models for the album server API
//!
//! This module defines the album entity and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod album;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use album::Album;
pub use requests::{CreateAlbumRequest, FieldIssue, IssueKind, ValidationErrors};
pub use responses::{ErrorKind, ErrorResponse, JsonBody, JSON_CONTENT_TYPE};
