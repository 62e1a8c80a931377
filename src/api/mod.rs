//! API Module
//!
//! HTTP handlers and routing for the album server REST API.
//!
//! # Endpoints
//! - `GET /albums` - List all albums
//! - `POST /albums` - Create an album
//! - `GET /albums/:id` - Fetch one album by ID

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
