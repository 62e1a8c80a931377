//! API Routes
//!
//! Configures the Axum router with the album endpoints.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::MAX_BODY_BYTES;

use super::handlers::{
    collection_method_not_allowed, create_album_handler, get_album_handler,
    item_method_not_allowed, list_albums_handler, not_found_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /albums` - List all albums, sorted by ID
/// - `POST /albums` - Create an album
/// - `GET /albums/:id` - Fetch a single album
///
/// Other methods on those paths get a 405 with an `Allow` header; any other
/// path gets a JSON 404.
///
/// # Middleware
/// - Body limit: request bodies are capped at [`MAX_BODY_BYTES`]
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/albums",
            get(list_albums_handler)
                .post(create_album_handler)
                .fallback(collection_method_not_allowed),
        )
        .route(
            "/albums/:id",
            get(get_album_handler).fallback(item_method_not_allowed),
        )
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
