//! API Handlers
//!
//! HTTP request handlers for the album endpoints, plus the JSON fallbacks
//! used for unknown routes and unsupported methods.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, FailedToBufferBody, PathRejection},
        Path, State,
    },
};
use tracing::{debug, info};

use crate::config::MAX_BODY_BYTES;
use crate::error::{ApiError, Result};
use crate::models::{Album, CreateAlbumRequest, JsonBody};
use crate::store::AlbumStore;

/// `Allow` header value for `/albums`
pub const COLLECTION_ALLOW: &str = "GET, POST";

/// `Allow` header value for `/albums/{id}`
pub const ITEM_ALLOW: &str = "GET";

/// Application state shared across all handlers.
///
/// The store is injected at construction; handlers only see it through the
/// [`AlbumStore`] trait.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AlbumStore>,
}

impl AppState {
    /// Creates a new AppState owning the given store.
    pub fn new(store: impl AlbumStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState around an already shared store.
    pub fn from_shared(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }
}

/// Handler for GET /albums
///
/// Returns every album, sorted by ID.
pub async fn list_albums_handler(
    State(state): State<AppState>,
) -> Result<JsonBody<Vec<Album>>> {
    let albums = state.store.list().await?;
    Ok(JsonBody::ok(albums))
}

/// Handler for GET /albums/:id
///
/// A segment that cannot be decoded (e.g. invalid UTF-8 after
/// percent-decoding) can never name a stored album, so it is a 404.
pub async fn get_album_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<JsonBody<Album>> {
    let Path(id) = path.map_err(|rejection| {
        debug!("Undecodable album id: {}", rejection);
        ApiError::NotFound
    })?;
    let album = state.store.get_by_id(&id).await?;
    Ok(JsonBody::ok(album))
}

/// Handler for POST /albums
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that read failures, oversized bodies, decode failures and validation
/// failures each map to their own error kind.
pub async fn create_album_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<JsonBody<Album>> {
    let bytes = body.map_err(|rejection| match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
            ApiError::PayloadTooLarge(MAX_BODY_BYTES)
        }
        other => ApiError::Internal(format!("error reading body: {}", other)),
    })?;

    let req: CreateAlbumRequest =
        serde_json::from_slice(&bytes).map_err(|err| ApiError::MalformedJson(err.to_string()))?;

    let album = req.validate().map_err(ApiError::Validation)?;

    state.store.insert(album.clone()).await?;
    info!("Created album {}", album.id);

    Ok(JsonBody::created(album))
}

/// Fallback for unsupported methods on /albums
pub async fn collection_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(COLLECTION_ALLOW)
}

/// Fallback for unsupported methods on /albums/:id
pub async fn item_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(ITEM_ALLOW)
}

/// Fallback for any path that matches no route
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::IssueKind;
    use crate::store::MemoryStore;
    use axum::http::StatusCode;

    fn seeded_state() -> AppState {
        AppState::new(MemoryStore::with_albums(vec![
            Album::new("a2", "Hey Jude", "The Beatles", 2000),
            Album::new("a1", "9th Symphony", "Beethoven", 795),
        ]))
    }

    #[tokio::test]
    async fn test_list_handler_sorted() {
        let response = list_albums_handler(State(seeded_state())).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        let ids: Vec<&str> = response.value.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = seeded_state();

        let body = Ok(Bytes::from_static(
            br#"{"id":"a9","title":"Pianoman","artist":"Billy Joel","price":1234}"#,
        ));
        let created = create_album_handler(State(state.clone()), body)
            .await
            .unwrap();
        assert_eq!(created.status, StatusCode::CREATED);
        assert_eq!(created.value, Album::new("a9", "Pianoman", "Billy Joel", 1234));

        let fetched = get_album_handler(State(state), Ok(Path("a9".to_string())))
            .await
            .unwrap();
        assert_eq!(fetched.value, created.value);
    }

    #[tokio::test]
    async fn test_get_nonexistent_album() {
        let result = get_album_handler(State(seeded_state()), Ok(Path("a3".to_string()))).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_duplicate_album() {
        let body = Ok(Bytes::from_static(br#"{"id":"a2","title":"Foo","artist":"Bar"}"#));
        let result = create_album_handler(State(seeded_state()), body).await;
        assert!(matches!(result, Err(ApiError::AlreadyExists(ref id)) if id == "a2"));
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let body = Ok(Bytes::from_static(b"@"));
        let result = create_album_handler(State(seeded_state()), body).await;
        match result {
            Err(ApiError::MalformedJson(message)) => assert!(!message.is_empty()),
            other => panic!("expected malformed json, got {:?}", other.map(|r| r.value)),
        }
    }

    #[tokio::test]
    async fn test_create_invalid_request_never_reaches_store() {
        let state = seeded_state();
        let body = Ok(Bytes::from_static(br#"{"price": -1}"#));
        let result = create_album_handler(State(state.clone()), body).await;

        match result {
            Err(ApiError::Validation(issues)) => {
                assert_eq!(
                    issues.fields().collect::<Vec<_>>(),
                    vec!["artist", "id", "price", "title"]
                );
                assert_eq!(issues.get("price").unwrap().error, IssueKind::OutOfRange);
            }
            other => panic!("expected validation error, got {:?}", other.map(|r| r.value)),
        }
        assert_eq!(state.store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_method_not_allowed_fallbacks() {
        assert!(matches!(
            collection_method_not_allowed().await,
            ApiError::MethodNotAllowed(COLLECTION_ALLOW)
        ));
        assert!(matches!(
            item_method_not_allowed().await,
            ApiError::MethodNotAllowed(ITEM_ALLOW)
        ));
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_database() {
        struct DownStore;

        #[async_trait::async_trait]
        impl AlbumStore for DownStore {
            async fn list(&self) -> std::result::Result<Vec<Album>, StoreError> {
                Err(StoreError::Failure("down".into()))
            }
            async fn get_by_id(&self, _id: &str) -> std::result::Result<Album, StoreError> {
                Err(StoreError::Failure("down".into()))
            }
            async fn insert(&self, _album: Album) -> std::result::Result<(), StoreError> {
                Err(StoreError::Failure("down".into()))
            }
        }

        let result = list_albums_handler(State(AppState::new(DownStore))).await;
        assert!(matches!(result, Err(ApiError::Database(_))));
    }
}
