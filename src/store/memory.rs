//! In-memory album store
//!
//! HashMap storage behind a tokio RwLock. Lost when the process exits.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Album;
use crate::store::{AlbumStore, StoreError};

// == Memory Store ==
/// Album store backed by a map keyed on album ID.
#[derive(Debug, Default)]
pub struct MemoryStore {
    albums: RwLock<HashMap<String, Album>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a MemoryStore pre-populated with the given albums.
    ///
    /// Later duplicates of an ID are ignored, matching `insert`.
    pub fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        let mut map = HashMap::new();
        for album in albums {
            map.entry(album.id.clone()).or_insert(album);
        }
        Self {
            albums: RwLock::new(map),
        }
    }

    // == Length ==
    /// Returns the number of stored albums.
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no albums are stored.
    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[async_trait]
impl AlbumStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Album>, StoreError> {
        let mut albums: Vec<Album> = {
            let guard = self.albums.read().await;
            guard.values().cloned().collect()
        };
        albums.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(albums)
    }

    async fn get_by_id(&self, id: &str) -> Result<Album, StoreError> {
        self.albums
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, album: Album) -> Result<(), StoreError> {
        let mut guard = self.albums.write().await;
        match guard.entry(album.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(album.id)),
            Entry::Vacant(slot) => {
                debug!("Inserted album {}", album.id);
                slot.insert(album);
                Ok(())
            }
        }
    }
}
