//! Store Module
//!
//! Storage abstraction for albums plus the in-memory implementation.

mod memory;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;

use crate::models::Album;

pub use crate::error::StoreError;
pub use memory::MemoryStore;

// == Album Store ==
/// Capability required by the HTTP layer to load and store albums.
///
/// Implementations own their state and only ever hand out copies. `insert`
/// must perform its uniqueness check and the write as one atomic step.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Returns a copy of every album, sorted ascending by ID.
    async fn list(&self) -> Result<Vec<Album>, StoreError>;

    /// Returns a copy of the album with the given ID, or
    /// [`StoreError::NotFound`] if there is none.
    async fn get_by_id(&self, id: &str) -> Result<Album, StoreError>;

    /// Adds an album, or fails with [`StoreError::Conflict`] if one with the
    /// same ID already exists. Existing albums are never overwritten.
    async fn insert(&self, album: Album) -> Result<(), StoreError>;
}
