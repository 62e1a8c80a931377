//! Album entity
//!
//! The single record type managed by the server.

use serde::{Deserialize, Serialize};

// == Album ==
/// A single album in the collection.
///
/// `price` is in currency minor units so no floating point is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Caller-supplied identifier, unique within a store
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: i64,
}

impl Album {
    /// Creates a new Album
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}
