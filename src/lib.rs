//! Album Server - A minimal HTTP resource server
//!
//! Serves list, get and create operations over an album collection backed by
//! a pluggable, concurrency-safe store.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::{AlbumStore, MemoryStore, StoreError};
