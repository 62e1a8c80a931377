//! Property-Based Tests for the Store Module
//!
//! Uses proptest to check the store contract against arbitrary inputs.

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

use crate::models::requests::{CreateAlbumRequest, MAX_PRICE, MIN_PRICE};
use crate::models::Album;
use crate::store::{AlbumStore, MemoryStore, StoreError};

// == Strategies ==
/// Generates album IDs (non-empty, no path separators)
fn id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,16}"
}

/// Generates albums that pass request validation
fn valid_album_strategy() -> impl Strategy<Value = Album> {
    (
        id_strategy(),
        "[a-zA-Z ]{1,32}",
        "[a-zA-Z ]{1,32}",
        MIN_PRICE..MAX_PRICE,
    )
        .prop_map(|(id, title, artist, price)| Album::new(id, title, artist, price))
}

/// Runs an async block to completion on a fresh current-thread runtime.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build test runtime")
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Insert then get returns the album unchanged.
    #[test]
    fn prop_insert_get_roundtrip(album in valid_album_strategy()) {
        let store = MemoryStore::new();
        let retrieved = block_on(async {
            store.insert(album.clone()).await.unwrap();
            store.get_by_id(&album.id).await.unwrap()
        });
        prop_assert_eq!(retrieved, album);
    }

    // list() is sorted by ID and holds one album per distinct ID, whatever
    // the insertion order. The first album inserted for an ID wins.
    #[test]
    fn prop_list_sorted_first_insert_wins(
        albums in prop::collection::vec(valid_album_strategy(), 0..50)
    ) {
        let store = MemoryStore::new();
        let mut expected: BTreeMap<String, Album> = BTreeMap::new();

        let listed = block_on(async {
            for album in albums {
                let result = store.insert(album.clone()).await;
                if expected.contains_key(&album.id) {
                    assert!(matches!(result, Err(StoreError::Conflict(_))));
                } else {
                    assert!(result.is_ok());
                    expected.insert(album.id.clone(), album);
                }
            }
            store.list().await.unwrap()
        });

        let expected: Vec<Album> = expected.into_values().collect();
        prop_assert_eq!(listed, expected);
    }

    // get_by_id on an ID that was never inserted is NotFound.
    #[test]
    fn prop_absent_id_not_found(
        albums in prop::collection::vec(valid_album_strategy(), 0..20),
        probe in id_strategy()
    ) {
        let ids: HashSet<String> = albums.iter().map(|a| a.id.clone()).collect();
        prop_assume!(!ids.contains(&probe));

        let store = MemoryStore::with_albums(albums);
        let result = block_on(store.get_by_id(&probe));
        prop_assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    // Validation accepts exactly the prices in [MIN_PRICE, MAX_PRICE).
    #[test]
    fn prop_price_validation_range(price in any::<i64>()) {
        let req = CreateAlbumRequest {
            id: "p".to_string(),
            title: "T".to_string(),
            artist: "A".to_string(),
            price,
        };
        let in_range = (MIN_PRICE..MAX_PRICE).contains(&price);
        prop_assert_eq!(req.validate().is_ok(), in_range);
    }
}
