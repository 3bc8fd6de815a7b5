//! Persistent cache over real blob stores

use crate::common::FailingBlobStore;
use crate::common::assertions::DictionaryAssertions;
use crate::common::fixtures::{capitals, dict, keys};
use geocache::config::{BlobBackendKind, StorageConfig};
use geocache::{
    BlobStore, CacheManager, Coordinate, DiscardReason, LocalBlobStore, MemoryBlobStore,
    PermissionState, PersistentCache, SaveStatus, open_persistent_cache,
};
use tempfile::TempDir;

const KEY: &str = "GEOCODE_TILE_LOCATIONS";

#[tokio::test]
async fn test_local_store_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = LocalBlobStore::new(dir.path()).await.unwrap();
        let cache = PersistentCache::connect(store, KEY).await;
        let status = cache.save_coordinates(&capitals()).await.unwrap();
        assert_eq!(status, SaveStatus::Stored(5));
    }

    let store = LocalBlobStore::new(dir.path()).await.unwrap();
    let cache = PersistentCache::connect(store, KEY).await;
    let all = cache.load_coordinates(&[]).await.unwrap();
    all.assert_keys(&["Paris", "Berlin", "Madrid", "Rome", "Vienna"]);
}

#[tokio::test]
async fn test_local_store_blob_format() {
    let dir = TempDir::new().unwrap();
    let store = LocalBlobStore::new(dir.path()).await.unwrap();
    let cache = PersistentCache::connect(store.clone(), KEY).await;
    cache
        .save_coordinates(&dict(&[("Oslo", 59.9, 10.7)]))
        .await
        .unwrap();

    let raw = store.get(KEY).await.unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "Oslo": { "lat": 59.9, "lon": 10.7 } }));
}

#[tokio::test]
async fn test_two_adapters_share_one_store() {
    let store = MemoryBlobStore::new();
    let writer = PersistentCache::connect(store.clone(), KEY).await;
    let reader = PersistentCache::connect(store, KEY).await;

    writer
        .save_coordinates(&dict(&[("A", 1.0, 1.0)]))
        .await
        .unwrap();
    writer
        .save_coordinates(&dict(&[("B", 2.0, 2.0)]))
        .await
        .unwrap();

    let found = reader.load_coordinates(&keys(&["A", "B"])).await.unwrap();
    found.assert_keys(&["A", "B"]);
}

#[tokio::test]
async fn test_storage_keys_are_independent() {
    let store = MemoryBlobStore::new();
    let tiles = PersistentCache::connect(store.clone(), "TILES").await;
    let pins = PersistentCache::connect(store, "PINS").await;

    tiles
        .save_coordinates(&dict(&[("A", 1.0, 1.0)]))
        .await
        .unwrap();
    assert!(pins.load_coordinates(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_not_supported_store_discards() {
    let store = MemoryBlobStore::with_permission(PermissionState::NotSupported);
    let cache = PersistentCache::connect(store.clone(), KEY).await;

    let status = cache.save_coordinates(&capitals()).await.unwrap();
    assert_eq!(status, SaveStatus::Discarded(DiscardReason::PermissionDenied));
    assert!(store.raw(KEY).is_none());

    // Granting permission takes effect only after a resync
    store.set_permission(PermissionState::Allowed);
    assert!(!cache.save_coordinates(&capitals()).await.unwrap().is_stored());
    cache.sync_status().await;
    assert!(cache.save_coordinates(&capitals()).await.unwrap().is_stored());
}

#[tokio::test]
async fn test_failing_store_never_errors() {
    let cache = PersistentCache::connect(FailingBlobStore, KEY).await;

    assert!(cache.load_coordinates(&keys(&["A"])).await.unwrap().is_empty());
    assert!(cache.load_coordinates(&[]).await.unwrap().is_empty());
    assert_eq!(
        cache
            .save_coordinates(&dict(&[("A", 1.0, 1.0)]))
            .await
            .unwrap(),
        SaveStatus::Discarded(DiscardReason::StoreUnavailable)
    );
}

#[tokio::test]
async fn test_open_from_local_config() {
    let dir = TempDir::new().unwrap();
    let config = StorageConfig {
        backend: BlobBackendKind::Local,
        local_path: Some(dir.path().join("store").to_string_lossy().to_string()),
        storage_key: "TEST_LOCATIONS".to_string(),
    };

    let cache = open_persistent_cache(&config).await.unwrap();
    assert_eq!(cache.permission(), Some(PermissionState::Allowed));
    cache
        .save_coordinates(&dict(&[("Quito", -0.18, -78.47)]))
        .await
        .unwrap();

    assert!(dir.path().join("store").join("TEST_LOCATIONS.json").is_file());
    let found = cache.load_coordinates(&keys(&["Quito"])).await.unwrap();
    found.assert_coordinate("Quito", Coordinate::new(-0.18, -78.47));
}
