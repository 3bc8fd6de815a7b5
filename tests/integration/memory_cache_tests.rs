//! Memory cache behaviour through the public contract

use crate::common::assertions::{DictionaryAssertions, assert_within_capacity};
use crate::common::fixtures::{capitals, dict, generated, keys};
use geocache::{CacheManager, Coordinate, GeocacheError, MemoryCache, SaveStatus};

#[tokio::test]
async fn test_capitals_round_trip() {
    let cache = MemoryCache::with_capacity(100, 10).unwrap();
    let status = cache.save_coordinates(&capitals()).await.unwrap();
    assert_eq!(status, SaveStatus::Stored(5));

    let found = cache
        .load_coordinates(&keys(&["Paris", "Rome", "Lisbon"]))
        .await
        .unwrap();
    found.assert_keys(&["Paris", "Rome"]);
    found.assert_coordinate("Paris", Coordinate::new(48.8566, 2.3522));
}

#[tokio::test]
async fn test_frequently_read_entries_survive_bulk_load() {
    let cache = MemoryCache::with_capacity(10, 2).unwrap();
    cache.save_coordinates(&capitals()).await.unwrap();
    for _ in 0..5 {
        cache
            .load_coordinates(&keys(&["Paris", "Berlin"]))
            .await
            .unwrap();
    }

    for (key, coordinate) in generated(500) {
        cache.save_coordinate(&key, coordinate);
        assert_within_capacity(&cache);
    }

    assert!(cache.contains_key("Paris"));
    assert!(cache.contains_key("Berlin"));
    assert!(cache.hit_count("Paris").unwrap() > cache.hit_count("Madrid").unwrap_or(0));
}

#[tokio::test]
async fn test_bulk_save_larger_than_capacity() {
    let cache = MemoryCache::with_capacity(50, 5).unwrap();
    let status = cache.save_coordinates(&generated(1_000)).await.unwrap();

    // Every offered entry was new when inserted
    assert_eq!(status, SaveStatus::Stored(1_000));
    assert_within_capacity(&cache);
    assert!(cache.len() >= 50);
    assert_eq!(cache.snapshot().len(), cache.len());
    assert!(cache.stats().evicted >= 945);
}

#[tokio::test]
async fn test_empty_keys_rejected() {
    let cache = MemoryCache::with_capacity(10, 1).unwrap();
    let err = cache.load_coordinates(&[]).await.unwrap_err();
    assert!(matches!(err, GeocacheError::EmptyInput(_)));
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn test_out_of_range_coordinates_stored_verbatim() {
    let cache = MemoryCache::with_capacity(10, 1).unwrap();
    cache
        .save_coordinates(&dict(&[("Nowhere", 999.0, -999.0)]))
        .await
        .unwrap();
    let found = cache.load_coordinates(&keys(&["Nowhere"])).await.unwrap();
    found.assert_coordinate("Nowhere", Coordinate::new(999.0, -999.0));
}
