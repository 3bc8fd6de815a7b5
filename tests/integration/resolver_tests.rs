//! Tiered resolution across all three backends

use crate::common::StaticGeocoder;
use crate::common::assertions::DictionaryAssertions;
use crate::common::fixtures::{capitals, dict, keys};
use geocache::{
    CacheManager, CoordinateResolver, MemoryBlobStore, MemoryCache, PersistentCache, RemoteCache,
};
use std::sync::Arc;

struct Tiers {
    memory: Arc<MemoryCache>,
    persistent: Arc<PersistentCache<MemoryBlobStore>>,
    geocoder: Arc<StaticGeocoder>,
    resolver: CoordinateResolver,
}

async fn tiers() -> Tiers {
    let memory = Arc::new(MemoryCache::with_capacity(100, 10).unwrap());
    let persistent = Arc::new(PersistentCache::connect(MemoryBlobStore::new(), "K").await);
    let geocoder = Arc::new(StaticGeocoder::new(capitals()));
    let resolver = CoordinateResolver::new()
        .with_tier(memory.clone())
        .with_tier(persistent.clone())
        .with_tier(Arc::new(RemoteCache::new(geocoder.clone())));

    Tiers {
        memory,
        persistent,
        geocoder,
        resolver,
    }
}

#[tokio::test]
async fn test_second_resolve_served_from_memory() {
    let t = tiers().await;

    let first = t
        .resolver
        .resolve(&keys(&["Paris", "Rome", "Atlantis"]))
        .await
        .unwrap();
    first.assert_keys(&["Paris", "Rome"]);
    assert_eq!(t.geocoder.calls(), 1);

    let report = t
        .resolver
        .resolve_with_report(&keys(&["Paris", "Rome"]))
        .await
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.tiers.len(), 1);
    assert_eq!(report.tiers[0].hits, 2);
    assert_eq!(t.geocoder.calls(), 1);
}

#[tokio::test]
async fn test_remote_results_persisted() {
    let t = tiers().await;
    t.resolver.resolve(&keys(&["Vienna"])).await.unwrap();

    let stored = t.persistent.load_coordinates(&[]).await.unwrap();
    stored.assert_keys(&["Vienna"]);
    assert!(t.memory.contains_key("Vienna"));
}

#[tokio::test]
async fn test_persistent_hits_skip_remote() {
    let t = tiers().await;
    t.persistent
        .save_coordinates(&dict(&[("Home", 1.0, 2.0)]))
        .await
        .unwrap();

    let report = t
        .resolver
        .resolve_with_report(&keys(&["Home"]))
        .await
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(t.geocoder.calls(), 0);
    assert!(t.memory.contains_key("Home"));
}

#[tokio::test]
async fn test_unknown_keys_reported() {
    let t = tiers().await;
    let report = t
        .resolver
        .resolve_with_report(&keys(&["Atlantis", "Paris", "Lemuria"]))
        .await
        .unwrap();
    report.coordinates.assert_keys(&["Paris"]);
    assert_eq!(report.unresolved, keys(&["Atlantis", "Lemuria"]));
    assert_eq!(
        report.tiers.iter().map(|t| t.tier).collect::<Vec<_>>(),
        vec!["memory", "persistent", "remote"]
    );
}
