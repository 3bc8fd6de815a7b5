//! Hand-written collaborators for integration tests

use async_trait::async_trait;
use geocache::{
    BlobStore, CoordinateDictionary, GeocacheError, Geocoder, LocationKey, PermissionState, Result,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Geocoder answering from a fixed table and counting calls
#[derive(Debug, Default)]
pub struct StaticGeocoder {
    known: CoordinateDictionary,
    calls: AtomicUsize,
}

impl StaticGeocoder {
    pub fn new(known: CoordinateDictionary) -> Self {
        Self {
            known,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode_by_keys(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(keys
            .iter()
            .filter_map(|key| self.known.get(key).map(|c| (key.clone(), *c)))
            .collect())
    }
}

/// Blob store that reports `Allowed` but fails every read and write
#[derive(Debug, Default)]
pub struct FailingBlobStore;

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(GeocacheError::store_unavailable("read refused"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(GeocacheError::store_unavailable("write refused"))
    }

    async fn status(&self) -> Result<PermissionState> {
        Ok(PermissionState::Allowed)
    }
}
