//! Remote geocoder backend

use crate::core::traits::{CacheManager, Geocoder, SaveStatus};
use crate::core::types::{CoordinateDictionary, LocationKey};
use crate::utils::error::{GeocacheError, Result};
use crate::utils::sys::ResultExt;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Treats a remote geocoder as a read-only cache
#[derive(Clone)]
pub struct RemoteCache {
    geocoder: Arc<dyn Geocoder>,
}

impl RemoteCache {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }
}

impl std::fmt::Debug for RemoteCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCache").finish_non_exhaustive()
    }
}

#[async_trait]
impl CacheManager for RemoteCache {
    async fn load_coordinates(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary> {
        if keys.is_empty() {
            return Err(GeocacheError::empty_input("Empty location keys"));
        }

        let found = self
            .geocoder
            .geocode_by_keys(keys)
            .await
            .unwrap_or_log_default("remote geocoding");

        debug!(
            requested = keys.len(),
            found = found.len(),
            "Geocoded coordinates remotely"
        );
        Ok(found)
    }

    async fn save_coordinates(&self, _coordinates: &CoordinateDictionary) -> Result<SaveStatus> {
        Err(GeocacheError::unsupported(
            "remote geocoder backend is read-only",
        ))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
