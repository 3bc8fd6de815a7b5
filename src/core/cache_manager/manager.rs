//! Memory cache manager implementation

use super::store::CoordinateStore;
use super::types::MemoryCacheStats;
use crate::config::CacheConfig;
use crate::core::traits::{CacheManager, SaveStatus};
use crate::core::types::{Coordinate, CoordinateDictionary, LocationKey};
use crate::utils::error::{GeocacheError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

/// Volatile coordinate cache, the first tier callers consult
///
/// All operations complete without suspending; the internal lock is never
/// held across an `.await`.
#[derive(Debug)]
pub struct MemoryCache {
    store: Mutex<CoordinateStore>,
}

impl MemoryCache {
    /// Create a new memory cache
    pub fn new(config: CacheConfig) -> Result<Self> {
        Ok(Self {
            store: Mutex::new(CoordinateStore::new(config)?),
        })
    }

    /// Shorthand for `new(CacheConfig::new(max_cache_size, max_cache_size_overflow))`
    pub fn with_capacity(max_cache_size: usize, max_cache_size_overflow: usize) -> Result<Self> {
        Self::new(CacheConfig::new(max_cache_size, max_cache_size_overflow))
    }

    /// Insert a single coordinate unless the key is already live
    pub fn save_coordinate(&self, key: &str, coordinate: Coordinate) -> bool {
        self.store.lock().insert(key, coordinate)
    }

    /// Every live entry; each returned entry counts as read
    pub fn snapshot(&self) -> CoordinateDictionary {
        self.store.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn physical_len(&self) -> usize {
        self.store.lock().physical_len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.store.lock().contains_key(key)
    }

    pub fn hit_count(&self, key: &str) -> Option<u64> {
        self.store.lock().hit_count(key)
    }

    pub fn config(&self) -> CacheConfig {
        *self.store.lock().config()
    }

    pub fn stats(&self) -> MemoryCacheStats {
        self.store.lock().stats()
    }

    pub fn clear(&self) {
        self.store.lock().clear();
        debug!("Memory cache cleared");
    }
}

#[async_trait]
impl CacheManager for MemoryCache {
    async fn load_coordinates(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary> {
        if keys.is_empty() {
            return Err(GeocacheError::empty_input("No locations to be loaded"));
        }

        let found = self.store.lock().get_many(keys);
        debug!(
            requested = keys.len(),
            found = found.len(),
            "Loaded coordinates from memory cache"
        );
        Ok(found)
    }

    async fn save_coordinates(&self, coordinates: &CoordinateDictionary) -> Result<SaveStatus> {
        let mut inserted = 0;
        {
            let mut store = self.store.lock();
            for (key, coordinate) in coordinates {
                if store.insert(key, *coordinate) {
                    inserted += 1;
                }
            }
        }

        debug!(
            offered = coordinates.len(),
            inserted, "Saved coordinates to memory cache"
        );
        Ok(SaveStatus::Stored(inserted))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
