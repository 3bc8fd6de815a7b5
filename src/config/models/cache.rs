//! Memory cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Capacity parameters of the in-process coordinate cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of entries kept after an eviction pass
    #[serde(default = "default_max_cache_size")]
    pub max_cache_size: usize,
    /// Extra entries tolerated above `max_cache_size` before evicting
    #[serde(default = "default_max_cache_size_overflow")]
    pub max_cache_size_overflow: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_cache_size: default_max_cache_size(),
            max_cache_size_overflow: default_max_cache_size_overflow(),
        }
    }
}

impl CacheConfig {
    pub fn new(max_cache_size: usize, max_cache_size_overflow: usize) -> Self {
        Self {
            max_cache_size,
            max_cache_size_overflow,
        }
    }

    /// Live-entry count at which the next insert triggers eviction
    pub fn max_cache_count(&self) -> usize {
        self.max_cache_size.saturating_add(self.max_cache_size_overflow)
    }

    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_cache_size != default_max_cache_size() {
            self.max_cache_size = other.max_cache_size;
        }
        if other.max_cache_size_overflow != default_max_cache_size_overflow() {
            self.max_cache_size_overflow = other.max_cache_size_overflow;
        }
        self
    }
}
