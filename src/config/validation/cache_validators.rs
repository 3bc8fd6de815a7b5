//! Memory cache configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_cache_size == 0 {
            return Err("Cache max size must be greater than 0".to_string());
        }

        // Eviction trims to max_cache_size and the pending insert adds one more.
        if self.max_cache_size_overflow == 0 {
            return Err("Cache max size overflow must be greater than 0".to_string());
        }

        if self.max_cache_size.checked_add(self.max_cache_size_overflow).is_none() {
            return Err("Cache max size plus overflow overflows usize".to_string());
        }

        Ok(())
    }
}
