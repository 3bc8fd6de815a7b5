//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

#![allow(missing_docs)]

pub mod cache;
pub mod logging;
pub mod storage;

// Re-export all configuration types
pub use cache::*;
pub use logging::*;
pub use storage::*;

pub fn default_max_cache_size() -> usize {
    10_000
}

pub fn default_max_cache_size_overflow() -> usize {
    100
}

pub fn default_storage_key() -> String {
    "GEOCODE_TILE_LOCATIONS".to_string()
}

pub fn default_local_path() -> String {
    "./data".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
