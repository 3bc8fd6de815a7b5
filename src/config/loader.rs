//! Configuration loading from environment variables
//!
//! Recognised variables:
//! `GEOCACHE_MAX_CACHE_SIZE`, `GEOCACHE_MAX_CACHE_SIZE_OVERFLOW`,
//! `GEOCACHE_STORAGE_BACKEND`, `GEOCACHE_STORAGE_PATH`, `GEOCACHE_STORAGE_KEY`,
//! `GEOCACHE_LOG_LEVEL`, `GEOCACHE_LOG_JSON`.

use super::Config;
use crate::utils::error::{GeocacheError, Result};
use tracing::debug;

/// Overlay environment values onto `config`
///
/// `lookup` abstracts `std::env::var` so the parsing can be tested without
/// touching the process environment.
pub fn apply_env<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(size) = lookup("GEOCACHE_MAX_CACHE_SIZE") {
        config.cache.max_cache_size = size
            .parse()
            .map_err(|e| GeocacheError::Config(format!("Invalid max cache size: {}", e)))?;
    }
    if let Some(overflow) = lookup("GEOCACHE_MAX_CACHE_SIZE_OVERFLOW") {
        config.cache.max_cache_size_overflow = overflow
            .parse()
            .map_err(|e| GeocacheError::Config(format!("Invalid max cache overflow: {}", e)))?;
    }

    if let Some(backend) = lookup("GEOCACHE_STORAGE_BACKEND") {
        config.storage.backend = backend.parse().map_err(GeocacheError::Config)?;
    }
    if let Some(path) = lookup("GEOCACHE_STORAGE_PATH") {
        config.storage.local_path = Some(path);
    }
    if let Some(key) = lookup("GEOCACHE_STORAGE_KEY") {
        config.storage.storage_key = key;
    }

    if let Some(level) = lookup("GEOCACHE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = lookup("GEOCACHE_LOG_JSON") {
        config.logging.json = json
            .parse()
            .map_err(|e| GeocacheError::Config(format!("Invalid log json flag: {}", e)))?;
    }

    debug!("Configuration loaded from environment variables");
    Ok(config)
}
