//! Storage layer for the coordinate cache
//!
//! This module provides the blob stores behind the persistent backend.

/// Blob store module
pub mod blob;

pub use blob::{BlobStoreBackend, LocalBlobStore, MemoryBlobStore};

use crate::config::StorageConfig;
use crate::core::backends::PersistentCache;
use crate::utils::error::Result;
use tracing::info;

/// Open the configured blob store and wrap it in a persistent cache
///
/// The permission flag is synced once before returning.
pub async fn open_persistent_cache(
    config: &StorageConfig,
) -> Result<PersistentCache<BlobStoreBackend>> {
    let backend = BlobStoreBackend::new(config).await?;
    let cache = PersistentCache::connect(backend, config.storage_key.clone()).await;
    info!(
        key = %config.storage_key,
        permission = ?cache.permission(),
        "Persistent coordinate cache opened"
    );
    Ok(cache)
}
