//! BlobStoreBackend enum implementation with dispatch methods

use crate::config::{BlobBackendKind, StorageConfig};
use crate::core::traits::{BlobStore, PermissionState};
use crate::utils::error::Result;
use async_trait::async_trait;
use tracing::info;

use super::local::LocalBlobStore;
use super::memory::MemoryBlobStore;

/// Blob store selected by configuration
#[derive(Debug, Clone)]
pub enum BlobStoreBackend {
    /// In-process storage
    Memory(MemoryBlobStore),
    /// Local file system storage
    Local(LocalBlobStore),
}

impl BlobStoreBackend {
    /// Create a new blob store instance
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing blob storage: {}", config.backend);

        match config.backend {
            BlobBackendKind::Memory => Ok(BlobStoreBackend::Memory(MemoryBlobStore::new())),
            BlobBackendKind::Local => Ok(BlobStoreBackend::Local(
                LocalBlobStore::new(config.local_path_or_default()).await?,
            )),
        }
    }

    pub fn kind(&self) -> BlobBackendKind {
        match self {
            BlobStoreBackend::Memory(_) => BlobBackendKind::Memory,
            BlobStoreBackend::Local(_) => BlobBackendKind::Local,
        }
    }
}

#[async_trait]
impl BlobStore for BlobStoreBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            BlobStoreBackend::Memory(store) => store.get(key).await,
            BlobStoreBackend::Local(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            BlobStoreBackend::Memory(store) => store.set(key, value).await,
            BlobStoreBackend::Local(store) => store.set(key, value).await,
        }
    }

    async fn status(&self) -> Result<PermissionState> {
        match self {
            BlobStoreBackend::Memory(store) => store.status().await,
            BlobStoreBackend::Local(store) => store.status().await,
        }
    }
}
