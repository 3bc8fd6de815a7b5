//! Local file system blob store

use crate::core::traits::{BlobStore, PermissionState};
use crate::utils::error::{GeocacheError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// One file per storage key under a base directory
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store, creating the directory if needed
    pub async fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                GeocacheError::store_unavailable(format!(
                    "Failed to create storage directory: {}",
                    e
                ))
            })?;
        }

        info!("Local blob storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// File path for a storage key; keys that are not plain file names are rejected
    pub(crate) fn blob_path(&self, key: &str) -> Result<PathBuf> {
        if !Self::is_valid_key(key) {
            return Err(GeocacheError::config(format!(
                "Storage key '{}' is not a valid file name",
                key
            )));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    /// ASCII letters, digits, `_`, `-` and `.`; no leading dot
    pub fn is_valid_key(key: &str) -> bool {
        !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GeocacheError::store_unavailable(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        let tmp_path = self
            .base_path
            .join(format!(".{}.{}.tmp", key, Uuid::new_v4()));

        fs::write(&tmp_path, value).await.map_err(|e| {
            GeocacheError::store_unavailable(format!("Failed to write blob: {}", e))
        })?;

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(GeocacheError::store_unavailable(format!(
                "Failed to replace blob: {}",
                e
            )));
        }

        debug!("Blob stored: {} ({} bytes)", path.display(), value.len());
        Ok(())
    }

    async fn status(&self) -> Result<PermissionState> {
        match fs::metadata(&self.base_path).await {
            Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => {
                Ok(PermissionState::Allowed)
            }
            Ok(_) => Ok(PermissionState::NotAllowed),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PermissionState::NotAllowed),
            Err(e) => Err(GeocacheError::store_unavailable(format!(
                "Failed to inspect storage directory: {}",
                e
            ))),
        }
    }
}
