//! Asynchronous key/value blob store consumed by the persistent backend

use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Whether persistent access is currently permitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Allowed,
    NotAllowed,
    NotSupported,
}

impl PermissionState {
    pub fn is_allowed(&self) -> bool {
        matches!(self, PermissionState::Allowed)
    }
}

/// Opaque string blob store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`; `Ok(None)` when nothing is stored yet
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Current access permission
    async fn status(&self) -> Result<PermissionState>;
}

#[async_trait]
impl<T> BlobStore for Arc<T>
where
    T: BlobStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn status(&self) -> Result<PermissionState> {
        (**self).status().await
    }
}
