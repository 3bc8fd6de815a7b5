//! In-process blob store

use crate::core::traits::{BlobStore, PermissionState};
use crate::utils::error::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Blob store held in memory
///
/// Clones share the same contents, so several adapters can observe one store.
#[derive(Debug, Clone)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
    permission: Arc<RwLock<PermissionState>>,
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBlobStore {
    /// Create an empty store that allows access
    pub fn new() -> Self {
        Self::with_permission(PermissionState::Allowed)
    }

    pub fn with_permission(permission: PermissionState) -> Self {
        Self {
            blobs: Arc::new(RwLock::new(HashMap::new())),
            permission: Arc::new(RwLock::new(permission)),
        }
    }

    /// Change what `status` reports from now on
    pub fn set_permission(&self, permission: PermissionState) {
        *self.permission.write() = permission;
    }

    /// Raw blob text, bypassing permission
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.read().get(key).cloned()
    }

    /// Overwrite raw blob text, bypassing permission
    pub fn put_raw(&self, key: &str, value: &str) {
        self.blobs.write().insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.put_raw(key, value);
        Ok(())
    }

    async fn status(&self) -> Result<PermissionState> {
        Ok(*self.permission.read())
    }
}
