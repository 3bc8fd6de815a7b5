//! Persistent storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Blob store backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobBackendKind {
    /// In-process map, lost on exit
    #[default]
    Memory,
    /// One file per storage key under `local_path`
    Local,
}

impl std::fmt::Display for BlobBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlobBackendKind::Memory => write!(f, "memory"),
            BlobBackendKind::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for BlobBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(BlobBackendKind::Memory),
            "local" => Ok(BlobBackendKind::Local),
            other => Err(format!("Unsupported storage backend: {}", other)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Blob store backend
    #[serde(default)]
    pub backend: BlobBackendKind,
    /// Base directory for the local backend
    #[serde(default)]
    pub local_path: Option<String>,
    /// Key under which the coordinate blob is stored
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BlobBackendKind::default(),
            local_path: None,
            storage_key: default_storage_key(),
        }
    }
}

impl StorageConfig {
    /// Local path, falling back to the default data directory
    pub fn local_path_or_default(&self) -> String {
        self.local_path.clone().unwrap_or_else(default_local_path)
    }

    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.backend != BlobBackendKind::default() {
            self.backend = other.backend;
        }
        if other.local_path.is_some() {
            self.local_path = other.local_path;
        }
        if other.storage_key != default_storage_key() {
            self.storage_key = other.storage_key;
        }
        self
    }
}
