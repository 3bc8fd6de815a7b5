//! Storage and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::storage::LocalBlobStore;

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.storage_key.trim().is_empty() {
            return Err("Storage key cannot be empty".to_string());
        }

        // Keys name blob files; rewriting them could merge two keys into one file
        if !LocalBlobStore::is_valid_key(&self.storage_key) {
            return Err(format!(
                "Storage key may only contain ASCII letters, digits, '_', '-' and '.' and must not start with '.': {}",
                self.storage_key
            ));
        }

        if self.backend == BlobBackendKind::Local {
            if let Some(path) = &self.local_path {
                if path.trim().is_empty() {
                    return Err("Local storage path cannot be empty".to_string());
                }
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
