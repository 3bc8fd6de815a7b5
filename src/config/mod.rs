//! Configuration management for the coordinate cache
//!
//! This module handles loading, validation, and merging of configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GeocacheError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Memory cache capacity
    #[serde(default)]
    pub cache: CacheConfig,
    /// Persistent blob store
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GeocacheError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| GeocacheError::Config(format!("Failed to parse config: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = loader::apply_env(Self::default(), |name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the YAML file when given, then overlay `GEOCACHE_*` environment values
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        let config = loader::apply_env(base, |name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.cache
            .validate()
            .map_err(|e| GeocacheError::Config(format!("Cache config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| GeocacheError::Config(format!("Storage config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| GeocacheError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.cache = self.cache.merge(other.cache);
        self.storage = self.storage.merge(other.storage);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GeocacheError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GeocacheError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
