//! Logging utilities
//!
//! Installs the global `tracing` subscriber used by the binary.

use crate::config::LoggingConfig;
use crate::utils::error::{GeocacheError, Result};
use tracing_subscriber::EnvFilter;

/// Build the env filter: `RUST_LOG` wins over the configured level
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            GeocacheError::config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Initialize the global tracing subscriber
///
/// Fails if a subscriber is already installed or the level is not a valid filter.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config)?;

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    };

    installed.map_err(|e| GeocacheError::config(format!("Failed to install logger: {}", e)))
}
