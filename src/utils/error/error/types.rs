//! Error types for the coordinate cache

use thiserror::Error;

/// Result type alias for the coordinate cache
pub type Result<T> = std::result::Result<T, GeocacheError>;

/// Main error type for the coordinate cache
#[derive(Error, Debug)]
pub enum GeocacheError {
    /// The caller supplied no keys where at least one was required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// The backing blob store could not be read or written
    #[error("Backing store unavailable: {0}")]
    StoreUnavailable(String),

    /// Stored data does not have the expected shape
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// The backend does not support the requested operation
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Remote geocoder errors
    #[error("Geocoder error: {0}")]
    Geocoder(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
