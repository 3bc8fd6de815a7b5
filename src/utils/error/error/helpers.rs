//! Helper functions for creating specific error types

use super::types::GeocacheError;

/// Helper functions for creating specific errors
impl GeocacheError {
    pub fn empty_input<S: Into<String>>(message: S) -> Self {
        Self::EmptyInput(message.into())
    }

    pub fn store_unavailable<S: Into<String>>(message: S) -> Self {
        Self::StoreUnavailable(message.into())
    }

    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedData(message.into())
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn geocoder<S: Into<String>>(message: S) -> Self {
        Self::Geocoder(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

impl GeocacheError {
    /// Whether the error reflects bad caller input or configuration rather than a backend fault
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_) | Self::Config(_))
    }
}
