//! Remote geocoding service consumed by the remote backend
//!
//! The wire protocol and authentication live with the implementor.

use crate::core::types::{CoordinateDictionary, LocationKey};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves location keys to coordinates
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocode every key it can; unresolvable keys are omitted from the result
    async fn geocode_by_keys(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary>;
}
