//! Cache manager contract
//!
//! Every backend (memory, persistent, remote) exposes the same two async
//! operations so a caller can substitute one for another without branching
//! on its concrete type.

use crate::core::types::{CoordinateDictionary, LocationKey};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Why a save did not reach its backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Persistent access is not currently permitted
    PermissionDenied,
    /// The backing store rejected or failed the write
    StoreUnavailable,
}

/// Outcome of `save_coordinates`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Number of entries accepted by the backend
    Stored(usize),
    /// The save was absorbed without touching storage
    Discarded(DiscardReason),
}

impl SaveStatus {
    pub fn is_stored(&self) -> bool {
        matches!(self, SaveStatus::Stored(_))
    }
}

/// Uniform cache interface shared by all coordinate backends
#[async_trait]
pub trait CacheManager: Send + Sync {
    /// Load coordinates for `keys`; keys the backend does not know are omitted
    async fn load_coordinates(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary>;

    /// Save coordinates into the backend
    async fn save_coordinates(&self, coordinates: &CoordinateDictionary) -> Result<SaveStatus>;

    /// Short label for diagnostics
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T> CacheManager for Arc<T>
where
    T: CacheManager + ?Sized,
{
    async fn load_coordinates(&self, keys: &[LocationKey]) -> Result<CoordinateDictionary> {
        (**self).load_coordinates(keys).await
    }

    async fn save_coordinates(&self, coordinates: &CoordinateDictionary) -> Result<SaveStatus> {
        (**self).save_coordinates(coordinates).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
