//! # geocache-rs
//!
//! A multi-backend coordinate cache for geocoding.
//!
//! Three interchangeable backends share one async contract, [`CacheManager`]:
//!
//! - **Memory**: bounded, hit-count biased in-process cache
//! - **Persistent**: one JSON blob in an async key/value [`BlobStore`], gated
//!   by a storage permission check
//! - **Remote**: a read-only adapter over any [`Geocoder`]
//!
//! [`CoordinateResolver`] chains them fastest first and writes results back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geocache::{CacheManager, Coordinate, CoordinateDictionary, MemoryCache};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cache = MemoryCache::with_capacity(10_000, 100)?;
//!
//!     let mut coordinates = CoordinateDictionary::new();
//!     coordinates.insert("Paris".to_string(), Coordinate::new(48.8566, 2.3522));
//!     cache.save_coordinates(&coordinates).await?;
//!
//!     let found = cache.load_coordinates(&["Paris".to_string()]).await?;
//!     println!("Paris is at {:?}", found["Paris"]);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GeocacheError, Result};

pub use core::backends::{PersistentCache, RemoteCache};
pub use core::cache_manager::{MemoryCache, MemoryCacheStats};
pub use core::resolver::{CoordinateResolver, ResolveReport, TierHits};
pub use core::traits::{
    BlobStore, CacheManager, DiscardReason, Geocoder, PermissionState, SaveStatus,
};
pub use core::types::{Coordinate, CoordinateDictionary, LocationKey};
pub use storage::{BlobStoreBackend, LocalBlobStore, MemoryBlobStore, open_persistent_cache};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
