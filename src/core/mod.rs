//! Core functionality for the coordinate cache
//!
//! This module contains the cache contract, its three backends and the
//! tiered resolver built on top of them.

pub mod backends;
pub mod cache_manager;
pub mod resolver;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use backends::{PersistentCache, RemoteCache};
pub use cache_manager::MemoryCache;
pub use resolver::{CoordinateResolver, ResolveReport};
