//! Bounded in-process coordinate cache
//!
//! Entries are ranked by how often they are read. When the live count reaches
//! `max_cache_size + max_cache_size_overflow`, everything below the top
//! `max_cache_size` is evicted. Eviction normally just tombstones slots; once
//! the map has grown to twice the cache capacity it is rebuilt from the
//! survivors instead, so physical cleanup is paid for in bulk.

pub mod manager;
pub mod store;
pub mod types;


pub use manager::MemoryCache;
pub use store::CoordinateStore;
pub use types::{CacheEntry, EvictionKind, MemoryCacheStats, Slot, SlotState};
