//! Common test utilities for geocache-rs
//!
//! ```rust,ignore
//! use crate::common::fixtures::{dict, keys};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let cache = geocache::MemoryCache::with_capacity(10, 1).unwrap();
//!     cache.save_coordinates(&dict(&[("A", 1.0, 2.0)])).await.unwrap();
//! }
//! ```

pub mod assertions;
pub mod doubles;
pub mod fixtures;

// Re-export commonly used items
pub use doubles::{FailingBlobStore, StaticGeocoder};
pub use fixtures::{dict, keys};
