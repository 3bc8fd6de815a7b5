//! Blob store implementations
//!
//! This module provides the string blob stores the persistent cache writes to.

mod backend;
mod local;
mod memory;

// Re-export public types
pub use backend::BlobStoreBackend;
pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
