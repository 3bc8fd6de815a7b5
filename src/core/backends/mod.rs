//! Cache backends wrapping external collaborators
//!
//! - `persistent`: durable coordinates in a single JSON blob of a [`BlobStore`]
//! - `remote`: read-only lookups against a [`Geocoder`]
//!
//! [`BlobStore`]: crate::core::traits::BlobStore
//! [`Geocoder`]: crate::core::traits::Geocoder

mod persistent;
mod remote;


pub use persistent::PersistentCache;
pub use remote::RemoteCache;
