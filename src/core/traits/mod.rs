//! Core traits module
//!
//! Contains the contracts every backend and external collaborator implements.

pub mod blob_store;
pub mod cache;
pub mod geocoder;

pub use blob_store::*;
pub use cache::*;
pub use geocoder::*;
