//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `cache_validators`: Memory cache capacity validators
//! - `storage_validators`: Storage and logging validators
//! - `tests`: Test suite for all validators

mod cache_validators;
mod storage_validators;
mod trait_def;

pub use trait_def::Validate;
