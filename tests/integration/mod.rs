//! Integration tests for geocache-rs
//!
//! These tests exercise the public API with real stores; external
//! collaborators are replaced by the doubles in `common`.

pub mod config_tests;
pub mod memory_cache_tests;
pub mod persistent_cache_tests;
pub mod resolver_tests;
