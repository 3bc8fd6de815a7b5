//! Error handling utilities
//!
//! This module provides the crate error type and the helpers used to build it.

pub mod error;

// Re-export commonly used types and functions
pub use error::*;
