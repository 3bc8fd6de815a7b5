//! System utilities
//!
//! This module provides result/option extension traits used to absorb
//! non-fatal failures with a log line instead of propagating them.

pub mod result;

pub use result::*;
