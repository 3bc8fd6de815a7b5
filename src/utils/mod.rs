//! Utility modules for the coordinate cache
//!
//! - **error**: Error type and helpers
//! - **logging**: Tracing subscriber setup
//! - **sys**: Result/option extension traits

pub mod error;
pub mod logging;
pub mod sys;

pub use error::{GeocacheError, Result};
pub use sys::ResultExt;
