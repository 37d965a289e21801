//! Library configuration and constants.
//!
//! This module provides:
//! - Extraction patterns and method names
//! - HTTP header name constants
//! - Logger option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{LogFormat, LogLevel};
