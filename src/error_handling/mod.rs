//! Error handling.
//!
//! This module provides the error types returned by parsing, request building
//! and logger setup, plus an [`ErrorKind`] taxonomy for reporting.
//!
//! Parse and build failures are categorized into:
//! - **InvalidInput**: empty input
//! - **MissingTarget**: no `curl '<url>' ` prefix
//! - **InvalidTarget**: the target is not an absolute URL
//! - **RequestBuild**: an override method or URL cannot form a request

mod types;

// Re-export public API
pub use types::{BuildError, ErrorKind, InitializationError, TargetError, UncurlError};
