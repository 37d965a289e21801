//! Optional application setup.
//!
//! Nothing in the parser or request builder requires this module.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
