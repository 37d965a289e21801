//! Error type definitions.
//!
//! This module defines all error types used throughout the library.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors returned while turning a curl string into a [`crate::ParsedRequest`]
/// or while building requests from one.
#[derive(Error, Debug)]
pub enum UncurlError {
    /// The input was empty.
    #[error("curl input is empty")]
    InvalidInput,

    /// No `curl '<url>' ` prefix was found.
    #[error("failed to find target URL in curl string {input}")]
    MissingTarget {
        /// The offending input (lossy UTF-8).
        input: String,
    },

    /// The target was found but is not an absolute URL.
    #[error("target URL {target} failed to parse: {reason}")]
    InvalidTarget {
        /// The candidate target as found in the input.
        target: String,
        /// Why the target was rejected.
        #[source]
        reason: TargetError,
    },

    /// The override method or URL cannot form a request.
    #[error("unable to build request from curl: {0}")]
    RequestBuild(#[from] BuildError),
}

/// Reasons a captured target URL is rejected.
#[derive(Error, Debug)]
pub enum TargetError {
    /// The quoted target is not valid UTF-8.
    #[error("target is not valid UTF-8")]
    NotUtf8,

    /// `url` refused to parse the target.
    #[error(transparent)]
    Parse(#[from] url::ParseError),

    /// The target parsed but names no host.
    #[error("URL has no host component")]
    MissingHost,
}

/// Errors raised when a request object cannot be assembled.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // Mirrors the http crate's error names
pub enum BuildError {
    /// The method is not a valid HTTP token.
    #[error("invalid method {method:?}: {source}")]
    InvalidMethod {
        /// The rejected method.
        method: String,
        /// Underlying http error.
        #[source]
        source: http::method::InvalidMethod,
    },

    /// The URL does not parse as an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Underlying url error.
        #[source]
        source: url::ParseError,
    },
}

/// Categories of failures, for callers that tally or report errors by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// See [`UncurlError::InvalidInput`].
    InvalidInput,
    /// See [`UncurlError::MissingTarget`].
    MissingTarget,
    /// See [`UncurlError::InvalidTarget`].
    InvalidTarget,
    /// See [`UncurlError::RequestBuild`].
    RequestBuild,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns a human-readable label for the error kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid input",
            ErrorKind::MissingTarget => "Missing target URL",
            ErrorKind::InvalidTarget => "Invalid target URL",
            ErrorKind::RequestBuild => "Request build error",
        }
    }
}

impl UncurlError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UncurlError::InvalidInput => ErrorKind::InvalidInput,
            UncurlError::MissingTarget { .. } => ErrorKind::MissingTarget,
            UncurlError::InvalidTarget { .. } => ErrorKind::InvalidTarget,
            UncurlError::RequestBuild(_) => ErrorKind::RequestBuild,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::error::Error as _;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid input");
        assert_eq!(ErrorKind::RequestBuild.to_string(), "Request build error");
    }

    #[test]
    fn test_all_error_kinds_have_distinct_string_representation() {
        let mut seen = HashSet::new();
        for kind in ErrorKind::iter() {
            let str_repr = kind.as_str();
            assert!(!str_repr.is_empty(), "{:?} should have non-empty string", kind);
            assert!(seen.insert(str_repr), "{:?} reuses label {}", kind, str_repr);
        }
    }

    #[test]
    fn test_uncurl_error_kind_mapping() {
        assert_eq!(UncurlError::InvalidInput.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            UncurlError::MissingTarget {
                input: "x".to_string()
            }
            .kind(),
            ErrorKind::MissingTarget
        );
        assert_eq!(
            UncurlError::InvalidTarget {
                target: "x".to_string(),
                reason: TargetError::MissingHost,
            }
            .kind(),
            ErrorKind::InvalidTarget
        );
    }

    #[test]
    fn test_invalid_target_keeps_parse_reason() {
        let parse_err = url::Url::parse("not a valid uri").unwrap_err();
        let err = UncurlError::InvalidTarget {
            target: "not a valid uri".to_string(),
            reason: TargetError::from(parse_err),
        };
        let msg = err.to_string();
        assert!(msg.contains("not a valid uri"), "message was: {}", msg);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_build_error_converts_into_uncurl_error() {
        let source = http::Method::from_bytes(b"BAD METHOD").unwrap_err();
        let err: UncurlError = BuildError::InvalidMethod {
            method: "BAD METHOD".to_string(),
            source,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::RequestBuild);
        assert!(err.to_string().contains("BAD METHOD"));
    }
}
