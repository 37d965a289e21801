//! uncurl: turn a Chrome/Chromium "Copy as cURL" string into reusable `reqwest` requests.
//!
//! In Chrome or Chromium developer tools, the Network tab's context menu offers
//! *Copy → Copy as cURL*, which produces a `curl` command reproducing the
//! selected request. This library parses that text into a [`ParsedRequest`]
//! and builds [`ReplayRequest`]s from it: the captured request itself, or new
//! requests with other targets, methods or bodies that keep the captured headers.
//!
//! # Example
//!
//! ```
//! use uncurl::ParsedRequest;
//!
//! # fn main() -> Result<(), uncurl::UncurlError> {
//! let parsed = ParsedRequest::new(
//!     "curl 'https://example.com/b' -H 'Content-Type: application/json' --data '{\"k\":1}' ",
//! )?;
//! assert_eq!(parsed.method(), reqwest::Method::POST);
//!
//! // The capture as-is...
//! let replay = parsed.request();
//! assert_eq!(replay.headers()["content-type"], "application/json");
//!
//! // ...or a variation with the same headers.
//! let other = parsed.new_request("POST", "https://example.com/c", Some("{\"k\":2}".into()))?;
//! let request: reqwest::Request = other.into_request();
//! assert_eq!(request.url().path(), "/c");
//! # Ok(())
//! # }
//! ```
//!
//! Executing requests is left to the caller's `reqwest::Client`.
//!
//! # Accept-Encoding
//!
//! A captured `Accept-Encoding` header is never copied onto built requests,
//! because setting it explicitly disables `reqwest`'s automatic response
//! decompression. Its value stays available through
//! [`ParsedRequest::accept_encoding`].

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod parse;
mod parsed_request;
mod request;

// Re-export public API
pub use config::{LogFormat, LogLevel};
pub use error_handling::{BuildError, ErrorKind, InitializationError, TargetError, UncurlError};
pub use parsed_request::ParsedRequest;
pub use request::{ReplayRequest, RequestContext};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
