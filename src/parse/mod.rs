//! curl string extraction.
//!
//! This module pulls the request parts out of a "Copy as cURL" string:
//! - Target URL (`curl '<url>' `), validated as an absolute URL
//! - Headers (`-H '<name>: <value>'`), with accept-encoding split off
//! - Body (` --data '<body>' `), which also decides the method
//!
//! All extraction is pattern matching over the whole input via the `regex`
//! crate; there is no shell tokenization.

mod patterns;
mod target;

use std::collections::HashMap;

use reqwest::Method;
use url::Url;

use crate::error_handling::UncurlError;

use patterns::ExtractedHeaders;

/// Request parts extracted from a curl string, before request validation.
#[derive(Debug, Clone)]
pub(crate) struct Extracted {
    /// The target exactly as quoted in the input.
    pub raw_target: String,
    pub target: Url,
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub accept_encoding: Option<String>,
    pub body: Vec<u8>,
}

/// Extracts target, headers, accept-encoding, method and body from `input`.
///
/// # Errors
///
/// - `UncurlError::InvalidInput` if `input` is empty
/// - `UncurlError::MissingTarget` if no `curl '<url>' ` prefix is found
/// - `UncurlError::InvalidTarget` if the target is not an absolute URL
pub(crate) fn extract(input: &[u8]) -> Result<Extracted, UncurlError> {
    if input.is_empty() {
        return Err(UncurlError::InvalidInput);
    }

    let raw_target = patterns::find_target(input).ok_or_else(|| UncurlError::MissingTarget {
        input: String::from_utf8_lossy(input).into_owned(),
    })?;
    let target =
        target::validate_target(raw_target).map_err(|reason| UncurlError::InvalidTarget {
            target: String::from_utf8_lossy(raw_target).into_owned(),
            reason,
        })?;

    let ExtractedHeaders {
        headers,
        accept_encoding,
    } = patterns::find_headers(input);

    let (method, body) = match patterns::find_body(input) {
        Some(body) => (Method::POST, body.to_vec()),
        None => (Method::GET, Vec::new()),
    };

    Ok(Extracted {
        raw_target: String::from_utf8_lossy(raw_target).into_owned(),
        target,
        method,
        headers,
        accept_encoding,
        body,
    })
}
