//! Compiled extraction patterns and the matchers built on them.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::trace;
use regex::bytes::Regex;

use crate::config::{
    CURL_ACCEPT_ENCODING_PATTERN, CURL_DATA_PATTERN, CURL_HEADER_PATTERN, CURL_TARGET_PATTERN,
    HEADER_ACCEPT_ENCODING,
};

static CURL_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| compile(CURL_TARGET_PATTERN));
static CURL_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| compile(CURL_HEADER_PATTERN));
static CURL_DATA_RE: LazyLock<Regex> = LazyLock::new(|| compile(CURL_DATA_PATTERN));
static CURL_ACCEPT_ENCODING_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(CURL_ACCEPT_ENCODING_PATTERN));

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants covered by the tests below.
    Regex::new(pattern).expect("built-in curl pattern must compile")
}

/// Headers captured from the `-H` arguments of a curl string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ExtractedHeaders {
    /// Every header except accept-encoding, keyed by the name as written.
    pub headers: HashMap<String, String>,
    /// Value of the last accept-encoding header, if any.
    pub accept_encoding: Option<String>,
}

/// Returns the quoted target of the leading `curl '<url>' `, if present.
pub(crate) fn find_target(input: &[u8]) -> Option<&[u8]> {
    CURL_TARGET_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}

/// Collects all `-H '<name>: <value>'` arguments.
///
/// Later occurrences of a name overwrite earlier ones; names are compared
/// exactly, so `Accept` and `accept` are distinct entries. Accept-encoding
/// (any case) is diverted to [`ExtractedHeaders::accept_encoding`].
pub(crate) fn find_headers(input: &[u8]) -> ExtractedHeaders {
    let mut extracted = ExtractedHeaders::default();

    for caps in CURL_HEADER_RE.captures_iter(input) {
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();

        if CURL_ACCEPT_ENCODING_RE.is_match(name.as_bytes()) {
            trace!("Diverting {} header value {:?}", HEADER_ACCEPT_ENCODING, value);
            extracted.accept_encoding = Some(value);
            continue;
        }

        let name = String::from_utf8_lossy(name.as_bytes()).into_owned();
        if let Some(previous) = extracted.headers.insert(name.clone(), value) {
            trace!("Header {} repeated, dropping earlier value {:?}", name, previous);
        }
    }

    extracted
}

/// Returns the quoted body of the first ` --data '<body>' ` argument, if present.
pub(crate) fn find_body(input: &[u8]) -> Option<&[u8]> {
    CURL_DATA_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}
