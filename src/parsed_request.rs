//! The parsed, immutable form of a "Copy as cURL" string.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};

use crate::error_handling::UncurlError;
use crate::parse::{self, Extracted};
use crate::request::header_map_from;

/// A curl command captured from Chrome/Chromium, parsed into request parts.
///
/// Built once with [`ParsedRequest::new`] (or `str::parse`) and never mutated
/// afterwards. Accessors hand out copies of the header map and body, so the
/// value can be shared freely and used as a template for any number of
/// requests via [`request`](Self::request) and
/// [`new_request`](Self::new_request).
///
/// # Examples
///
/// ```
/// use uncurl::ParsedRequest;
///
/// let parsed: ParsedRequest =
///     "curl 'https://example.com/a' -H 'X-Test: 1' -H 'accept-encoding: gzip' "
///         .parse()
///         .unwrap();
///
/// assert_eq!(parsed.target(), "https://example.com/a");
/// assert_eq!(parsed.method(), reqwest::Method::GET);
/// assert_eq!(parsed.headers()["X-Test"], "1");
/// assert_eq!(parsed.accept_encoding(), Some("gzip"));
/// assert!(parsed.body().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    input: Vec<u8>,
    target: String,
    pub(crate) target_url: Url,
    pub(crate) method: Method,
    headers: HashMap<String, String>,
    pub(crate) header_map: HeaderMap,
    pub(crate) body: Bytes,
    // Kept apart from `headers`: an explicit Accept-Encoding on a reqwest
    // request disables the client's automatic decompression.
    accept_encoding: Option<String>,
}

impl ParsedRequest {
    /// Parses a Chrome/Chromium "Copy as cURL" command.
    ///
    /// # Errors
    ///
    /// - `UncurlError::InvalidInput` if `input` is empty
    /// - `UncurlError::MissingTarget` if the input does not start with `curl '<url>' `
    /// - `UncurlError::InvalidTarget` if the target is not an absolute URL
    pub fn new(input: impl Into<Vec<u8>>) -> Result<Self, UncurlError> {
        let input = input.into();
        let Extracted {
            raw_target,
            target,
            method,
            headers,
            accept_encoding,
            body,
        } = parse::extract(&input)?;

        // Converted once here, so `request()` never fails.
        let header_map = header_map_from(&headers);

        debug!(
            "Parsed curl: {} {} ({} headers, {} body bytes, accept-encoding {})",
            method,
            target,
            headers.len(),
            body.len(),
            if accept_encoding.is_some() { "captured" } else { "absent" }
        );

        Ok(Self {
            input,
            target: raw_target,
            target_url: target,
            method,
            headers,
            header_map,
            body: Bytes::from(body),
            accept_encoding,
        })
    }

    /// The original curl string (lossy if it was not valid UTF-8).
    pub fn original_text(&self) -> String {
        String::from_utf8_lossy(&self.input).into_owned()
    }

    /// The original curl input, byte for byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.input
    }

    /// The target URL as written in the curl string.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The target URL, parsed.
    pub fn target_url(&self) -> &Url {
        &self.target_url
    }

    /// `POST` if the curl string carried a `--data` body, `GET` otherwise.
    pub fn method(&self) -> Method {
        self.method.clone()
    }

    /// A copy of the captured headers, names in their original case.
    ///
    /// Never contains accept-encoding; see [`accept_encoding`](Self::accept_encoding).
    pub fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }

    /// A copy of the `--data` body; empty if there was none.
    pub fn body(&self) -> Vec<u8> {
        self.body.to_vec()
    }

    /// The captured `accept-encoding` header value, if any.
    ///
    /// Set it on a built request yourself if you want to negotiate encodings
    /// manually instead of relying on the client's automatic decompression.
    pub fn accept_encoding(&self) -> Option<&str> {
        self.accept_encoding.as_deref()
    }
}

impl FromStr for ParsedRequest {
    type Err = UncurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&[u8]> for ParsedRequest {
    type Error = UncurlError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Vec<u8>> for ParsedRequest {
    type Error = UncurlError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ParsedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;

    #[test]
    fn test_parsed_request_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParsedRequest>();
    }

    #[test]
    fn test_original_text_round_trips() {
        let input = "  curl 'https://example.com/' -H 'A: 1' --compressed";
        let parsed = ParsedRequest::new(input).unwrap();
        assert_eq!(parsed.original_text(), input);
        assert_eq!(parsed.to_string(), input);
        assert_eq!(parsed.as_bytes(), input.as_bytes());
    }

    #[test]
    fn test_target_is_kept_verbatim() {
        // url normalizes a bare host to "https://example.com/"; the accessor must not
        let parsed: ParsedRequest = "curl 'https://example.com' ".parse().unwrap();
        assert_eq!(parsed.target(), "https://example.com");
        assert_eq!(parsed.target_url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_headers_accessor_returns_copies() {
        let parsed: ParsedRequest = "curl 'https://example.com/' -H 'X-Test: 1' "
            .parse()
            .unwrap();
        let mut first = parsed.headers();
        let second = parsed.headers();
        assert_eq!(first, second);

        first.insert("X-Test".to_string(), "changed".to_string());
        first.insert("X-New".to_string(), "1".to_string());
        assert_eq!(second["X-Test"], "1");
        assert_eq!(parsed.headers().len(), 1);
        assert_eq!(parsed.headers()["X-Test"], "1");
    }

    #[test]
    fn test_body_accessor_returns_copies() {
        let parsed: ParsedRequest = "curl 'https://example.com/' --data 'abc' "
            .parse()
            .unwrap();
        let mut body = parsed.body();
        body.clear();
        assert_eq!(parsed.body(), b"abc".to_vec());
        assert_eq!(parsed.method(), Method::POST);
    }

    #[test]
    fn test_from_bytes_keeps_non_utf8_body() {
        let input: &[u8] = b"curl 'https://example.com/' --data '\x00\xff' ";
        let parsed = ParsedRequest::try_from(input).unwrap();
        assert_eq!(parsed.body(), vec![0x00, 0xff]);
        assert_eq!(parsed.as_bytes(), input);
    }

    #[test]
    fn test_header_name_invalid_for_http_still_parses() {
        let parsed = ParsedRequest::new("curl 'https://example.com/' -H 'Bad Name: 1' -H 'X: 2' ")
            .unwrap();
        assert_eq!(parsed.headers()["Bad Name"], "1");
        let replay = parsed.request();
        assert_eq!(replay.headers().len(), 1);
        assert_eq!(replay.headers()["x"], "2");
    }

    #[test]
    fn test_header_name_spanning_quotes_still_parses() {
        // `-H 'Foo'` has no colon, so the name runs on into the next argument
        let parsed = ParsedRequest::new("curl 'https://e.com/' -H 'Foo' -H 'X: 1' ").unwrap();
        assert_eq!(parsed.headers()["Foo' -H 'X"], "1");
        assert!(parsed.request().headers().is_empty());
    }

    #[test]
    fn test_case_only_duplicates_all_reach_request() {
        let parsed = ParsedRequest::new("curl 'https://e.com/' -H 'X-A: 1' -H 'x-a: 2' ").unwrap();
        assert_eq!(parsed.headers().len(), 2);
        let replay = parsed.request();
        let values: Vec<_> = replay.headers().get_all("x-a").iter().collect();
        assert_eq!(values, ["1", "2"]);
    }

    #[test]
    fn test_padded_accept_encoding_stays_on_side_channel() {
        let parsed =
            ParsedRequest::new("curl 'https://e.com/' -H ' Accept-Encoding : gzip' -H 'X: 1' ")
                .unwrap();
        assert_eq!(parsed.accept_encoding(), Some("gzip"));
        assert_eq!(parsed.headers().len(), 1);
        assert!(parsed.request().headers().get("accept-encoding").is_none());
    }

    #[test]
    fn test_failures_by_kind() {
        let cases: [(&str, ErrorKind); 3] = [
            ("", ErrorKind::InvalidInput),
            ("-H 'X: 1'", ErrorKind::MissingTarget),
            ("curl 'not a valid uri' ", ErrorKind::InvalidTarget),
        ];
        for (input, kind) in cases {
            let err = ParsedRequest::new(input).unwrap_err();
            assert_eq!(err.kind(), kind, "input {:?} gave {}", input, err);
        }
    }
}
