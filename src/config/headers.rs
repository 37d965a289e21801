//! HTTP header name constants.

/// Accept-Encoding header name, as written by Chromium.
///
/// This header is never replayed from a capture. Setting it explicitly on a
/// `reqwest` request turns off the client's transparent response decompression,
/// so its value is kept on a side channel (`ParsedRequest::accept_encoding`)
/// for callers that want to negotiate encodings themselves.
pub const HEADER_ACCEPT_ENCODING: &str = "accept-encoding";
