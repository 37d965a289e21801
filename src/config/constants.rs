//! Extraction constants.
//!
//! The patterns below match the command lines produced by the "Copy as cURL"
//! entry of Chrome/Chromium developer tools. They are applied to the raw input
//! bytes. Quoted targets and bodies are matched byte-wise (`(?-u:...)`), so a
//! token that is not valid UTF-8 is still captured verbatim.

/// Matches the leading `curl '<url>' ` of the command.
///
/// Capture group 1 is the candidate target URL. The trailing space is required.
pub const CURL_TARGET_PATTERN: &str = r"^\s*curl\s+'((?-u:[^'])+?)' ";

/// Matches every `-H '<name>: <value>'` argument.
///
/// Capture group 1 is the header name (everything up to the first colon),
/// group 2 the header value (everything after the separating whitespace up to
/// the closing quote).
pub const CURL_HEADER_PATTERN: &str = r"-H\s+'([^:]+?):\s+(.+?)'";

/// Matches the ` --data '<body>' ` argument.
///
/// Capture group 1 is the body, taken verbatim. Other body flags
/// (`--data-raw`, `--data-binary`, ...) are not recognized.
pub const CURL_DATA_PATTERN: &str = r" --data '((?-u:[^'])+?)' ";

/// Matches a header name that must be diverted to the accept-encoding side channel.
pub const CURL_ACCEPT_ENCODING_PATTERN: &str = r"(?i)^\s*accept-encoding\s*$";
