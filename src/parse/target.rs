//! Target URL validation.

use url::Url;

use crate::error_handling::TargetError;

/// Validates a captured target as an absolute request URL.
///
/// The target must be UTF-8, parse as an absolute URL, and name a host.
/// Relative references (`/path`) and host-less URIs (`mailto:`, `data:`) are rejected.
pub(crate) fn validate_target(raw: &[u8]) -> Result<Url, TargetError> {
    let target = std::str::from_utf8(raw).map_err(|_| TargetError::NotUtf8)?;
    let url = Url::parse(target)?;
    if !url.has_host() {
        return Err(TargetError::MissingHost);
    }
    Ok(url)
}
