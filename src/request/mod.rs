//! Request building.
//!
//! Turns a [`ParsedRequest`] into [`ReplayRequest`]s. One capture can yield any
//! number of requests with different methods, targets or bodies; every one of
//! them carries a fresh copy of the captured headers (never accept-encoding).

mod context;
mod headers;
mod replay;

use bytes::Bytes;
use log::debug;
use reqwest::{Method, Url};

use crate::error_handling::{BuildError, UncurlError};
use crate::ParsedRequest;

pub use context::RequestContext;
pub(crate) use headers::header_map_from;
pub use replay::ReplayRequest;

impl ParsedRequest {
    /// Builds the request exactly as captured: original method, target, headers and body.
    ///
    /// Construction of the `ParsedRequest` already validated the target and
    /// converted the headers, so this cannot fail.
    pub fn request(&self) -> ReplayRequest {
        let body = (!self.body.is_empty()).then(|| self.body.clone());
        ReplayRequest::new(
            self.method.clone(),
            self.target_url.clone(),
            self.header_map.clone(),
            body,
            None,
            None,
        )
    }

    /// Builds a request with the captured headers but the given method, URL and body.
    ///
    /// An empty `method` means `GET`.
    ///
    /// # Errors
    ///
    /// Returns `UncurlError::RequestBuild` if `method` is not a valid HTTP
    /// method or `url` is not an absolute URL.
    pub fn new_request(
        &self,
        method: &str,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<ReplayRequest, UncurlError> {
        self.new_request_with_context(RequestContext::default(), method, url, body)
    }

    /// Like [`new_request`](Self::new_request), also attaching a cancellation
    /// token and/or timeout from `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `UncurlError::RequestBuild` if `method` is not a valid HTTP
    /// method or `url` is not an absolute URL.
    pub fn new_request_with_context(
        &self,
        ctx: RequestContext,
        method: &str,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<ReplayRequest, UncurlError> {
        let method = parse_method(method)?;
        let url = Url::parse(url).map_err(|source| BuildError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let (cancellation, timeout) = ctx.into_parts();

        debug!(
            "Building {} {} with {} captured headers",
            method,
            url,
            self.header_map.len()
        );
        Ok(ReplayRequest::new(
            method,
            url,
            self.header_map.clone(),
            body,
            cancellation,
            timeout,
        ))
    }
}

fn parse_method(method: &str) -> Result<Method, BuildError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes()).map_err(|source| BuildError::InvalidMethod {
        method: method.to_string(),
        source,
    })
}
