//! Replayable request object.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Body, Method, Request, Url};
use tokio_util::sync::CancellationToken;

/// A `reqwest::Request` built from a captured curl string.
///
/// The body is kept as [`Bytes`] next to the request, so it can be produced
/// again with [`get_body`](Self::get_body) after the request's own body has
/// been consumed by a send, a retry or a redirect. Cloning is always
/// possible and yields a fully independent request.
#[derive(Debug)]
pub struct ReplayRequest {
    request: Request,
    body: Option<Bytes>,
    cancellation: Option<CancellationToken>,
}

impl ReplayRequest {
    pub(crate) fn new(
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Bytes>,
        cancellation: Option<CancellationToken>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut request = Request::new(method, url);
        *request.headers_mut() = headers;
        *request.body_mut() = body.clone().map(Body::from);
        *request.timeout_mut() = timeout;
        Self {
            request,
            body,
            cancellation,
        }
    }

    /// HTTP method of the request.
    pub fn method(&self) -> &Method {
        self.request.method()
    }

    /// Target URL of the request.
    pub fn url(&self) -> &Url {
        self.request.url()
    }

    /// Headers of the request.
    pub fn headers(&self) -> &HeaderMap {
        self.request.headers()
    }

    /// Mutable headers, e.g. to opt back into an explicit `Accept-Encoding`.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.request.headers_mut()
    }

    /// Body bytes the request was built with, if any.
    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Per-request timeout, if one was set through a `RequestContext`.
    pub fn timeout(&self) -> Option<&Duration> {
        self.request.timeout()
    }

    /// Cancellation token carried from the `RequestContext`, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Produces a fresh body identical to the original one.
    ///
    /// Returns `None` when the request has no body.
    pub fn get_body(&self) -> Option<Body> {
        self.body.clone().map(Body::from)
    }

    /// Borrows the underlying `reqwest::Request`.
    pub fn as_request(&self) -> &Request {
        &self.request
    }

    /// Consumes the wrapper, returning the request ready for `Client::execute`.
    pub fn into_request(self) -> Request {
        self.request
    }

    /// Consumes the wrapper, returning the request and its cancellation token.
    pub fn into_parts(self) -> (Request, Option<CancellationToken>) {
        (self.request, self.cancellation)
    }
}

impl Clone for ReplayRequest {
    fn clone(&self) -> Self {
        let mut clone = Self::new(
            self.method().clone(),
            self.url().clone(),
            self.headers().clone(),
            self.body.clone(),
            self.cancellation.clone(),
            self.timeout().copied(),
        );
        *clone.request.version_mut() = self.request.version();
        clone
    }
}

impl From<ReplayRequest> for Request {
    fn from(replay: ReplayRequest) -> Self {
        replay.into_request()
    }
}
