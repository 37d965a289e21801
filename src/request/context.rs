//! Per-request cancellation and timeout context.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Cancellation and timeout settings handed to a built request.
///
/// Nothing in this crate waits on the token; it travels with the
/// [`ReplayRequest`](crate::ReplayRequest) so the code executing the request
/// can abandon it. The timeout is applied to the underlying `reqwest::Request`
/// and enforced by the client.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancellation: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl RequestContext {
    /// Creates an empty context: no cancellation, no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Sets a total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The attached cancellation token, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// The request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn into_parts(self) -> (Option<CancellationToken>, Option<Duration>) {
        (self.cancellation, self.timeout)
    }
}

impl From<CancellationToken> for RequestContext {
    fn from(token: CancellationToken) -> Self {
        Self::new().with_cancellation(token)
    }
}
