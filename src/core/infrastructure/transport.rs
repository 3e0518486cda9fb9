//! Transport seam between the cat operations and the wire.

use crate::cat::application::request::cat_request::CatRequest;
use crate::core::domain::error::CatResult;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Request-level settings carried through to the cluster unmodified.
///
/// The cat operations never inspect the contents: whatever headers are
/// present (authorization included) are applied verbatim by the
/// transport.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, builder style.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds a header in place.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// The headers to apply to the outbound request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// A handle capable of executing a cat request against a cluster and
/// returning the raw response body.
///
/// Implementations own every connection concern (pooling, TLS, timeouts,
/// retries); the operations on top depend only on "send request, get
/// back bytes".
#[async_trait]
pub trait CatTransport: Send + Sync {
    /// Executes the request and returns the raw response body.
    ///
    /// # Errors
    /// Returns `CatError::Transport` if the request cannot be sent or
    /// the cluster answers with a non-success status.
    async fn execute(&self, request: &CatRequest) -> CatResult<Vec<u8>>;
}
