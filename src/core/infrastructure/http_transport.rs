//! reqwest-backed transport for a cluster's administrative API.

use crate::cat::application::request::cat_request::CatRequest;
use crate::core::domain::error::{CatError, CatResult, ValidationError};
use crate::core::domain::model::ClusterConnection;
use crate::core::infrastructure::transport::CatTransport;
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::Client;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Client-side rate limiting applied by the transport.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Transport-level settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportConfig {
    /// When set, outbound requests are throttled to this rate.
    pub rate_limit: Option<RateLimitConfig>,
}

/// HTTP transport over a configured cluster connection.
///
/// Applies `RequestOptions` headers verbatim and renders request
/// parameters in their declared order. Performs no retries and adds no
/// timeout layer of its own; a failure surfaces directly to the caller.
#[derive(Debug)]
pub struct HttpTransport {
    http_client: Client,
    connection: Arc<ClusterConnection>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl HttpTransport {
    /// Creates a new transport for the given connection.
    ///
    /// # Errors
    /// Returns `CatError::Transport` if the HTTP client cannot be built,
    /// or `CatError::Validation` for a zero rate-limit quota.
    pub fn new(connection: ClusterConnection, config: TransportConfig) -> CatResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .build()
            .map_err(|e| CatError::Transport(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => Some(Arc::new(DefaultDirectRateLimiter::direct(quota(rl)?))),
            None => None,
        };

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &ClusterConnection {
        &self.connection
    }
}

fn quota(config: RateLimitConfig) -> CatResult<Quota> {
    let per_second =
        NonZeroU32::new(config.requests_per_second).ok_or_else(|| ValidationError::Field {
            field: "requests_per_second".to_string(),
            message: "Rate limit must allow at least 1 request per second".to_string(),
        })?;
    let burst = NonZeroU32::new(config.burst_size).ok_or_else(|| ValidationError::Field {
        field: "burst_size".to_string(),
        message: "Burst size must be at least 1".to_string(),
    })?;
    Ok(Quota::per_second(per_second).allow_burst(burst))
}

#[async_trait]
impl CatTransport for HttpTransport {
    async fn execute(&self, request: &CatRequest) -> CatResult<Vec<u8>> {
        // `until_ready()` completes when capacity is available.
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let base = self.connection.url().as_str().trim_end_matches('/');
        let url = format!("{}{}", base, request.path());

        let response = self
            .http_client
            .request(request.method().clone(), &url)
            .query(request.params())
            .headers(request.options().headers().clone())
            .send()
            .await
            .map_err(|e| CatError::Transport(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(CatError::Transport(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatError::Transport(format!("Failed to read response body: {}", e)))?;
        Ok(body.to_vec())
    }
}
