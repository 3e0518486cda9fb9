mod cat;
mod core;


pub use crate::cat::application::request::cat_request::CatRequest;
pub use crate::cat::application::service::cat_service::CatService;
pub use crate::core::domain::error::{CatError, CatResult, ValidationError};
pub use crate::core::domain::model::{ClusterConnection, NodeStatus, StatusFilter};
pub use crate::core::domain::value_object::{ClusterHost, ClusterPort, ClusterUrl};
pub use crate::core::infrastructure::http_transport::{
    HttpTransport, RateLimitConfig, TransportConfig,
};
pub use crate::core::infrastructure::transport::{CatTransport, RequestOptions};

use reqwest::header::{HeaderName, HeaderValue};
use std::collections::HashSet;

/// Default HTTP port of an Elasticsearch-compatible cluster.
const DEFAULT_PORT: u16 = 9200;

/// A client for the administrative status ("cat") API of an
/// Elasticsearch-compatible search cluster.
///
/// This client provides a safe, typed interface for read-only
/// diagnostic queries:
/// - Node inventory with a fixed column projection
/// - Index listings filtered client-side by status
/// - Single-index state lookup
///
/// It holds no state between calls; every operation is one request,
/// one response, one typed result.
///
/// # Examples
///
/// ```no_run
/// use elastic_cat::{CatClient, CatResult, StatusFilter};
///
/// #[tokio::main]
/// async fn main() -> CatResult<()> {
///     let client = CatClient::builder()
///         .host("search.example.com")
///         .port(9200)
///         .secure(true)
///         .build()?;
///
///     let nodes = client.nodes().await?;
///     println!("cluster has {} nodes", nodes.len());
///
///     let open = client.indices(["logs-*"], &StatusFilter::of(["open"])).await?;
///     println!("{} open log indices", open.len());
///
///     if let Some(state) = client.index_state("logs-000001").await? {
///         println!("logs-000001 is {}", state);
///     }
///     Ok(())
/// }
/// ```
pub struct CatClient {
    transport: HttpTransport,
    options: RequestOptions,
    service: CatService,
}

/// Builder for CatClient configuration
#[derive(Debug, Default)]
pub struct CatClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    secure: bool,
    accept_invalid_certs: bool,
    options: RequestOptions,
    transport_config: TransportConfig,
}

impl CatClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Adds a header sent with every request (e.g. `authorization`).
    ///
    /// Headers are passed through to the cluster unmodified; the client
    /// never inspects them.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.options.set_header(name, value);
        self
    }

    /// Replaces the default request options wholesale.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables client-side rate limiting on the transport.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.transport_config.rate_limit = Some(config);
        self
    }

    /// Validates the connection parameters and assembles the client.
    ///
    /// # Errors
    ///
    /// Returns `CatError::Validation` if the host is missing or any
    /// parameter fails domain validation, and `CatError::Transport` if
    /// the HTTP client cannot be built.
    pub fn build(self) -> CatResult<CatClient> {
        let host = ClusterHost::new(self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?)?;
        let port = ClusterPort::new(self.port.unwrap_or(DEFAULT_PORT))?;
        let url = ClusterUrl::from_parts(&host, port, self.secure)?;

        let connection =
            ClusterConnection::new(host, port, self.secure, self.accept_invalid_certs, url);
        let transport = HttpTransport::new(connection, self.transport_config)?;

        Ok(CatClient {
            transport,
            options: self.options,
            service: CatService::new(),
        })
    }
}

impl CatClient {
    /// Creates a new builder for CatClient configuration
    pub fn builder() -> CatClientBuilder {
        CatClientBuilder::default()
    }

    /// Lists every node in the cluster.
    ///
    /// See [`CatService::nodes`] for the full contract.
    pub async fn nodes(&self) -> CatResult<Vec<NodeStatus>> {
        self.service.nodes(&self.transport, &self.options).await
    }

    /// Returns the names of all indices matching the given patterns
    /// whose status passes the filter.
    ///
    /// See [`CatService::indices`] for the full contract; in particular,
    /// an empty filter accepts every status.
    pub async fn indices<I, S>(
        &self,
        patterns: I,
        status_filter: &StatusFilter,
    ) -> CatResult<HashSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.service
            .indices(&self.transport, patterns, status_filter, &self.options)
            .await
    }

    /// Looks up the status label of a single index by exact name.
    ///
    /// Returns `Ok(None)` when the index is absent; see
    /// [`CatService::index_state`].
    pub async fn index_state(&self, index_name: &str) -> CatResult<Option<String>> {
        self.service
            .index_state(&self.transport, &self.options, index_name)
            .await
    }

    /// Returns the transport this client issues requests through.
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Returns the default request options attached to every call.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}
