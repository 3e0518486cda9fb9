//! Request construction for the `/_cat` administrative namespace.

use crate::core::infrastructure::transport::RequestOptions;
use reqwest::Method;

/// Root path shared by every cat endpoint.
const CAT_ROOT: &str = "/_cat";

/// A fully-specified cat API request.
///
/// Holds the HTTP method, the namespaced path, the ordered parameter
/// list and the opaque per-request options. Parameters keep their
/// insertion order, so two identical builder sequences produce
/// identical requests. JSON output (`format=json`) is always requested.
#[derive(Debug, Clone)]
pub struct CatRequest {
    method: Method,
    path: String,
    params: Vec<(String, String)>,
    options: RequestOptions,
}

impl CatRequest {
    /// Creates a request for a cat sub-endpoint.
    pub fn new(method: Method, endpoint: &str, options: &RequestOptions) -> Self {
        Self {
            method,
            path: format!("{}/{}", CAT_ROOT, endpoint.trim_start_matches('/')),
            params: vec![("format".to_string(), "json".to_string())],
            options: options.clone(),
        }
    }

    /// Creates a GET request for a cat sub-endpoint.
    pub fn get(endpoint: &str, options: &RequestOptions) -> Self {
        Self::new(Method::GET, endpoint, options)
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Sets the explicit column projection (the `h` parameter).
    pub fn columns(self, columns: &[&str]) -> Self {
        self.param("h", columns.join(","))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The namespaced request path (e.g. `/_cat/nodes`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in the order they will be rendered.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The options attached to this request, unmodified.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Renders the parameter list as a query string, without
    /// percent-encoding. Useful for diagnostics and tests.
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
