use crate::core::domain::{
    error::{CatResult, ValidationError},
    value_object::{cluster_host::ClusterHost, cluster_port::ClusterPort},
};
use std::net::Ipv6Addr;

const MAX_URL_LENGTH: usize = 2083;
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A validated base URL for a cluster's HTTP endpoint.
///
/// URLs must parse per RFC 3986 and use the `http` or `https` scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterUrl(String);

impl ClusterUrl {
    /// Creates a new URL with validation.
    ///
    /// # Errors
    /// Returns `CatError::Validation` if the value does not parse as a
    /// URL or uses a scheme other than http/https.
    pub fn new(url: String) -> CatResult<Self> {
        validate_url(&url)?;
        Ok(Self(url))
    }

    /// Builds the base URL from validated connection parts.
    pub fn from_parts(host: &ClusterHost, port: ClusterPort, secure: bool) -> CatResult<Self> {
        let scheme = if secure { "https" } else { "http" };
        // IPv6 literals need brackets in the authority component.
        let authority = if host.as_str().parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", host.as_str())
        } else {
            host.as_str().to_string()
        };
        Self::new(format!("{}://{}:{}/", scheme, authority, port.get()))
    }

    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a base URL.
fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }

    Ok(())
}
