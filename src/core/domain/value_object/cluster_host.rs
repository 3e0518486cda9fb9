use crate::core::domain::error::{CatResult, ValidationError};
use std::net::IpAddr;

const MAX_HOSTNAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// A validated cluster host address.
///
/// Accepts RFC 1035 hostnames and IP address literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterHost(String);

impl ClusterHost {
    /// Creates a new host with validation.
    ///
    /// # Errors
    /// Returns `CatError::Validation` if the value is not a valid
    /// hostname or IP literal.
    pub fn new(host: String) -> CatResult<Self> {
        validate_host(&host)?;
        Ok(Self(host))
    }

    /// Creates a new host without validation.
    pub(crate) fn new_unchecked(host: String) -> Self {
        Self(host)
    }

    /// Returns the host as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a host address.
fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }

    if host.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "Host length exceeds maximum of {} characters",
            MAX_HOSTNAME_LENGTH
        )));
    }

    // IP literals (v4 and v6) bypass the hostname label rules.
    if host.parse::<IpAddr>().is_ok() {
        return Ok(());
    }

    for label in host.split('.') {
        validate_label(label)?;
    }

    Ok(())
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::Format(format!(
            "Label must be between 1 and {} characters",
            MAX_LABEL_LENGTH
        )));
    }

    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::Format(
            "Label can only contain alphanumeric characters and hyphens".to_string(),
        ));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::Format(
            "Label cannot start or end with hyphen".to_string(),
        ));
    }

    Ok(())
}
