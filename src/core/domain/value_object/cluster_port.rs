use crate::core::domain::error::{CatResult, ValidationError};

/// A validated cluster HTTP port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterPort(u16);

impl ClusterPort {
    /// Creates a new port with validation.
    ///
    /// # Errors
    /// Returns `CatError::Validation` if the port is 0.
    pub fn new(port: u16) -> CatResult<Self> {
        validate_port(port)?;
        Ok(Self(port))
    }

    /// Creates a new port without validation.
    pub(crate) fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

/// Validates a port number.
fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::Field {
            field: "port".to_string(),
            message: "Port cannot be 0".to_string(),
        });
    }
    // All ports 1-65535 are valid.
    Ok(())
}
