use thiserror::Error;

/// The main error type for cat API operations.
///
/// This enum represents all possible errors that can occur while talking
/// to a cluster's administrative API: transport failures, response decode
/// failures, and connection-parameter validation failures.
#[derive(Error, Debug)]
pub enum CatError {
    /// Represents errors raised before a usable response body exists:
    /// the request could not be sent, or the cluster answered with a
    /// non-success status.
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the exchange
    #[error("Transport error: {0}")]
    Transport(String),

    /// Represents a response body that is not valid JSON or does not
    /// match the shape requested for the operation. No partial result is
    /// ever produced alongside this error.
    ///
    /// # Fields
    /// * `0` - The underlying deserialization error
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a CatError
pub type CatResult<T> = Result<T, CatError>;
