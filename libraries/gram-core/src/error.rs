/// Core error types for the Gram Portal
use thiserror::Error;

/// Result type alias using `GramError`
pub type Result<T> = std::result::Result<T, GramError>;

/// Core error type for the Gram Portal
#[derive(Error, Debug)]
pub enum GramError {
    /// A role id that is not part of the `user_roles` set
    #[error("Unknown role id: {0}")]
    UnknownRole(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl GramError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
