//! Error types for form validation.

use thiserror::Error;

use crate::fields::FieldId;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A rule violation found on a submit attempt.
///
/// The `Display` text of each variant is the exact user-facing message the
/// blocking alert shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Password is shorter than the minimum length
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort {
        /// Character count of the rejected password
        len: usize,
    },

    /// One or more required citizen fields are empty
    #[error("Please fill in all required citizen information fields.")]
    MissingCitizenFields {
        /// Which of the required fields were empty
        missing: Vec<FieldId>,
    },
}
