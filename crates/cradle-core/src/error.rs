//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was missing or a value was out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Static configuration (e.g. a candidate pool) is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An external collaborator failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Builds a `Validation` error for a required text field that is blank.
    #[must_use]
    pub fn blank_field(field: &str) -> Self {
        Self::Validation(format!("{field} must not be empty"))
    }
}
