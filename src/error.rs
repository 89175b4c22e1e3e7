//! Error types for the library.

use thiserror::Error;

/// Errors raised by form operations.
#[derive(Error, Debug)]
pub enum FormError {
    /// No field with this name is mounted in the form.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Form values could not be serialized.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
