//! Shared Error Types
//!
//! This module defines error types that are shared between the client and backend.
//! Validation of request bodies happens with these types on both sides, so the
//! client can refuse an obviously bad form before a round trip and the backend
//! reports the same field name when it refuses one.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//!
//! # Usage
//!
//! ```rust
//! use todocount::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "must not be empty");
//! assert_eq!(error.field(), Some("title"));
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }
}

/// Fail with a validation error when `value` is empty after trimming
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}
