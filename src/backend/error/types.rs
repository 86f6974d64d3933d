/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Domain Errors
 *
 * Recoverable business-rule violations raised by the todo and counter services:
 * - `NotFound` - the addressed record does not exist (404)
 * - `AlreadyExists` - a counter name is already taken (400)
 *
 * ## Validation Errors
 *
 * Malformed or incomplete request bodies, rejected before the service runs.
 * These wrap `SharedError::ValidationError` so the field name travels with them.
 *
 * ## Infrastructure Errors
 *
 * Database faults and handler-level failures such as a disabled store.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant maps to one HTTP status code through [`BackendError::status_code`].
///
/// # Usage
///
/// ```rust
/// use todocount::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Todo with id '7' not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., store disabled, unreadable body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The addressed record does not exist
    #[error("{message}")]
    NotFound {
        /// Message naming the missing key
        message: String,
    },

    /// A record with the same unique key already exists
    #[error("{message}")]
    AlreadyExists {
        /// Message naming the colliding key
        message: String,
    },

    /// Request validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    ///
    /// The underlying message is logged but never sent to the caller.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an already-exists error
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    /// Create a validation error for a request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `AlreadyExists` - 400 Bad Request
    /// - `SharedError` - 400 Bad Request
    /// - `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message sent to the caller
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::AlreadyExists { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::Database(_) => "Internal server error".to_string(),
        }
    }
}
