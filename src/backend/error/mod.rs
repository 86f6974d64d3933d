//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Error Types
//!
//! - `NotFound` - A todo id or counter name does not exist
//! - `AlreadyExists` - A counter name is taken
//! - `SharedError` - Validation failures shared with the client
//! - `HandlerError` - Other request-level failures with an explicit status
//! - `Database` - SQLite faults (500, details only in the logs)
//!
//! # Example
//!
//! ```rust,no_run
//! use todocount::backend::error::BackendError;
//! use todocount::shared::Todo;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<Todo>, BackendError> {
//!     Err(BackendError::not_found("Todo with id '1' not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
