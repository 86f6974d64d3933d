//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and backend. These types are the JSON bodies exchanged over
//! the REST API, so both sides serialize them with the same field names.
//!
//! # Overview
//!
//! - **`todo`** - Todo record and its create/update bodies
//! - **`counter`** - Counter record and its create/update/amount bodies
//! - **`responses`** - Delete confirmations, service info, error bodies
//! - **`error`** - Validation errors usable on both sides
//! - **`config`** - Client configuration builder

/// Todo wire types
pub mod todo;

/// Counter wire types
pub mod counter;

/// Response bodies shared by both resource families
pub mod responses;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use todo::{CreateTodoRequest, Todo, UpdateTodoRequest};
pub use counter::{AmountRequest, Counter, CreateCounterRequest, UpdateCounterRequest};
pub use responses::{ErrorBody, MessageResponse, ServiceInfo};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
