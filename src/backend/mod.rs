//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the todo and counter REST APIs, each backed by its own SQLite file.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`todos`** - Todo store, service, mapper and handlers
//! - **`counters`** - Counter store, service, mapper and handlers
//! - **`store`** - SQLite pool opening and store errors
//! - **`extract`** - JSON body extractors that reject with `BackendError`
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── todos/          - Todo resource
//! ├── counters/       - Counter resource
//! ├── store/          - Shared SQLite plumbing
//! ├── extract.rs      - Request body extractors
//! └── error/          - Error types
//! ```
//!
//! # Layering
//!
//! Each request flows handler → service → store. Handlers validate input and
//! make exactly one service call; services translate store failures into
//! `NotFound`/`AlreadyExists` errors naming the key; stores run one SQL
//! statement per call.
//!
//! # Concurrency
//!
//! Requests are independent. The SQLite pools are shared through axum state
//! without further locking, and read-modify-write operations (toggle,
//! increment) are not atomic: the last write wins.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// SQLite store plumbing
pub mod store;

/// Request body extractors
pub mod extract;

/// Todo resource
pub mod todos;

/// Counter resource
pub mod counters;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
