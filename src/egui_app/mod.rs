//! egui Native Desktop App Module
//!
//! This module provides a native desktop client using egui/eframe for the
//! todo and counter REST APIs.
//!
//! # Architecture
//!
//! - **`config`** - Client configuration (server URL)
//! - **`api`** - HTTP gateway: `ApiClient`, `TodoApi`, `CounterApi`
//! - **`sync`** - Cached collections refetched after every mutation
//! - **`state`** - Application state: tabs, form inputs, synchronizers
//! - **`views`** - egui panels
//! - **`main`** - Application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Application entry point
//! ├── config.rs       - Configuration management
//! ├── api/            - API gateway
//! ├── sync/           - Collection synchronizers and notices
//! ├── state/          - Application state
//! └── views/          - Todo and counter panels
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin todocount-app
//! ```

pub mod config;
pub mod api;
pub mod sync;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, CounterApi, TodoApi};
pub use config::Config;
pub use state::AppState;
pub use sync::{CollectionSync, CounterSync, Notice, TodoSync};
