//! todocount - Main Library
//!
//! Two small full-stack CRUD apps sharing one crate: a todo list and a set
//! of named counters. Each pairs a REST API over a single-table SQLite store
//! with a native desktop client.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Todo and counter wire types, request bodies, validation
//!   - Response and error bodies
//!   - Client configuration builder
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with the `/api/todos` and `/api/counters` routes
//!   - One SQLite file per app, opened through sqlx
//!   - Configuration from defaults, a TOML file and environment variables
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - reqwest API gateway
//!   - Collection synchronizers that refetch after every mutation
//!   - Todo and counter panels
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use todocount::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::load()?).await;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```rust,no_run
//! use todocount::egui_app::api::{ApiClient, CounterApi};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = CounterApi::new(ApiClient::new("http://127.0.0.1:8000")?);
//! let hits = api.increment("hits", None).await?;
//! println!("{} = {}", hits.name, hits.value);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation shared by both sides
//! - `backend::error::BackendError` rendered as `{"detail", "status"}` JSON
//! - `egui_app::api::ApiError` carrying the server's message to the client

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
