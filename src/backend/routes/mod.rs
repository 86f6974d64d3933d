//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - The `/api/todos` and `/api/counters` resource families
//!
//! # Route Organization
//!
//! 1. **Service info** - `GET /`
//! 2. **API Routes** - todos and counters
//! 3. **Fallback Handler** - JSON 404 for anything else
//!
//! # Example
//!
//! ```rust,no_run
//! use todocount::backend::server::{create_app, config::ServerConfig};
//!
//! # async fn example() {
//! let config = ServerConfig::load().unwrap();
//! let router = create_app(config).await;
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
