/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container, holding:
 * - The configuration resolved at startup
 * - The todo store pool (if the todo app is enabled)
 * - The counter store pool (if the counter app is enabled)
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract only the store
 * they work on, e.g. `State(db): State<Option<TodoDb>>`. A disabled store
 * is `None` and its routes answer 503.
 */

use axum::extract::FromRef;
use axum::http::StatusCode;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;

/// Pool for the todo store file
#[derive(Clone, Debug)]
pub struct TodoDb(pub SqlitePool);

/// Pool for the counter store file
#[derive(Clone, Debug)]
pub struct CounterDb(pub SqlitePool);

impl TodoDb {
    /// Borrow the pool of an enabled store, or fail with 503
    pub fn require(db: &Option<TodoDb>) -> Result<&SqlitePool, BackendError> {
        db.as_ref()
            .map(|db| &db.0)
            .ok_or_else(|| BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Todo store is not enabled"))
    }
}

impl CounterDb {
    /// Borrow the pool of an enabled store, or fail with 503
    pub fn require(db: &Option<CounterDb>) -> Result<&SqlitePool, BackendError> {
        db.as_ref()
            .map(|db| &db.0)
            .ok_or_else(|| BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "Counter store is not enabled"))
    }
}

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Configuration resolved once at startup
    pub config: Arc<ServerConfig>,

    /// Todo store, `None` when the todo app is disabled
    pub todo_db: Option<TodoDb>,

    /// Counter store, `None` when the counter app is disabled
    pub counter_db: Option<CounterDb>,
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for Option<TodoDb> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.todo_db.clone()
    }
}

impl FromRef<AppState> for Option<CounterDb> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.counter_db.clone()
    }
}
