/**
 * Server Initialization
 *
 * This module opens the record stores named by the configuration and
 * assembles the router around them.
 *
 * # Initialization Process
 *
 * 1. Open the todo store file (if the todo app is enabled)
 * 2. Open the counter store file (if the counter app is enabled)
 * 3. Create the application state and router
 *
 * # Error Handling
 *
 * A store that fails to open is logged and left disabled; the server
 * still starts and that app's routes answer 503.
 */

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{AppKind, ServerConfig};
use crate::backend::server::state::{AppState, CounterDb, TodoDb};
use crate::backend::store::open_pool;
use crate::backend::{counters, todos};

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!(environment = %config.environment, "Initializing todocount backend server");

    let todo_db = load_store(&config, AppKind::Todo, todos::db::SCHEMA)
        .await
        .map(TodoDb);
    let counter_db = load_store(&config, AppKind::Counter, counters::db::SCHEMA)
        .await
        .map(CounterDb);

    let app_state = AppState {
        config: Arc::new(config),
        todo_db,
        counter_db,
    };

    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}

/// Open one app's store
///
/// # Returns
///
/// - `Some(SqlitePool)` if the app is enabled and its file opened
/// - `None` if the app is disabled or opening failed
async fn load_store(config: &ServerConfig, app: AppKind, schema: &str) -> Option<SqlitePool> {
    if !config.serves(app) {
        tracing::info!(?app, "App disabled by configuration");
        return None;
    }

    let path = config.db_path(app);
    match open_pool(path, schema).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::error!(?app, path = %path.display(), "Failed to open store: {:?}", e);
            tracing::warn!(?app, "Routes for this app will answer 503");
            None
        }
    }
}
