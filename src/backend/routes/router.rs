/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router and wraps it in the
 * CORS and tracing layers.
 *
 * # Route Order
 *
 * 1. Service info (`GET /`)
 * 2. Todo routes
 * 3. Counter routes
 * 4. Fallback handler (JSON 404)
 */

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_counter_routes, configure_todo_routes};
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::shared::ServiceInfo;

/// Create the Axum router with all routes configured
///
/// Unknown paths get the standard JSON error body with 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config.cors_origins);

    let router = Router::new().route("/", get(service_info));
    let router = configure_todo_routes(router);
    let router = configure_counter_routes(router);

    router
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// `GET /`
async fn service_info(State(config): State<Arc<ServerConfig>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: config.title().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}

/// CORS for the configured origins, with credentials and mirrored methods/headers
///
/// A `*` entry allows every origin; browsers refuse credentials with a
/// wildcard origin, so they are not allowed in that case. Origins that are
/// not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|origin| origin.trim() == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
