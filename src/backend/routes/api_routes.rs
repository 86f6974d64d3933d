/**
 * API Routes
 *
 * Both resource families are always mounted. A family whose store is
 * disabled answers 503 from its handlers.
 *
 * # Routes
 *
 * ## Todos
 * - `GET /api/todos`, `POST /api/todos`
 * - `GET|PUT|DELETE /api/todos/{id}`
 * - `POST /api/todos/{id}/toggle`
 *
 * ## Counters
 * - `GET /api/counters`, `POST /api/counters`
 * - `GET|PUT|DELETE /api/counters/{name}`
 * - `POST /api/counters/{name}/increment`
 * - `POST /api/counters/{name}/decrement`
 * - `POST /api/counters/{name}/reset`
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::counters::{
    create_counter, decrement_counter, delete_counter, get_counter, increment_counter,
    list_counters, reset_counter, update_counter,
};
use crate::backend::server::state::AppState;
use crate::backend::todos::{
    create_todo, delete_todo, get_todo, list_todos, toggle_todo, update_todo,
};

/// Add the todo routes to `router`
pub fn configure_todo_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/{id}/toggle", post(toggle_todo))
}

/// Add the counter routes to `router`
pub fn configure_counter_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/counters", get(list_counters).post(create_counter))
        .route(
            "/api/counters/{name}",
            get(get_counter).put(update_counter).delete(delete_counter),
        )
        .route("/api/counters/{name}/increment", post(increment_counter))
        .route("/api/counters/{name}/decrement", post(decrement_counter))
        .route("/api/counters/{name}/reset", post(reset_counter))
}
