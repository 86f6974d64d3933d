//! Todo API integration tests
//!
//! Drive the `/api/todos` routes through the full router with a temp-dir store.

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::TestStores;
use pretty_assertions::assert_eq;
use serde_json::json;
use todocount::backend::server::config::AppKind;
use todocount::shared::{MessageResponse, ServiceInfo, Todo};

#[tokio::test]
async fn test_todo_scenario() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let response = server.post("/api/todos").json(&json!({"title": "Buy milk"})).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let created: Todo = response.json();
    assert_eq!(
        created,
        Todo {
            id: 1,
            title: "Buy milk".to_string(),
            description: String::new(),
            completed: false,
        }
    );

    let toggled: Todo = server.post("/api/todos/1/toggle").await.json();
    assert!(toggled.completed);

    let response = server.delete("/api/todos/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let deleted: MessageResponse = response.json();
    assert_contains!(deleted.message, "deleted");

    let response = server.get("/api/todos/1").await;
    assert_error_body!(response, StatusCode::NOT_FOUND, "'1'");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let created: Todo = server
        .post("/api/todos")
        .json(&json!({"title": "Write report", "description": "quarterly"}))
        .await
        .json();
    let fetched: Todo = server.get(&format!("/api/todos/{}", created.id)).await.json();
    assert_eq!(fetched, created);

    let all: Vec<Todo> = server.get("/api/todos").await.json();
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn test_partial_update_preserves_omitted_fields() {
    let stores = TestStores::new();
    let server = stores.server().await;

    server
        .post("/api/todos")
        .json(&json!({"title": "Walk dog", "description": "park"}))
        .await;
    server.post("/api/todos/1/toggle").await;

    let updated: Todo = server
        .put("/api/todos/1")
        .json(&json!({"description": "beach"}))
        .await
        .json();
    assert_eq!(updated.title, "Walk dog");
    assert_eq!(updated.description, "beach");
    assert!(updated.completed);

    let updated: Todo = server
        .put("/api/todos/1")
        .json(&json!({"completed": false}))
        .await
        .json();
    assert_eq!(updated.description, "beach");
    assert!(!updated.completed);
}

#[tokio::test]
async fn test_toggle_twice_restores() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let created: Todo = server.post("/api/todos").json(&json!({"title": "x"})).await.json();
    server.post("/api/todos/1/toggle").await;
    let back: Todo = server.post("/api/todos/1/toggle").await.json();
    assert_eq!(back, created);
}

#[tokio::test]
async fn test_validation_is_400() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let response = server.post("/api/todos").json(&json!({"description": "no title"})).await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "title");

    let response = server.post("/api/todos").json(&json!({"title": "   "})).await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "title");

    let response = server.post("/api/todos").await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "body");

    server.post("/api/todos").json(&json!({"title": "kept"})).await;
    let response = server.put("/api/todos/1").json(&json!({"title": ""})).await;
    assert_error_body!(response, StatusCode::BAD_REQUEST, "title");

    let all: Vec<Todo> = server.get("/api/todos").await.json();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "kept");
}

#[tokio::test]
async fn test_missing_id_is_404_on_every_route() {
    let stores = TestStores::new();
    let server = stores.server().await;

    assert_error_body!(server.get("/api/todos/42").await, StatusCode::NOT_FOUND, "42");
    assert_error_body!(
        server.put("/api/todos/42").json(&json!({"title": "x"})).await,
        StatusCode::NOT_FOUND,
        "42"
    );
    assert_error_body!(server.post("/api/todos/42/toggle").await, StatusCode::NOT_FOUND, "42");
    assert_error_body!(server.delete("/api/todos/42").await, StatusCode::NOT_FOUND, "42");
}

#[tokio::test]
async fn test_non_numeric_id_is_json_400() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let response = server.get("/api/todos/abc").await;
    assert_eq!(
        response.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_error_body!(response, StatusCode::BAD_REQUEST, "'id'");
    assert_error_body!(server.post("/api/todos/abc/toggle").await, StatusCode::BAD_REQUEST, "abc");
    assert_error_body!(server.delete("/api/todos/1.5").await, StatusCode::BAD_REQUEST, "1.5");
}

#[tokio::test]
async fn test_title_is_stored_as_sent() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let created: Todo = server.post("/api/todos").json(&json!({"title": "  padded  "})).await.json();
    assert_eq!(created.title, "  padded  ");

    let updated: Todo = server
        .put(&format!("/api/todos/{}", created.id))
        .json(&json!({"title": "  padded  "}))
        .await
        .json();
    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let stores = TestStores::new();
    let server = stores.server().await;

    server.post("/api/todos").json(&json!({"title": "a"})).await;
    server.delete("/api/todos/1").await;
    let second: Todo = server.post("/api/todos").json(&json!({"title": "b"})).await.json();
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_service_info_and_unknown_route() {
    let stores = TestStores::new();
    let server = stores.server().await;

    let info: ServiceInfo = server.get("/").await.json();
    assert_eq!(info.message, "Todo & Counter API - Test");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));

    assert_error_body!(server.get("/api/notes").await, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn test_disabled_store_is_503() {
    let stores = TestStores::with_apps(&[AppKind::Counter]);
    let server = stores.server().await;

    assert_error_body!(
        server.get("/api/todos").await,
        StatusCode::SERVICE_UNAVAILABLE,
        "not enabled"
    );
    assert_eq!(server.get("/api/counters").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_rows_survive_restart() {
    let stores = TestStores::new();
    {
        let server = stores.server().await;
        server.post("/api/todos").json(&json!({"title": "persisted"})).await;
    }

    let server = stores.server().await;
    let all: Vec<Todo> = server.get("/api/todos").await.json();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "persisted");
}
