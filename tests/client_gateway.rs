//! API gateway tests against a mock server
//!
//! Check that every failure comes back as one `ApiError` carrying the
//! server's message, and that bodies go out as the backend expects.

#[macro_use]
mod common;

use assert_matches::assert_matches;
use serde_json::json;
use todocount::egui_app::api::{ApiClient, ApiError, CounterApi, TodoApi};
use todocount::shared::{CreateTodoRequest, Todo, UpdateTodoRequest};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn todo_api(server: &MockServer) -> TodoApi {
    TodoApi::new(ApiClient::new(&server.uri()).unwrap())
}

fn counter_api(server: &MockServer) -> CounterApi {
    CounterApi::new(ApiClient::new(&server.uri()).unwrap())
}

#[tokio::test]
async fn test_detail_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos/9"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "Todo with id '9' not found", "status": 404})),
        )
        .mount(&server)
        .await;

    let err = todo_api(&server).get(9).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Todo with id '9' not found");
}

#[tokio::test]
async fn test_error_key_is_used_when_no_detail() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/counters/hits"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "locked"})))
        .mount(&server)
        .await;

    let err = counter_api(&server).delete("hits").await.unwrap_err();
    assert_matches!(err, ApiError::Server { status: 409, ref message } if message == "locked");
}

#[tokio::test]
async fn test_unreadable_error_body_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let err = todo_api(&server).list().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "GET /api/todos failed");
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert_err!(todo_api(&server).list().await, ApiError::Decode(_));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind and drop a listener to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = TodoApi::new(ApiClient::new(&format!("http://{}", addr)).unwrap());
    assert_err!(api.list().await, ApiError::Network(_));
}

#[tokio::test]
async fn test_request_bodies() {
    let server = MockServer::start().await;
    let todo = json!({"id": 1, "title": "Buy milk", "description": "", "completed": false});
    let counter = json!({"id": 1, "name": "hits", "value": 3});

    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(json!({"title": "Buy milk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/todos/1"))
        .and(body_json(json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/counters/hits/increment"))
        .and(body_json(json!({"amount": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(counter.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/counters/hits/decrement"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(counter.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let created: Todo = assert_ok!(
        todo_api(&server)
            .create(&CreateTodoRequest::new("Buy milk", None))
            .await
    );
    assert_eq!(created.title, "Buy milk");

    let update = UpdateTodoRequest {
        completed: Some(true),
        ..Default::default()
    };
    assert_ok!(todo_api(&server).update(1, &update).await);

    let counters = counter_api(&server);
    assert_eq!(assert_ok!(counters.increment("hits", Some(3)).await).value, 3);
    assert_ok!(counters.decrement("hits", None).await);
}

#[tokio::test]
async fn test_custom_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = TodoApi::with_base(ApiClient::new(&server.uri()).unwrap(), "/v2/tasks/");
    assert!(assert_ok!(api.list().await).is_empty());
}
