//! Todo HTTP Handlers
//!
//! Each handler validates its input, makes exactly one service call and
//! returns the mapped body. Failures are `BackendError`s and become JSON
//! error responses.

use axum::{extract::State, Json};

use super::service;
use crate::backend::error::BackendError;
use crate::backend::extract::{ValidJson, ValidPath};
use crate::backend::server::state::TodoDb;
use crate::shared::{CreateTodoRequest, MessageResponse, Todo, UpdateTodoRequest};

/// `GET /api/todos`
pub async fn list_todos(
    State(db): State<Option<TodoDb>>,
) -> Result<Json<Vec<Todo>>, BackendError> {
    let pool = TodoDb::require(&db)?;
    Ok(Json(service::list(pool).await?))
}

/// `GET /api/todos/{id}`
pub async fn get_todo(
    State(db): State<Option<TodoDb>>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Todo>, BackendError> {
    let pool = TodoDb::require(&db)?;
    Ok(Json(service::get(pool, id).await?))
}

/// `POST /api/todos`
pub async fn create_todo(
    State(db): State<Option<TodoDb>>,
    ValidJson(request): ValidJson<CreateTodoRequest>,
) -> Result<Json<Todo>, BackendError> {
    let pool = TodoDb::require(&db)?;
    request.validate()?;
    Ok(Json(service::create(pool, &request).await?))
}

/// `PUT /api/todos/{id}`
pub async fn update_todo(
    State(db): State<Option<TodoDb>>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(request): ValidJson<UpdateTodoRequest>,
) -> Result<Json<Todo>, BackendError> {
    let pool = TodoDb::require(&db)?;
    request.validate()?;
    Ok(Json(service::update(pool, id, &request).await?))
}

/// `POST /api/todos/{id}/toggle`
pub async fn toggle_todo(
    State(db): State<Option<TodoDb>>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Todo>, BackendError> {
    let pool = TodoDb::require(&db)?;
    Ok(Json(service::toggle(pool, id).await?))
}

/// `DELETE /api/todos/{id}`
pub async fn delete_todo(
    State(db): State<Option<TodoDb>>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = TodoDb::require(&db)?;
    Ok(Json(service::delete(pool, id).await?))
}
