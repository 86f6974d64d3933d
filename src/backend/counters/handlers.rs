//! Counter HTTP Handlers

use axum::{extract::State, Json};

use super::service;
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonOrDefault, ValidJson, ValidPath};
use crate::backend::server::state::CounterDb;
use crate::shared::{
    AmountRequest, Counter, CreateCounterRequest, MessageResponse, UpdateCounterRequest,
};

/// `GET /api/counters`
pub async fn list_counters(
    State(db): State<Option<CounterDb>>,
) -> Result<Json<Vec<Counter>>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::list(pool).await?))
}

/// `GET /api/counters/{name}`
pub async fn get_counter(
    State(db): State<Option<CounterDb>>,
    ValidPath(name): ValidPath<String>,
) -> Result<Json<Counter>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::get(pool, &name).await?))
}

/// `POST /api/counters`
pub async fn create_counter(
    State(db): State<Option<CounterDb>>,
    ValidJson(request): ValidJson<CreateCounterRequest>,
) -> Result<Json<Counter>, BackendError> {
    let pool = CounterDb::require(&db)?;
    request.validate()?;
    Ok(Json(service::create(pool, &request).await?))
}

/// `PUT /api/counters/{name}`
pub async fn update_counter(
    State(db): State<Option<CounterDb>>,
    ValidPath(name): ValidPath<String>,
    ValidJson(request): ValidJson<UpdateCounterRequest>,
) -> Result<Json<Counter>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::update(pool, &name, request.value).await?))
}

/// `POST /api/counters/{name}/increment`, body optional
pub async fn increment_counter(
    State(db): State<Option<CounterDb>>,
    ValidPath(name): ValidPath<String>,
    JsonOrDefault(request): JsonOrDefault<AmountRequest>,
) -> Result<Json<Counter>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::increment(pool, &name, request.amount()).await?))
}

/// `POST /api/counters/{name}/decrement`, body optional
pub async fn decrement_counter(
    State(db): State<Option<CounterDb>>,
    ValidPath(name): ValidPath<String>,
    JsonOrDefault(request): JsonOrDefault<AmountRequest>,
) -> Result<Json<Counter>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::decrement(pool, &name, request.amount()).await?))
}

/// `POST /api/counters/{name}/reset`
pub async fn reset_counter(
    State(db): State<Option<CounterDb>>,
    ValidPath(name): ValidPath<String>,
) -> Result<Json<Counter>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::reset(pool, &name).await?))
}

/// `DELETE /api/counters/{name}`
pub async fn delete_counter(
    State(db): State<Option<CounterDb>>,
    ValidPath(name): ValidPath<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = CounterDb::require(&db)?;
    Ok(Json(service::delete(pool, &name).await?))
}
