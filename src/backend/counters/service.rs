//! Counter service
//!
//! One function per use case. Store failures come back as `BackendError`
//! domain errors that name the counter.

use sqlx::SqlitePool;

use super::model::CounterRow;
use super::{db, mapper};
use crate::backend::error::BackendError;
use crate::backend::store::StoreError;
use crate::shared::{Counter, CreateCounterRequest, MessageResponse};

fn store_error(name: &str) -> impl FnOnce(StoreError) -> BackendError + '_ {
    move |err| match err {
        StoreError::NotFound => BackendError::not_found(format!("Counter '{}' not found", name)),
        StoreError::AlreadyExists => {
            BackendError::already_exists(format!("Counter '{}' already exists", name))
        }
        StoreError::Database(err) => BackendError::Database(err),
    }
}

/// Load, change and save one counter
async fn modify<F>(pool: &SqlitePool, name: &str, change: F) -> Result<Counter, BackendError>
where
    F: FnOnce(&mut CounterRow) -> Result<(), BackendError>,
{
    let mut row = db::find_by_name(pool, name).await.map_err(store_error(name))?;
    change(&mut row)?;
    db::save(pool, &row).await.map_err(store_error(name))?;
    Ok(row.into())
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Counter>, BackendError> {
    let rows = db::find_all(pool).await?;
    Ok(rows.into_iter().map(Counter::from).collect())
}

pub async fn get(pool: &SqlitePool, name: &str) -> Result<Counter, BackendError> {
    let row = db::find_by_name(pool, name).await.map_err(store_error(name))?;
    Ok(row.into())
}

/// Create a counter; `request` is expected to be validated by the caller
pub async fn create(
    pool: &SqlitePool,
    request: &CreateCounterRequest,
) -> Result<Counter, BackendError> {
    let row = db::insert(pool, &request.name, request.initial_value())
        .await
        .map_err(store_error(&request.name))?;
    tracing::info!(name = %row.name, value = row.value, "Created counter");
    Ok(row.into())
}

/// Set the value outright
pub async fn update(pool: &SqlitePool, name: &str, value: i64) -> Result<Counter, BackendError> {
    modify(pool, name, |row| {
        row.value = value;
        Ok(())
    })
    .await
}

/// Add `amount`. Read-modify-write, not atomic against a concurrent change.
pub async fn increment(pool: &SqlitePool, name: &str, amount: i64) -> Result<Counter, BackendError> {
    modify(pool, name, |row| row.add(amount).map_err(BackendError::from)).await
}

pub async fn decrement(pool: &SqlitePool, name: &str, amount: i64) -> Result<Counter, BackendError> {
    modify(pool, name, |row| row.subtract(amount).map_err(BackendError::from)).await
}

pub async fn reset(pool: &SqlitePool, name: &str) -> Result<Counter, BackendError> {
    modify(pool, name, |row| {
        row.reset();
        Ok(())
    })
    .await
}

pub async fn delete(pool: &SqlitePool, name: &str) -> Result<MessageResponse, BackendError> {
    db::delete(pool, name).await.map_err(store_error(name))?;
    tracing::info!(name, "Deleted counter");
    Ok(mapper::deleted(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::open_pool;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    async fn test_pool(dir: &tempfile::TempDir) -> SqlitePool {
        open_pool(&dir.path().join("counters.sqlite"), db::SCHEMA).await.unwrap()
    }

    #[tokio::test]
    async fn test_counter_arithmetic() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let created = create(&pool, &CreateCounterRequest::new("hits", None)).await.unwrap();
        assert_eq!(created.value, 0);
        assert_eq!(increment(&pool, "hits", 1).await.unwrap().value, 1);
        assert_eq!(increment(&pool, "hits", 5).await.unwrap().value, 6);
        assert_eq!(decrement(&pool, "hits", 2).await.unwrap().value, 4);
        assert_eq!(reset(&pool, "hits").await.unwrap().value, 0);
        assert_eq!(reset(&pool, "hits").await.unwrap().value, 0);
        assert_eq!(update(&pool, "hits", 42).await.unwrap().value, 42);
        assert_eq!(get(&pool, "hits").await.unwrap().value, 42);
    }

    #[tokio::test]
    async fn test_duplicate_name() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        create(&pool, &CreateCounterRequest::new("hits", Some(5))).await.unwrap();
        match create(&pool, &CreateCounterRequest::new("hits", Some(9))).await {
            Err(BackendError::AlreadyExists { message }) => {
                assert_eq!(message, "Counter 'hits' already exists")
            }
            other => panic!("Expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(get(&pool, "hits").await.unwrap().value, 5);
    }

    #[tokio::test]
    async fn test_overflow_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        create(&pool, &CreateCounterRequest::new("big", Some(i64::MAX))).await.unwrap();
        assert_matches!(
            increment(&pool, "big", 1).await,
            Err(BackendError::SharedError(_))
        );
        assert_eq!(get(&pool, "big").await.unwrap().value, i64::MAX);
    }

    #[tokio::test]
    async fn test_missing_name_is_not_found_everywhere() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        assert_matches!(get(&pool, "nope").await, Err(BackendError::NotFound { .. }));
        assert_matches!(update(&pool, "nope", 1).await, Err(BackendError::NotFound { .. }));
        assert_matches!(increment(&pool, "nope", 1).await, Err(BackendError::NotFound { .. }));
        assert_matches!(decrement(&pool, "nope", 1).await, Err(BackendError::NotFound { .. }));
        assert_matches!(reset(&pool, "nope").await, Err(BackendError::NotFound { .. }));
        match delete(&pool, "nope").await {
            Err(BackendError::NotFound { message }) => assert_eq!(message, "Counter 'nope' not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
