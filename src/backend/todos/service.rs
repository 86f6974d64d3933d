//! Todo service
//!
//! One function per use case. Store failures come back as `BackendError`
//! domain errors that name the todo id.

use sqlx::SqlitePool;

use super::{db, mapper};
use crate::backend::error::BackendError;
use crate::backend::store::StoreError;
use crate::shared::{CreateTodoRequest, MessageResponse, Todo, UpdateTodoRequest};

fn store_error(id: i64) -> impl FnOnce(StoreError) -> BackendError {
    move |err| match err {
        StoreError::NotFound => BackendError::not_found(format!("Todo with id '{}' not found", id)),
        StoreError::AlreadyExists => {
            BackendError::already_exists(format!("Todo with id '{}' already exists", id))
        }
        StoreError::Database(err) => BackendError::Database(err),
    }
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Todo>, BackendError> {
    let rows = db::find_all(pool).await?;
    Ok(rows.into_iter().map(Todo::from).collect())
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Todo, BackendError> {
    let row = db::find_by_id(pool, id).await.map_err(store_error(id))?;
    Ok(row.into())
}

/// Create a todo; `request` is expected to be validated by the caller
pub async fn create(pool: &SqlitePool, request: &CreateTodoRequest) -> Result<Todo, BackendError> {
    let row = db::insert(pool, &request.title, request.description.as_deref()).await?;
    tracing::info!(id = row.id, "Created todo");
    Ok(row.into())
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateTodoRequest,
) -> Result<Todo, BackendError> {
    let mut row = db::find_by_id(pool, id).await.map_err(store_error(id))?;
    row.apply_update(request);
    db::save(pool, &row).await.map_err(store_error(id))?;
    Ok(row.into())
}

/// Flip `completed`. Read-modify-write, not atomic against a concurrent toggle.
pub async fn toggle(pool: &SqlitePool, id: i64) -> Result<Todo, BackendError> {
    let mut row = db::find_by_id(pool, id).await.map_err(store_error(id))?;
    row.toggle();
    db::save(pool, &row).await.map_err(store_error(id))?;
    Ok(row.into())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<MessageResponse, BackendError> {
    db::delete(pool, id).await.map_err(store_error(id))?;
    tracing::info!(id, "Deleted todo");
    Ok(mapper::deleted(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::open_pool;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    async fn test_pool(dir: &tempfile::TempDir) -> SqlitePool {
        open_pool(&dir.path().join("todos.sqlite"), db::SCHEMA).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let todo = create(&pool, &CreateTodoRequest::new("Buy milk", None)).await.unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
        assert!(!todo.completed);
        assert_eq!(get(&pool, todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn test_update_only_description() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let todo = create(&pool, &CreateTodoRequest::new("Buy milk", None)).await.unwrap();
        toggle(&pool, todo.id).await.unwrap();

        let updated = update(
            &pool,
            todo.id,
            &UpdateTodoRequest {
                description: Some("semi-skimmed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "semi-skimmed");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_create_and_update_store_title_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let created = create(&pool, &CreateTodoRequest::new("  padded  ", None)).await.unwrap();
        assert_eq!(created.title, "  padded  ");

        let update_title = UpdateTodoRequest {
            title: Some("  padded  ".to_string()),
            ..Default::default()
        };
        let updated = update(&pool, created.id, &update_title).await.unwrap();
        assert_eq!(updated.title, created.title);
    }

    #[tokio::test]
    async fn test_toggle_twice() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        let todo = create(&pool, &CreateTodoRequest::new("Walk", None)).await.unwrap();
        assert!(toggle(&pool, todo.id).await.unwrap().completed);
        assert!(!toggle(&pool, todo.id).await.unwrap().completed);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool(&dir).await;

        assert_matches!(get(&pool, 7).await, Err(BackendError::NotFound { .. }));
        assert_matches!(toggle(&pool, 7).await, Err(BackendError::NotFound { .. }));
        assert_matches!(
            update(&pool, 7, &UpdateTodoRequest::default()).await,
            Err(BackendError::NotFound { .. })
        );
        match delete(&pool, 7).await {
            Err(BackendError::NotFound { message }) => assert!(message.contains("'7'")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
