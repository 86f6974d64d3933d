//! Database operations for todos
//!
//! Single-row queries against the `todos` table.

use sqlx::SqlitePool;

use super::model::TodoRow;
use crate::backend::store::{map_insert_error, Result, StoreError};

/// Table definition, created on startup if absent
///
/// `AUTOINCREMENT` keeps SQLite from handing a deleted id to a new row.
pub const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        completed BOOLEAN NOT NULL DEFAULT 0
    )
"#;

/// Get every todo in creation order
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<TodoRow>> {
    let rows = sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, title, description, completed
        FROM todos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get a todo by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<TodoRow> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        SELECT id, title, description, completed
        FROM todos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound)
}

/// Insert a new, not yet completed todo
pub async fn insert(pool: &SqlitePool, title: &str, description: Option<&str>) -> Result<TodoRow> {
    sqlx::query_as::<_, TodoRow>(
        r#"
        INSERT INTO todos (title, description, completed)
        VALUES (?, ?, 0)
        RETURNING id, title, description, completed
        "#,
    )
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await
    .map_err(map_insert_error)
}

/// Persist every column of `todo`
pub async fn save(pool: &SqlitePool, todo: &TodoRow) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE todos
        SET title = ?, description = ?, completed = ?
        WHERE id = ?
        "#,
    )
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(todo.completed)
    .bind(todo.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

/// Delete a todo by id
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
