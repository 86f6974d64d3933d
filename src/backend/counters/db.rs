//! Database operations for counters
//!
//! Single-row queries against the `counters` table, keyed by `name`.

use sqlx::SqlitePool;

use super::model::CounterRow;
use crate::backend::store::{map_insert_error, Result, StoreError};

/// Table definition, created on startup if absent
pub const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS counters (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        value INTEGER NOT NULL DEFAULT 0
    )
"#;

/// Get every counter in creation order
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<CounterRow>> {
    let rows = sqlx::query_as::<_, CounterRow>(
        r#"
        SELECT id, name, value
        FROM counters
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get a counter by name
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<CounterRow> {
    sqlx::query_as::<_, CounterRow>(
        r#"
        SELECT id, name, value
        FROM counters
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound)
}

/// Insert a new counter
///
/// Fails with `AlreadyExists` when the name is taken; the existing row is untouched.
pub async fn insert(pool: &SqlitePool, name: &str, value: i64) -> Result<CounterRow> {
    sqlx::query_as::<_, CounterRow>(
        r#"
        INSERT INTO counters (name, value)
        VALUES (?, ?)
        RETURNING id, name, value
        "#,
    )
    .bind(name)
    .bind(value)
    .fetch_one(pool)
    .await
    .map_err(map_insert_error)
}

/// Persist the value of `counter`
pub async fn save(pool: &SqlitePool, counter: &CounterRow) -> Result<()> {
    let result = sqlx::query("UPDATE counters SET value = ? WHERE name = ?")
        .bind(counter.value)
        .bind(&counter.name)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

/// Delete a counter by name
pub async fn delete(pool: &SqlitePool, name: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM counters WHERE name = ?")
        .bind(name)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
