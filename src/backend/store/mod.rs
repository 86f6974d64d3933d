//! Record Store
//!
//! SQLite access shared by the todo and counter stores. Each app owns one
//! database file holding a single table; the per-app query functions live in
//! `backend::todos::db` and `backend::counters::db`.
//!
//! Every store operation touches exactly one row in one statement, and the
//! statement is committed before the call returns.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use thiserror::Error;

/// Connections per store file
const MAX_CONNECTIONS: u32 = 5;

/// Failures raised by the record stores
///
/// The services translate these into domain errors that name the key.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row has the requested key
    #[error("record not found")]
    NotFound,

    /// A row with the same unique key already exists
    #[error("record already exists")]
    AlreadyExists,

    /// Any other SQLite failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Open (creating if missing) the SQLite file at `path` and ensure `schema` exists
///
/// `schema` is a `CREATE TABLE IF NOT EXISTS` statement; there is no other
/// migration step.
pub async fn open_pool(path: &Path, schema: &str) -> std::result::Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    sqlx::query(schema).execute(&pool).await?;

    tracing::info!(path = %path.display(), "Opened record store");
    Ok(pool)
}

/// Map an insert failure, turning a UNIQUE violation into `AlreadyExists`
pub(crate) fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::AlreadyExists,
        _ => StoreError::Database(err),
    }
}
