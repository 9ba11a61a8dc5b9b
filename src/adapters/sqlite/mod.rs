//! SQLite adapters - Database implementations for repository ports.
//!
//! - `SqliteCharacterRepository` - Character aggregates, nested values as JSON text
//! - `SqliteSpellRepository` - Cached SRD spells
//! - `migrate` - Idempotent schema creation

mod character_repository;
mod schema;
mod spell_repository;

pub use character_repository::SqliteCharacterRepository;
pub use schema::migrate;
pub use spell_repository::SqliteSpellRepository;

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, Timestamp};

/// Opens a pool for the configured database, creating the file if needed.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    if config.is_in_memory() {
        return connect_in_memory().await;
    }
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DomainError::database("Invalid database URL", e))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))
}

/// A private in-memory database.
///
/// Each SQLite memory connection is its own database, so the pool is held
/// at a single connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, DomainError> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .map_err(|e| DomainError::database("Failed to open in-memory database", e))
}

// ════════════════════════════════════════════════════════════════════════════
// Shared row helpers
// ════════════════════════════════════════════════════════════════════════════

fn get_column<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", column), e))
}

fn to_json<T: Serialize + ?Sized>(column: &str, value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value)
        .map_err(|e| DomainError::serialization(&format!("Failed to encode {}", column), e))
}

fn from_json<T: DeserializeOwned>(column: &str, raw: &str) -> Result<T, DomainError> {
    serde_json::from_str(raw)
        .map_err(|e| DomainError::serialization(&format!("Failed to decode {}", column), e))
}

/// NULL columns from older rows decode to the type's default.
fn json_column_or_default<T: DeserializeOwned + Default>(
    row: &SqliteRow,
    column: &str,
) -> Result<T, DomainError> {
    let raw: Option<String> = get_column(row, column)?;
    match raw {
        Some(raw) => from_json(column, &raw),
        None => Ok(T::default()),
    }
}

fn timestamp_column(row: &SqliteRow, column: &str) -> Result<Timestamp, DomainError> {
    let raw: String = get_column(row, column)?;
    Timestamp::parse_rfc3339(&raw)
        .map_err(|e| DomainError::database(&format!("Invalid {} '{}'", column, raw), e))
}
