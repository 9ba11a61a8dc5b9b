//! Schema creation for the SQLite store.
//!
//! Every statement is idempotent, so `migrate` is safe to run at each
//! startup and against a fresh in-memory database in tests.

use sqlx::SqlitePool;

use crate::domain::foundation::DomainError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id TEXT PRIMARY KEY NOT NULL,
        slug TEXT UNIQUE,
        name TEXT NOT NULL,
        race TEXT NOT NULL,
        class TEXT NOT NULL,
        level INTEGER NOT NULL,
        ability_scores TEXT NOT NULL,
        hp TEXT NOT NULL,
        spell_slots TEXT,
        equipment TEXT,
        skills TEXT,
        armor_class TEXT,
        saving_throw_proficiencies TEXT,
        notes TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS srd_spells (
        spell_index TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        level INTEGER NOT NULL,
        school TEXT NOT NULL,
        casting_time TEXT NOT NULL,
        spell_range TEXT NOT NULL,
        duration TEXT NOT NULL,
        description TEXT NOT NULL,
        classes TEXT NOT NULL,
        cached_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_srd_spells_level ON srd_spells (level)",
];

/// Creates any missing tables and indexes.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DomainError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::database("Failed to run migration", e))?;
    }
    tracing::debug!(statements = STATEMENTS.len(), "SQLite schema up to date");
    Ok(())
}
