//! SQLite implementation of SpellRepository.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{from_json, get_column, timestamp_column, to_json};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::spell::{SpellFilter, SrdSpell};
use crate::ports::SpellRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT spell_index, name, level, school, casting_time, spell_range, duration,
           description, classes, cached_at
    FROM srd_spells
"#;

const ORDER_BY: &str = " ORDER BY level, name";

#[derive(Clone)]
pub struct SqliteSpellRepository {
    pool: SqlitePool,
}

impl SqliteSpellRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpellRepository for SqliteSpellRepository {
    async fn upsert_all(&self, spells: &[SrdSpell]) -> Result<(), DomainError> {
        let now = Timestamp::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        for spell in spells {
            let classes = to_json("classes", &spell.classes)?;
            let cached_at = spell.cached_at.unwrap_or(now);
            sqlx::query(
                r#"
                INSERT INTO srd_spells (
                    spell_index, name, level, school, casting_time, spell_range,
                    duration, description, classes, cached_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT (spell_index) DO UPDATE SET
                    name = excluded.name,
                    level = excluded.level,
                    school = excluded.school,
                    casting_time = excluded.casting_time,
                    spell_range = excluded.spell_range,
                    duration = excluded.duration,
                    description = excluded.description,
                    classes = excluded.classes,
                    cached_at = excluded.cached_at
                "#,
            )
            .bind(&spell.index)
            .bind(&spell.name)
            .bind(spell.level)
            .bind(&spell.school)
            .bind(&spell.casting_time)
            .bind(&spell.range)
            .bind(&spell.duration)
            .bind(&spell.description)
            .bind(classes)
            .bind(cached_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(&format!("Failed to upsert spell '{}'", spell.index), e)
            })?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit spell upsert", e))
    }

    async fn find_all(&self) -> Result<Vec<SrdSpell>, DomainError> {
        let rows = sqlx::query(&format!("{}{}", SELECT_COLUMNS, ORDER_BY))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch spells", e))?;

        rows.iter().map(row_to_spell).collect()
    }

    async fn find_by_index(&self, index: &str) -> Result<Option<SrdSpell>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE spell_index = ?", SELECT_COLUMNS))
            .bind(index)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch spell", e))?;

        row.map(|row| row_to_spell(&row)).transpose()
    }

    async fn search(&self, filter: &SpellFilter) -> Result<Vec<SrdSpell>, DomainError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_COLUMNS);
        query.push(" WHERE 1 = 1");

        if let Some(name) = &filter.name {
            query
                .push(" AND name LIKE ")
                .push_bind(format!("%{}%", escape_like(name)))
                .push(" ESCAPE '\\'");
        }
        if let Some(level) = filter.level {
            query.push(" AND level = ").push_bind(level);
        }
        if let Some(school) = &filter.school {
            query
                .push(" AND school = ")
                .push_bind(school.clone())
                .push(" COLLATE NOCASE");
        }
        if let Some(class_name) = &filter.class_name {
            query
                .push(" AND EXISTS (SELECT 1 FROM json_each(srd_spells.classes) WHERE json_each.value = ")
                .push_bind(class_name.clone())
                .push(" COLLATE NOCASE)");
        }
        query.push(ORDER_BY);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to search spells", e))?;

        rows.iter().map(row_to_spell).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM srd_spells")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count spells", e))?;

        Ok(count.max(0) as u64)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM srd_spells")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to clear spell cache", e))?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Escapes LIKE wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_spell(row: &SqliteRow) -> Result<SrdSpell, DomainError> {
    let classes: String = get_column(row, "classes")?;
    Ok(SrdSpell {
        index: get_column(row, "spell_index")?,
        name: get_column(row, "name")?,
        level: get_column(row, "level")?,
        school: get_column(row, "school")?,
        casting_time: get_column(row, "casting_time")?,
        range: get_column(row, "spell_range")?,
        duration: get_column(row, "duration")?,
        description: get_column(row, "description")?,
        classes: from_json("classes", &classes)?,
        cached_at: Some(timestamp_column(row, "cached_at")?),
    })
}
