//! SQLite implementation of CharacterRepository.
//!
//! Scalars live in their own columns; nested values are JSON text.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::SqlitePool;

use super::{get_column, json_column_or_default, timestamp_column, to_json};
use crate::domain::character::{generate_slug, Character, CharacterPatch, NewCharacter};
use crate::domain::foundation::{CharacterId, DomainError, Slug, Timestamp};
use crate::ports::CharacterRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, slug, name, race, class, level, ability_scores, hp, spell_slots,
           equipment, skills, armor_class, saving_throw_proficiencies, notes,
           created_at, updated_at
    FROM characters
"#;

/// Default number of slugs tried before a collision is reported.
pub const DEFAULT_SLUG_ATTEMPTS: u32 = 3;

/// SQLite implementation of CharacterRepository.
#[derive(Clone)]
pub struct SqliteCharacterRepository {
    pool: SqlitePool,
    slug_attempts: u32,
}

impl SqliteCharacterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            slug_attempts: DEFAULT_SLUG_ATTEMPTS,
        }
    }

    /// How many slugs `create` tries before failing; `1` disables retry.
    pub fn with_slug_attempts(mut self, attempts: u32) -> Self {
        self.slug_attempts = attempts.max(1);
        self
    }

    async fn insert(
        &self,
        character: &Character,
        row: &EncodedCharacter,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO characters (
                id, slug, name, race, class, level, ability_scores, hp, spell_slots,
                equipment, skills, armor_class, saving_throw_proficiencies, notes,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(character.id.to_string())
        .bind(character.slug.as_ref().map(|s| s.as_str().to_string()))
        .bind(&character.name)
        .bind(&character.race)
        .bind(&character.class_name)
        .bind(character.level)
        .bind(&row.ability_scores)
        .bind(&row.hp)
        .bind(&row.spell_slots)
        .bind(&row.equipment)
        .bind(&row.skills)
        .bind(&row.armor_class)
        .bind(&row.saving_throw_proficiencies)
        .bind(&character.notes)
        .bind(character.created_at.to_rfc3339())
        .bind(character.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl CharacterRepository for SqliteCharacterRepository {
    async fn create(&self, input: NewCharacter) -> Result<Character, DomainError> {
        let slug = generate_slug(&input.name);
        let mut character = input.into_character(CharacterId::new(), slug, Timestamp::now());
        let encoded = EncodedCharacter::encode(&character)?;

        let mut attempt = 1;
        loop {
            match self.insert(&character, &encoded).await {
                Ok(()) => return Ok(character),
                Err(e) if is_slug_collision(&e) && attempt < self.slug_attempts => {
                    tracing::warn!(
                        slug = ?character.slug,
                        attempt,
                        "Slug collision, retrying with a new suffix"
                    );
                    character.slug = Some(generate_slug(&character.name));
                    attempt += 1;
                }
                Err(e) => return Err(DomainError::database("Failed to insert character", e)),
            }
        }
    }

    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch character", e))?;

        row.map(|row| row_to_character(&row)).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE slug = ?", SELECT_COLUMNS))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch character by slug", e))?;

        row.map(|row| row_to_character(&row)).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY created_at, id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch characters", e))?;

        rows.iter().map(row_to_character).collect()
    }

    async fn update(
        &self,
        id: &CharacterId,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch character", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let merged = row_to_character(&row)?.patched(patch, Timestamp::now());
        let encoded = EncodedCharacter::encode(&merged)?;

        sqlx::query(
            r#"
            UPDATE characters SET
                name = ?, race = ?, class = ?, level = ?,
                ability_scores = ?, hp = ?, spell_slots = ?, equipment = ?,
                skills = ?, armor_class = ?, saving_throw_proficiencies = ?,
                notes = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&merged.name)
        .bind(&merged.race)
        .bind(&merged.class_name)
        .bind(merged.level)
        .bind(encoded.ability_scores)
        .bind(encoded.hp)
        .bind(encoded.spell_slots)
        .bind(encoded.equipment)
        .bind(encoded.skills)
        .bind(encoded.armor_class)
        .bind(encoded.saving_throw_proficiencies)
        .bind(&merged.notes)
        .bind(merged.updated_at.to_rfc3339())
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update character", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit character update", e))?;

        Ok(Some(merged))
    }

    async fn delete(&self, id: &CharacterId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete character", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM characters")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to clear characters", e))?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// The JSON text columns of one character.
struct EncodedCharacter {
    ability_scores: String,
    hp: String,
    spell_slots: String,
    equipment: String,
    skills: String,
    armor_class: String,
    saving_throw_proficiencies: String,
}

impl EncodedCharacter {
    fn encode(character: &Character) -> Result<Self, DomainError> {
        Ok(Self {
            ability_scores: to_json("ability_scores", &character.ability_scores)?,
            hp: to_json("hp", &character.hp)?,
            spell_slots: to_json("spell_slots", &character.spell_slots)?,
            equipment: to_json("equipment", &character.equipment)?,
            skills: to_json("skills", &character.skills)?,
            armor_class: to_json("armor_class", &character.armor_class)?,
            saving_throw_proficiencies: to_json(
                "saving_throw_proficiencies",
                &character.saving_throw_proficiencies,
            )?,
        })
    }
}

fn is_slug_collision(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation() && db.message().contains("slug"),
        _ => false,
    }
}

fn row_to_character(row: &SqliteRow) -> Result<Character, DomainError> {
    let id: String = get_column(row, "id")?;
    let id = id
        .parse::<CharacterId>()
        .map_err(|e| DomainError::database(&format!("Invalid character id '{}'", id), e))?;

    let slug: Option<String> = get_column(row, "slug")?;
    let slug = slug
        .map(Slug::new)
        .transpose()
        .map_err(|e| DomainError::database("Invalid slug", e))?;

    let ability_scores: String = get_column(row, "ability_scores")?;
    let hp: String = get_column(row, "hp")?;
    let notes: Option<String> = get_column(row, "notes")?;

    Ok(Character {
        id,
        slug,
        name: get_column(row, "name")?,
        race: get_column(row, "race")?,
        class_name: get_column(row, "class")?,
        level: get_column(row, "level")?,
        ability_scores: super::from_json("ability_scores", &ability_scores)?,
        hp: super::from_json("hp", &hp)?,
        spell_slots: json_column_or_default(row, "spell_slots")?,
        equipment: json_column_or_default(row, "equipment")?,
        skills: json_column_or_default(row, "skills")?,
        armor_class: json_column_or_default(row, "armor_class")?,
        saving_throw_proficiencies: json_column_or_default(row, "saving_throw_proficiencies")?,
        notes: notes.unwrap_or_default(),
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    })
}
