//! In-Memory Character Repository
//!
//! Keeps characters in a map guarded by an async lock.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::character::{generate_slug, Character, CharacterPatch, NewCharacter};
use crate::domain::foundation::{CharacterId, DomainError, ErrorCode, Slug, Timestamp};
use crate::ports::CharacterRepository;

const DEFAULT_SLUG_ATTEMPTS: u32 = 3;

/// In-memory storage for characters
#[derive(Debug, Clone)]
pub struct InMemoryCharacterRepository {
    characters: Arc<RwLock<HashMap<CharacterId, Character>>>,
    slug_attempts: u32,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self {
            characters: Arc::new(RwLock::new(HashMap::new())),
            slug_attempts: DEFAULT_SLUG_ATTEMPTS,
        }
    }

    /// How many slugs `create` tries before failing; `1` disables retry.
    pub fn with_slug_attempts(mut self, attempts: u32) -> Self {
        self.slug_attempts = attempts.max(1);
        self
    }

    /// Get the number of stored characters
    pub async fn len(&self) -> usize {
        self.characters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.characters.read().await.is_empty()
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    async fn create(&self, input: NewCharacter) -> Result<Character, DomainError> {
        let mut characters = self.characters.write().await;

        let name = input.name.clone();
        let mut slug = generate_slug(&name);
        let mut attempt = 1;
        while characters.values().any(|c| c.slug.as_ref() == Some(&slug)) {
            if attempt >= self.slug_attempts {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Slug already in use: {}", slug),
                ));
            }
            tracing::warn!(%slug, attempt, "Slug collision, retrying with a new suffix");
            slug = generate_slug(&name);
            attempt += 1;
        }

        let character = input.into_character(CharacterId::new(), slug, Timestamp::now());
        characters.insert(character.id, character.clone());
        Ok(character)
    }

    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError> {
        Ok(self.characters.read().await.get(id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Character>, DomainError> {
        let characters = self.characters.read().await;
        Ok(characters
            .values()
            .find(|c| c.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        let mut all: Vec<Character> = self.characters.read().await.values().cloned().collect();
        all.sort_by_key(|c| c.created_at);
        Ok(all)
    }

    async fn update(
        &self,
        id: &CharacterId,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, DomainError> {
        let mut characters = self.characters.write().await;
        match characters.get_mut(id) {
            Some(character) => {
                character.apply_patch(patch, Timestamp::now());
                Ok(Some(character.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &CharacterId) -> Result<bool, DomainError> {
        Ok(self.characters.write().await.remove(id).is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.characters.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::{AbilityScores, ArmorClass, HitPoints};

    fn input(name: &str) -> NewCharacter {
        NewCharacter {
            name: name.to_string(),
            race: "Dwarf".to_string(),
            class_name: "Fighter".to_string(),
            level: 3,
            ability_scores: AbilityScores::default(),
            hp: HitPoints::full(28),
            spell_slots: vec![],
            equipment: vec![],
            skills: vec![],
            armor_class: ArmorClass::default(),
            saving_throw_proficiencies: vec![],
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn identical_names_get_distinct_ids() {
        let repo = InMemoryCharacterRepository::new();
        let a = repo.create(input("Gimli")).await.unwrap();
        let b = repo.create(input("Gimli")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn update_of_missing_character_writes_nothing() {
        let repo = InMemoryCharacterRepository::new();
        let result = repo
            .update(&CharacterId::new(), CharacterPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let repo = InMemoryCharacterRepository::new();
        repo.create(input("Gimli")).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
