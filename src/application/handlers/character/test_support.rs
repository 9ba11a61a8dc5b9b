//! Shared fixtures for character handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::memory::InMemoryCharacterRepository;
use crate::domain::character::{
    AbilityKey, AbilityScores, ArmorClass, Character, CharacterPatch, HitPoints, NewCharacter,
    Skill, SpellSlot,
};
use crate::domain::foundation::{CharacterId, DomainError, ErrorCode, Slug};
use crate::ports::CharacterRepository;

pub(crate) fn new_wizard() -> NewCharacter {
    NewCharacter {
        name: "Elminster".to_string(),
        race: "Human".to_string(),
        class_name: "Wizard".to_string(),
        level: 5,
        ability_scores: AbilityScores {
            str: 10,
            dex: 14,
            con: 12,
            int: 18,
            wis: 13,
            cha: 11,
        },
        hp: HitPoints::full(32),
        spell_slots: vec![SpellSlot::new(1, 0, 4), SpellSlot::new(2, 0, 3), SpellSlot::new(3, 2, 2)],
        equipment: vec![],
        skills: vec![
            Skill::new("Arcana", AbilityKey::Intelligence, true),
            Skill::new("Stealth", AbilityKey::Dexterity, false),
        ],
        armor_class: ArmorClass::default(),
        saving_throw_proficiencies: vec![AbilityKey::Intelligence, AbilityKey::Wisdom],
        notes: String::new(),
    }
}

/// In-memory repository seeded with one wizard.
pub(crate) async fn seeded() -> (Arc<InMemoryCharacterRepository>, Character) {
    let repo = Arc::new(InMemoryCharacterRepository::new());
    let character = repo.create(new_wizard()).await.unwrap();
    (repo, character)
}

/// Counts writes and can be told to fail them.
pub(crate) struct RecordingRepository {
    inner: InMemoryCharacterRepository,
    updates: AtomicUsize,
    fail_writes: bool,
}

impl RecordingRepository {
    pub(crate) fn new() -> Self {
        Self {
            inner: InMemoryCharacterRepository::new(),
            updates: AtomicUsize::new(0),
            fail_writes: false,
        }
    }

    pub(crate) fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub(crate) fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub(crate) async fn seed(&self, input: NewCharacter) -> Character {
        self.inner.create(input).await.unwrap()
    }
}

#[async_trait]
impl CharacterRepository for RecordingRepository {
    async fn create(&self, input: NewCharacter) -> Result<Character, DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated insert failure"));
        }
        self.inner.create(input).await
    }

    async fn find_by_id(&self, id: &CharacterId) -> Result<Option<Character>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Character>, DomainError> {
        self.inner.find_by_slug(slug).await
    }

    async fn find_all(&self) -> Result<Vec<Character>, DomainError> {
        self.inner.find_all().await
    }

    async fn update(
        &self,
        id: &CharacterId,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, DomainError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated update failure"));
        }
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &CharacterId) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.inner.clear().await
    }
}
