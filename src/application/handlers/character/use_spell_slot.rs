//! UseSpellSlotHandler - spends a slot, failing when none remain.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{use_spell_slot, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

#[derive(Debug, Clone)]
pub struct UseSpellSlotCommand {
    pub id: CharacterId,
    pub level: i32,
}

pub struct UseSpellSlotHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl UseSpellSlotHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `CharacterError::Rule` when the level is missing or exhausted;
    ///   nothing is written
    pub async fn handle(&self, cmd: UseSpellSlotCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, level = cmd.level, "Using spell slot");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                spell_slots: Some(use_spell_slot(&character.spell_slots, cmd.level)?),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, level = cmd.level, "Spell slot used"),
            None => info!(id = %cmd.id, "Character not found for spell slot use"),
        }
        Ok(updated)
    }
}
