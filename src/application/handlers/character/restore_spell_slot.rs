//! RestoreSpellSlotHandler - gives back one slot, floored at zero used.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{restore_spell_slot, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

#[derive(Debug, Clone)]
pub struct RestoreSpellSlotCommand {
    pub id: CharacterId,
    pub level: i32,
}

pub struct RestoreSpellSlotHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl RestoreSpellSlotHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RestoreSpellSlotCommand,
    ) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, level = cmd.level, "Restoring spell slot");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                spell_slots: Some(restore_spell_slot(&character.spell_slots, cmd.level)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, level = cmd.level, "Spell slot restored"),
            None => info!(id = %cmd.id, "Character not found for spell slot restore"),
        }
        Ok(updated)
    }
}
