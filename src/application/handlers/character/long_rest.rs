//! LongRestHandler - resets every spell slot.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{long_rest, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

#[derive(Debug, Clone)]
pub struct LongRestCommand {
    pub id: CharacterId,
}

pub struct LongRestHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl LongRestHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: LongRestCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, "Long rest");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                spell_slots: Some(long_rest(&character.spell_slots)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, "Long rest completed"),
            None => info!(id = %cmd.id, "Character not found for long rest"),
        }
        Ok(updated)
    }
}
