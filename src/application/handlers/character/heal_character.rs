//! HealCharacterHandler - restores hit points up to the maximum.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{apply_healing, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// Non-positive amounts leave hit points unchanged.
#[derive(Debug, Clone)]
pub struct HealCharacterCommand {
    pub id: CharacterId,
    pub amount: i32,
}

pub struct HealCharacterHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl HealCharacterHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: HealCharacterCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, amount = cmd.amount, "Healing character");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                hp: Some(apply_healing(character.hp, cmd.amount)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(character) => info!(id = %cmd.id, hp = ?character.hp, "Healing applied"),
            None => info!(id = %cmd.id, "Character not found for healing"),
        }
        Ok(updated)
    }
}
