//! ToggleSavingThrowHandler - adds or removes a saving throw proficiency.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{
    toggle_saving_throw, AbilityKey, Character, CharacterError, CharacterPatch,
};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

#[derive(Debug, Clone)]
pub struct ToggleSavingThrowCommand {
    pub id: CharacterId,
    pub ability: AbilityKey,
}

pub struct ToggleSavingThrowHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl ToggleSavingThrowHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ToggleSavingThrowCommand,
    ) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, ability = %cmd.ability, "Toggling saving throw proficiency");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                saving_throw_proficiencies: Some(toggle_saving_throw(
                    &character.saving_throw_proficiencies,
                    cmd.ability,
                )),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, ability = %cmd.ability, "Saving throw proficiency toggled"),
            None => info!(id = %cmd.id, "Character not found for saving throw toggle"),
        }
        Ok(updated)
    }
}
