//! UpdateCharacterHandler - Command handler for partial character updates.

use std::sync::Arc;

use tracing::info;

use crate::domain::character::{Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// Command to overwrite the fields present in `patch`.
#[derive(Debug, Clone)]
pub struct UpdateCharacterCommand {
    pub id: CharacterId,
    pub patch: CharacterPatch,
}

/// Handler for partial character updates.
pub struct UpdateCharacterHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl UpdateCharacterHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCharacterCommand,
    ) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, "Updating character");
        cmd.patch.validate()?;

        let updated = self.repository.update(&cmd.id, cmd.patch).await?;
        match &updated {
            Some(_) => info!(id = %cmd.id, "Character updated"),
            None => info!(id = %cmd.id, "Character not found for update"),
        }
        Ok(updated)
    }
}
