//! DeleteCharacterHandler - Command handler for deleting characters.

use std::sync::Arc;

use tracing::info;

use crate::domain::character::CharacterError;
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

#[derive(Debug, Clone)]
pub struct DeleteCharacterCommand {
    pub id: CharacterId,
}

/// Handler for deleting characters. Deletion is permanent.
pub struct DeleteCharacterHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl DeleteCharacterHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Returns whether a character was removed.
    pub async fn handle(&self, cmd: DeleteCharacterCommand) -> Result<bool, CharacterError> {
        info!(id = %cmd.id, "Deleting character");
        let deleted = self.repository.delete(&cmd.id).await?;
        info!(id = %cmd.id, deleted, "Character delete result");
        Ok(deleted)
    }
}
