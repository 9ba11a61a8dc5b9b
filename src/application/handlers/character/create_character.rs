//! CreateCharacterHandler - Command handler for creating characters.

use std::sync::Arc;

use tracing::info;

use crate::domain::character::{Character, CharacterError, NewCharacter};
use crate::ports::CharacterRepository;

/// Command to create a new character.
#[derive(Debug, Clone)]
pub struct CreateCharacterCommand {
    pub input: NewCharacter,
}

/// Handler for creating characters.
pub struct CreateCharacterHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl CreateCharacterHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    /// Validates the input, then stores it with a fresh id and slug.
    pub async fn handle(&self, cmd: CreateCharacterCommand) -> Result<Character, CharacterError> {
        info!(name = %cmd.input.name, "Creating character");
        cmd.input.validate()?;

        let character = self.repository.create(cmd.input).await?;
        info!(id = %character.id, name = %character.name, "Character created");
        Ok(character)
    }
}
