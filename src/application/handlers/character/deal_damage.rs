//! DealDamageHandler - applies damage, temporary HP first.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{apply_damage, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// Non-positive amounts leave hit points unchanged.
#[derive(Debug, Clone)]
pub struct DealDamageCommand {
    pub id: CharacterId,
    pub amount: i32,
}

pub struct DealDamageHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl DealDamageHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DealDamageCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, amount = cmd.amount, "Dealing damage");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                hp: Some(apply_damage(character.hp, cmd.amount)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(character) => info!(id = %cmd.id, hp = ?character.hp, "Damage applied"),
            None => info!(id = %cmd.id, "Character not found for damage"),
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::character::test_support::{
        new_wizard, seeded, RecordingRepository,
    };
    use crate::domain::character::HitPoints;

    #[tokio::test]
    async fn damage_reduces_current_hp() {
        let (repo, character) = seeded().await;
        let updated = DealDamageHandler::new(repo)
            .handle(DealDamageCommand { id: character.id, amount: 10 })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.hp, HitPoints::new(22, 32, 0));
    }

    #[tokio::test]
    async fn missing_character_writes_nothing() {
        let repo = Arc::new(RecordingRepository::new());
        repo.seed(new_wizard()).await;

        let result = DealDamageHandler::new(repo.clone())
            .handle(DealDamageCommand { id: CharacterId::new(), amount: 5 })
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.update_count(), 0);
    }

    #[tokio::test]
    async fn write_failure_propagates() {
        let repo = Arc::new(RecordingRepository::failing_writes());
        // seeding bypasses the failing create
        let character = repo.seed(new_wizard()).await;

        let err = DealDamageHandler::new(repo)
            .handle(DealDamageCommand { id: character.id, amount: 5 })
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::Infrastructure(_)));
    }
}
