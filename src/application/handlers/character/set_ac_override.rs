//! SetAcOverrideHandler - fixes or clears the armor class override.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// `None` clears the override so AC is computed from base and DEX again.
#[derive(Debug, Clone)]
pub struct SetAcOverrideCommand {
    pub id: CharacterId,
    pub override_value: Option<i32>,
}

pub struct SetAcOverrideHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl SetAcOverrideHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetAcOverrideCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, override_value = ?cmd.override_value, "Setting AC override");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            let patch = CharacterPatch {
                armor_class: Some(character.armor_class.with_override(cmd.override_value)),
                ..Default::default()
            };
            patch.validate()?;
            Ok(patch)
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, "AC override set"),
            None => info!(id = %cmd.id, "Character not found for AC override"),
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::character::test_support::seeded;
    use crate::domain::character::{calculate_ac, ArmorClass};

    #[tokio::test]
    async fn sets_and_clears_override() {
        let (repo, character) = seeded().await;
        let handler = SetAcOverrideHandler::new(repo);

        let set = handler
            .handle(SetAcOverrideCommand { id: character.id, override_value: Some(18) })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(set.armor_class, ArmorClass::new(10, Some(18)));
        assert_eq!(calculate_ac(set.ability_scores.dex, &set.armor_class), 18);

        let cleared = handler
            .handle(SetAcOverrideCommand { id: character.id, override_value: None })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(calculate_ac(cleared.ability_scores.dex, &cleared.armor_class), 12);
    }

    #[tokio::test]
    async fn negative_override_is_rejected() {
        let (repo, character) = seeded().await;
        let err = SetAcOverrideHandler::new(repo)
            .handle(SetAcOverrideCommand { id: character.id, override_value: Some(-3) })
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::Validation(_)));
    }
}
