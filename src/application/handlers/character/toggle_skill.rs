//! ToggleSkillHandler - flips proficiency in a named skill.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{toggle_skill, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// Unknown skill names leave the skill list unchanged.
#[derive(Debug, Clone)]
pub struct ToggleSkillCommand {
    pub id: CharacterId,
    pub skill_name: String,
}

pub struct ToggleSkillHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl ToggleSkillHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ToggleSkillCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, skill = %cmd.skill_name, "Toggling skill proficiency");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                skills: Some(toggle_skill(&character.skills, &cmd.skill_name)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, skill = %cmd.skill_name, "Skill proficiency toggled"),
            None => info!(id = %cmd.id, "Character not found for skill toggle"),
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::character::test_support::seeded;

    #[tokio::test]
    async fn toggles_named_skill() {
        let (repo, character) = seeded().await;
        let handler = ToggleSkillHandler::new(repo);

        let updated = handler
            .handle(ToggleSkillCommand {
                id: character.id,
                skill_name: "Stealth".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        let stealth = updated.skills.iter().find(|s| s.name == "Stealth").unwrap();
        assert!(stealth.proficient);
        assert!(updated.skills.iter().find(|s| s.name == "Arcana").unwrap().proficient);
    }

    #[tokio::test]
    async fn unknown_skill_changes_nothing_but_timestamp() {
        let (repo, character) = seeded().await;

        let updated = ToggleSkillHandler::new(repo)
            .handle(ToggleSkillCommand {
                id: character.id,
                skill_name: "Juggling".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.skills, character.skills);
    }
}
