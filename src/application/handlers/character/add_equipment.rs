//! AddEquipmentHandler - appends an item to the inventory.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{
    add_item, Character, CharacterError, CharacterPatch, NewEquipmentItem,
};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// The item receives a fresh id when added.
#[derive(Debug, Clone)]
pub struct AddEquipmentCommand {
    pub id: CharacterId,
    pub item: NewEquipmentItem,
}

pub struct AddEquipmentHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl AddEquipmentHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddEquipmentCommand) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, item = %cmd.item.name, "Adding equipment");
        cmd.item.validate()?;

        let item = cmd.item.into_item();
        let item_id = item.id;
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                equipment: Some(add_item(&character.equipment, item)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, item_id = %item_id, "Equipment added"),
            None => info!(id = %cmd.id, "Character not found for adding equipment"),
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

    fn rope() -> NewEquipmentItem {
        NewEquipmentItem {
            name: "Hempen Rope".to_string(),
            quantity: 1,
            weight: 10.0,
            equipped: false,
        }
    }

    #[tokio::test]
    async fn appends_item_with_assigned_id() {
        let (repo, character) = seeded().await;
        let handler = AddEquipmentHandler::new(repo);

        handler
            .handle(AddEquipmentCommand { id: character.id, item: rope() })
            .await
            .unwrap();
        let updated = handler
            .handle(AddEquipmentCommand { id: character.id, item: rope() })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.equipment.len(), 2);
        assert_ne!(updated.equipment[0].id, updated.equipment[1].id);
        assert_eq!(updated.equipment[1].name, "Hempen Rope");
    }

    #[tokio::test]
    async fn invalid_item_is_rejected_without_write() {
        let repo = Arc::new(RecordingRepository::new());
        let character = repo.seed(new_wizard()).await;
        let mut item = rope();
        item.quantity = 0;

        let err = AddEquipmentHandler::new(repo.clone())
            .handle(AddEquipmentCommand { id: character.id, item })
            .await
            .unwrap_err();

        assert!(matches!(err, CharacterError::Validation(_)));
        assert_eq!(repo.update_count(), 0);
    }
}
