//! RemoveEquipmentHandler - drops an item from the inventory by id.

use std::sync::Arc;

use tracing::info;

use super::read_modify_write;
use crate::domain::character::{remove_item, Character, CharacterError, CharacterPatch};
use crate::domain::foundation::{CharacterId, EquipmentItemId};
use crate::ports::CharacterRepository;

/// Unknown item ids leave the inventory unchanged.
#[derive(Debug, Clone)]
pub struct RemoveEquipmentCommand {
    pub id: CharacterId,
    pub item_id: EquipmentItemId,
}

pub struct RemoveEquipmentHandler {
    repository: Arc<dyn CharacterRepository>,
}

impl RemoveEquipmentHandler {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveEquipmentCommand,
    ) -> Result<Option<Character>, CharacterError> {
        info!(id = %cmd.id, item_id = %cmd.item_id, "Removing equipment");
        let updated = read_modify_write(self.repository.as_ref(), &cmd.id, |character| {
            Ok(CharacterPatch {
                equipment: Some(remove_item(&character.equipment, &cmd.item_id)),
                ..Default::default()
            })
        })
        .await?;

        match &updated {
            Some(_) => info!(id = %cmd.id, item_id = %cmd.item_id, "Equipment removed"),
            None => info!(id = %cmd.id, "Character not found for removing equipment"),
        }
        Ok(updated)
    }
}
