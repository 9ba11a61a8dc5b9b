//! Character command and query handlers.
//!
//! Every mutation follows the same sequence: validate user input, load the
//! current character, compute the changed fields with a domain rule, write
//! them back through `CharacterRepository::update`. A missing character is
//! `Ok(None)`; the sequence is not isolated from concurrent writers.

mod add_equipment;
mod create_character;
mod deal_damage;
mod delete_character;
mod get_character;
mod heal_character;
mod list_characters;
mod long_rest;
mod remove_equipment;
mod restore_spell_slot;
mod set_ac_override;
mod toggle_saving_throw;
mod toggle_skill;
mod update_character;
mod use_spell_slot;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_equipment::{AddEquipmentCommand, AddEquipmentHandler};
pub use create_character::{CreateCharacterCommand, CreateCharacterHandler};
pub use deal_damage::{DealDamageCommand, DealDamageHandler};
pub use delete_character::{DeleteCharacterCommand, DeleteCharacterHandler};
pub use get_character::{
    GetCharacterBySlugHandler, GetCharacterBySlugQuery, GetCharacterHandler, GetCharacterQuery,
};
pub use heal_character::{HealCharacterCommand, HealCharacterHandler};
pub use list_characters::{ListCharactersHandler, ListCharactersQuery};
pub use long_rest::{LongRestCommand, LongRestHandler};
pub use remove_equipment::{RemoveEquipmentCommand, RemoveEquipmentHandler};
pub use restore_spell_slot::{RestoreSpellSlotCommand, RestoreSpellSlotHandler};
pub use set_ac_override::{SetAcOverrideCommand, SetAcOverrideHandler};
pub use toggle_saving_throw::{ToggleSavingThrowCommand, ToggleSavingThrowHandler};
pub use toggle_skill::{ToggleSkillCommand, ToggleSkillHandler};
pub use update_character::{UpdateCharacterCommand, UpdateCharacterHandler};
pub use use_spell_slot::{UseSpellSlotCommand, UseSpellSlotHandler};

use crate::domain::character::{Character, CharacterError, CharacterPatch};
use crate::domain::foundation::CharacterId;
use crate::ports::CharacterRepository;

/// Loads the character, derives a patch from it and writes the patch back.
///
/// Returns `Ok(None)` without writing when the character does not exist.
/// An error from `derive` aborts before any write.
pub(crate) async fn read_modify_write<F>(
    repository: &dyn CharacterRepository,
    id: &CharacterId,
    derive: F,
) -> Result<Option<Character>, CharacterError>
where
    F: FnOnce(&Character) -> Result<CharacterPatch, CharacterError>,
{
    let Some(character) = repository.find_by_id(id).await? else {
        return Ok(None);
    };
    let patch = derive(&character)?;
    Ok(repository.update(id, patch).await?)
}
