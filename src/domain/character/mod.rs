//! Character module - the sheet aggregate and the 5e rules applied to it.
//!
//! Rules are pure functions over value types; persistence and
//! orchestration live in the ports and application layers.

mod ability;
mod aggregate;
mod armor_class;
mod equipment;
mod errors;
mod hit_points;
mod sheet;
mod skills;
mod slug;
mod spell_slots;
mod validation;

pub use ability::{ability_modifier, AbilityKey, AbilityScores, MAX_ABILITY_SCORE, MIN_ABILITY_SCORE};
pub use aggregate::{
    Character, CharacterPatch, NewCharacter, MAX_CLASS_LENGTH, MAX_LEVEL, MAX_NAME_LENGTH,
    MAX_RACE_LENGTH, MIN_LEVEL,
};
pub use armor_class::{calculate_ac, ArmorClass, DEFAULT_BASE_AC};
pub use equipment::{add_item, calculate_total_weight, remove_item, EquipmentItem, NewEquipmentItem};
pub use errors::{CharacterError, RuleViolation};
pub use hit_points::{apply_damage, apply_healing, HitPoints};
pub use sheet::{CharacterSheet, SavingThrowLine, SkillLine};
pub use skills::{
    default_skills, proficiency_bonus, saving_throw_bonus, skill_bonus, toggle_saving_throw,
    toggle_skill, Skill, SKILLS,
};
pub use slug::{generate_slug, generate_slug_with, slugify};
pub use spell_slots::{long_rest, restore_spell_slot, use_spell_slot, SpellSlot, MAX_SLOT_LEVEL, MIN_SLOT_LEVEL};
