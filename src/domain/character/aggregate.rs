//! The Character aggregate, its creation input and its partial update.
//!
//! A character is created from a [`NewCharacter`] and afterwards only
//! changed through a [`CharacterPatch`]: present fields overwrite, absent
//! fields are preserved, nested values are replaced whole.

use serde::{Deserialize, Serialize};

use super::ability::{AbilityKey, AbilityScores};
use super::armor_class::ArmorClass;
use super::equipment::{EquipmentItem, NewEquipmentItem};
use super::hit_points::HitPoints;
use super::skills::Skill;
use super::spell_slots::SpellSlot;
use super::validation::{check_nested, check_range, check_text};
use crate::domain::foundation::{CharacterId, Slug, Timestamp, ValidationError, ValidationErrors};

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_RACE_LENGTH: usize = 100;
pub const MAX_CLASS_LENGTH: usize = 100;
pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 20;

/// A stored character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    /// Absent on characters stored before slugs existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    pub name: String,
    pub race: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i32,
    pub ability_scores: AbilityScores,
    pub hp: HitPoints,
    #[serde(default)]
    pub spell_slots: Vec<SpellSlot>,
    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub armor_class: ArmorClass,
    #[serde(default)]
    pub saving_throw_proficiencies: Vec<AbilityKey>,
    #[serde(default)]
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Character {
    /// Checks every user-editable field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_profile(&mut errors, &self.name, &self.race, &self.class_name, self.level);
        check_nested(&mut errors, "abilityScores", self.ability_scores.validate());
        check_nested(&mut errors, "hp", self.hp.validate());
        validate_spell_slots(&mut errors, &self.spell_slots);
        validate_each(&mut errors, "equipment", &self.equipment, EquipmentItem::validate);
        validate_each(&mut errors, "skills", &self.skills, Skill::validate);
        check_nested(&mut errors, "armorClass", self.armor_class.validate());
        validate_saving_throws(&mut errors, &self.saving_throw_proficiencies);
        errors.into_result()
    }

    /// Applies `patch`, keeping `id`, `slug` and `createdAt`.
    ///
    /// `updatedAt` becomes `now`, or stays put if `now` is earlier.
    pub fn apply_patch(&mut self, patch: CharacterPatch, now: Timestamp) {
        let CharacterPatch {
            name,
            race,
            class_name,
            level,
            ability_scores,
            hp,
            spell_slots,
            equipment,
            skills,
            armor_class,
            saving_throw_proficiencies,
            notes,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(race) = race {
            self.race = race;
        }
        if let Some(class_name) = class_name {
            self.class_name = class_name;
        }
        if let Some(level) = level {
            self.level = level;
        }
        if let Some(ability_scores) = ability_scores {
            self.ability_scores = ability_scores;
        }
        if let Some(hp) = hp {
            self.hp = hp;
        }
        if let Some(spell_slots) = spell_slots {
            self.spell_slots = spell_slots;
        }
        if let Some(equipment) = equipment {
            self.equipment = equipment;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if let Some(armor_class) = armor_class {
            self.armor_class = armor_class;
        }
        if let Some(saving_throw_proficiencies) = saving_throw_proficiencies {
            self.saving_throw_proficiencies = saving_throw_proficiencies;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        self.updated_at = now.not_before(self.updated_at);
    }

    /// Returns the patched copy.
    pub fn patched(mut self, patch: CharacterPatch, now: Timestamp) -> Self {
        self.apply_patch(patch, now);
        self
    }
}

/// Input for creating a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    pub name: String,
    pub race: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub level: i32,
    pub ability_scores: AbilityScores,
    pub hp: HitPoints,
    #[serde(default)]
    pub spell_slots: Vec<SpellSlot>,
    #[serde(default)]
    pub equipment: Vec<NewEquipmentItem>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub armor_class: ArmorClass,
    #[serde(default)]
    pub saving_throw_proficiencies: Vec<AbilityKey>,
    #[serde(default)]
    pub notes: String,
}

impl NewCharacter {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_profile(&mut errors, &self.name, &self.race, &self.class_name, self.level);
        check_nested(&mut errors, "abilityScores", self.ability_scores.validate());
        check_nested(&mut errors, "hp", self.hp.validate());
        validate_spell_slots(&mut errors, &self.spell_slots);
        validate_each(&mut errors, "equipment", &self.equipment, NewEquipmentItem::validate);
        validate_each(&mut errors, "skills", &self.skills, Skill::validate);
        check_nested(&mut errors, "armorClass", self.armor_class.validate());
        validate_saving_throws(&mut errors, &self.saving_throw_proficiencies);
        errors.into_result()
    }

    /// Builds the stored character. Equipment items receive fresh ids.
    pub fn into_character(self, id: CharacterId, slug: Slug, now: Timestamp) -> Character {
        Character {
            id,
            slug: Some(slug),
            name: self.name,
            race: self.race,
            class_name: self.class_name,
            level: self.level,
            ability_scores: self.ability_scores,
            hp: self.hp,
            spell_slots: self.spell_slots,
            equipment: self
                .equipment
                .into_iter()
                .map(NewEquipmentItem::into_item)
                .collect(),
            skills: self.skills,
            armor_class: self.armor_class,
            saving_throw_proficiencies: self.saving_throw_proficiencies,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update: every field optional, nothing nested merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_scores: Option<AbilityScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<HitPoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_slots: Option<Vec<SpellSlot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<EquipmentItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<ArmorClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_throw_proficiencies: Option<Vec<AbilityKey>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CharacterPatch {
    /// Validates only the fields that are present.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            check_text(&mut errors, "name", name, MAX_NAME_LENGTH);
        }
        if let Some(race) = &self.race {
            check_text(&mut errors, "race", race, MAX_RACE_LENGTH);
        }
        if let Some(class_name) = &self.class_name {
            check_text(&mut errors, "class", class_name, MAX_CLASS_LENGTH);
        }
        if let Some(level) = self.level {
            check_range(&mut errors, "level", level, MIN_LEVEL, MAX_LEVEL);
        }
        if let Some(scores) = &self.ability_scores {
            check_nested(&mut errors, "abilityScores", scores.validate());
        }
        if let Some(hp) = &self.hp {
            check_nested(&mut errors, "hp", hp.validate());
        }
        if let Some(slots) = &self.spell_slots {
            validate_spell_slots(&mut errors, slots);
        }
        if let Some(equipment) = &self.equipment {
            validate_each(&mut errors, "equipment", equipment, EquipmentItem::validate);
        }
        if let Some(skills) = &self.skills {
            validate_each(&mut errors, "skills", skills, Skill::validate);
        }
        if let Some(armor_class) = &self.armor_class {
            check_nested(&mut errors, "armorClass", armor_class.validate());
        }
        if let Some(keys) = &self.saving_throw_proficiencies {
            validate_saving_throws(&mut errors, keys);
        }
        errors.into_result()
    }

    /// True when applying the patch would change nothing but `updatedAt`.
    pub fn is_empty(&self) -> bool {
        self == &CharacterPatch::default()
    }
}

fn validate_profile(
    errors: &mut ValidationErrors,
    name: &str,
    race: &str,
    class_name: &str,
    level: i32,
) {
    check_text(errors, "name", name, MAX_NAME_LENGTH);
    check_text(errors, "race", race, MAX_RACE_LENGTH);
    check_text(errors, "class", class_name, MAX_CLASS_LENGTH);
    check_range(errors, "level", level, MIN_LEVEL, MAX_LEVEL);
}

fn validate_spell_slots(errors: &mut ValidationErrors, slots: &[SpellSlot]) {
    validate_each(errors, "spellSlots", slots, SpellSlot::validate);
}

fn validate_each<T>(
    errors: &mut ValidationErrors,
    field: &str,
    items: &[T],
    validate: impl Fn(&T) -> Result<(), ValidationErrors>,
) {
    for (index, item) in items.iter().enumerate() {
        check_nested(errors, &format!("{}[{}]", field, index), validate(item));
    }
}

fn validate_saving_throws(errors: &mut ValidationErrors, keys: &[AbilityKey]) {
    for (index, key) in keys.iter().enumerate() {
        if keys[..index].contains(key) {
            errors.push(ValidationError::constraint(
                "savingThrowProficiencies",
                format!("duplicate ability '{}'", key),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn new_character() -> NewCharacter {
        NewCharacter {
            name: "Gandalf the Grey".to_string(),
            race: "Maia".to_string(),
            class_name: "Wizard".to_string(),
            level: 20,
            ability_scores: AbilityScores::default(),
            hp: HitPoints::full(32),
            spell_slots: vec![SpellSlot::new(1, 0, 4)],
            equipment: vec![],
            skills: vec![],
            armor_class: ArmorClass::default(),
            saving_throw_proficiencies: vec![AbilityKey::Intelligence],
            notes: String::new(),
        }
    }

    fn stored() -> Character {
        new_character().into_character(
            CharacterId::new(),
            Slug::new("gandalf-the-grey-00ff").unwrap(),
            Timestamp::now(),
        )
    }

    #[test]
    fn valid_input_passes() {
        assert!(new_character().validate().is_ok());
        assert!(stored().validate().is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let mut input = new_character();
        input.name = String::new();
        input.level = 21;
        input.ability_scores.dex = 31;
        input.spell_slots = vec![SpellSlot::new(1, 0, 4), SpellSlot::new(2, 3, 2)];

        let errors = input.validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["name", "level", "abilityScores.DEX", "spellSlots[1].used"]
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut input = new_character();
        input.name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(input.validate().unwrap_err().fields(), vec!["name"]);
    }

    #[test]
    fn duplicate_saving_throws_are_rejected() {
        let mut input = new_character();
        input.saving_throw_proficiencies = vec![AbilityKey::Wisdom, AbilityKey::Wisdom];
        assert_eq!(
            input.validate().unwrap_err().fields(),
            vec!["savingThrowProficiencies"]
        );
    }

    #[test]
    fn creation_assigns_equipment_ids_and_equal_timestamps() {
        let mut input = new_character();
        input.equipment = vec![NewEquipmentItem {
            name: "Staff".to_string(),
            quantity: 1,
            weight: 4.0,
            equipped: true,
        }];
        let character = input.into_character(
            CharacterId::new(),
            Slug::new("gandalf-0000").unwrap(),
            Timestamp::now(),
        );
        assert_eq!(character.equipment.len(), 1);
        assert_eq!(character.created_at, character.updated_at);
    }

    #[test]
    fn patch_overwrites_present_fields_only() {
        let before = stored();
        let after = before.clone().patched(
            CharacterPatch {
                level: Some(5),
                notes: Some("Fly, you fools".to_string()),
                ..Default::default()
            },
            Timestamp::now(),
        );

        assert_eq!(after.level, 5);
        assert_eq!(after.notes, "Fly, you fools");
        assert_eq!(after.name, before.name);
        assert_eq!(after.spell_slots, before.spell_slots);
        assert_eq!(after.id, before.id);
        assert_eq!(after.slug, before.slug);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn patch_never_moves_updated_at_backwards() {
        let before = stored();
        let earlier = Timestamp::from_datetime(Utc::now() - Duration::hours(1));
        let after = before.clone().patched(CharacterPatch::default(), earlier);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[test]
    fn patch_validates_present_fields_only() {
        assert!(CharacterPatch::default().validate().is_ok());

        let patch = CharacterPatch {
            race: Some(String::new()),
            hp: Some(HitPoints::new(0, 0, 0)),
            ..Default::default()
        };
        assert_eq!(patch.validate().unwrap_err().fields(), vec!["race", "hp.max"]);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(CharacterPatch::default().is_empty());
        assert!(!CharacterPatch {
            notes: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn wire_format_is_camel_case_with_class() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["class"], "Wizard");
        assert_eq!(json["abilityScores"]["STR"], 10);
        assert_eq!(json["armorClass"]["override"], serde_json::Value::Null);
        assert_eq!(json["savingThrowProficiencies"][0], "INT");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn minimal_create_payload_takes_defaults() {
        let input: NewCharacter = serde_json::from_value(serde_json::json!({
            "name": "Aragorn",
            "race": "Human",
            "class": "Ranger",
            "level": 5,
            "abilityScores": { "STR": 16, "DEX": 14, "CON": 14, "INT": 10, "WIS": 12, "CHA": 12 },
            "hp": { "current": 44, "max": 44, "temp": 0 }
        }))
        .unwrap();

        assert!(input.equipment.is_empty());
        assert!(input.saving_throw_proficiencies.is_empty());
        assert_eq!(input.armor_class, ArmorClass::default());
        assert_eq!(input.notes, "");
    }

    #[test]
    fn character_json_round_trips() {
        let character = stored();
        let json = serde_json::to_string(&character).unwrap();
        let parsed: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, character);
    }
}
