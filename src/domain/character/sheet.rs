//! Read-only values computed from a character for display.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ability::AbilityKey;
use super::aggregate::Character;
use super::armor_class::calculate_ac;
use super::equipment::calculate_total_weight;
use super::skills::{proficiency_bonus, saving_throw_bonus, skill_bonus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLine {
    pub name: String,
    pub ability_key: AbilityKey,
    pub proficient: bool,
    pub bonus: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingThrowLine {
    pub proficient: bool,
    pub bonus: i32,
}

/// Derived numbers for a character sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub ability_modifiers: BTreeMap<AbilityKey, i32>,
    pub proficiency_bonus: i32,
    pub armor_class: i32,
    pub skills: Vec<SkillLine>,
    pub saving_throws: BTreeMap<AbilityKey, SavingThrowLine>,
    pub total_weight: f64,
}

impl CharacterSheet {
    pub fn derive(character: &Character) -> Self {
        let scores = &character.ability_scores;
        let level = character.level;

        let ability_modifiers = AbilityKey::ALL
            .into_iter()
            .map(|key| (key, scores.modifier(key)))
            .collect();

        let skills = character
            .skills
            .iter()
            .map(|skill| SkillLine {
                name: skill.name.clone(),
                ability_key: skill.ability_key,
                proficient: skill.proficient,
                bonus: skill_bonus(scores.get(skill.ability_key), skill.proficient, level),
            })
            .collect();

        let saving_throws = AbilityKey::ALL
            .into_iter()
            .map(|key| {
                let proficient = character.saving_throw_proficiencies.contains(&key);
                let bonus = saving_throw_bonus(scores.get(key), proficient, level);
                (key, SavingThrowLine { proficient, bonus })
            })
            .collect();

        Self {
            ability_modifiers,
            proficiency_bonus: proficiency_bonus(level),
            armor_class: calculate_ac(scores.dex, &character.armor_class),
            skills,
            saving_throws,
            total_weight: calculate_total_weight(&character.equipment),
        }
    }
}
