//! Skills, saving throws and the proficiency bonus.

use serde::{Deserialize, Serialize};

use super::ability::{ability_modifier, AbilityKey};
use super::validation::check_text;
use crate::domain::foundation::ValidationErrors;

pub const MAX_SKILL_NAME_LENGTH: usize = 100;

/// A skill on the sheet and whether the character is proficient in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub ability_key: AbilityKey,
    pub proficient: bool,
}

impl Skill {
    pub fn new(name: impl Into<String>, ability_key: AbilityKey, proficient: bool) -> Self {
        Self {
            name: name.into(),
            ability_key,
            proficient,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_text(&mut errors, "name", &self.name, MAX_SKILL_NAME_LENGTH);
        errors.into_result()
    }
}

/// The 18 standard skills and the ability each one keys off.
pub const SKILLS: [(&str, AbilityKey); 18] = [
    ("Acrobatics", AbilityKey::Dexterity),
    ("Animal Handling", AbilityKey::Wisdom),
    ("Arcana", AbilityKey::Intelligence),
    ("Athletics", AbilityKey::Strength),
    ("Deception", AbilityKey::Charisma),
    ("History", AbilityKey::Intelligence),
    ("Insight", AbilityKey::Wisdom),
    ("Intimidation", AbilityKey::Charisma),
    ("Investigation", AbilityKey::Intelligence),
    ("Medicine", AbilityKey::Wisdom),
    ("Nature", AbilityKey::Intelligence),
    ("Perception", AbilityKey::Wisdom),
    ("Performance", AbilityKey::Charisma),
    ("Persuasion", AbilityKey::Charisma),
    ("Religion", AbilityKey::Intelligence),
    ("Sleight of Hand", AbilityKey::Dexterity),
    ("Stealth", AbilityKey::Dexterity),
    ("Survival", AbilityKey::Wisdom),
];

/// Every standard skill, none proficient.
pub fn default_skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|(name, key)| Skill::new(*name, *key, false))
        .collect()
}

/// `ceil(level / 4) + 1`: 2 at level 1, 6 at level 20.
pub fn proficiency_bonus(level: i32) -> i32 {
    (level + 3).div_euclid(4) + 1
}

/// Ability modifier plus the proficiency bonus when proficient.
pub fn skill_bonus(ability_score: i32, proficient: bool, level: i32) -> i32 {
    let modifier = ability_modifier(ability_score);
    if proficient {
        modifier + proficiency_bonus(level)
    } else {
        modifier
    }
}

/// Saving throws use the skill formula.
pub fn saving_throw_bonus(ability_score: i32, proficient: bool, level: i32) -> i32 {
    skill_bonus(ability_score, proficient, level)
}

/// Flips proficiency on every skill called `name`; unknown names are a no-op.
pub fn toggle_skill(skills: &[Skill], name: &str) -> Vec<Skill> {
    skills
        .iter()
        .map(|skill| {
            if skill.name == name {
                Skill {
                    proficient: !skill.proficient,
                    ..skill.clone()
                }
            } else {
                skill.clone()
            }
        })
        .collect()
}

/// Adds `key` if absent, removes it if present.
pub fn toggle_saving_throw(proficiencies: &[AbilityKey], key: AbilityKey) -> Vec<AbilityKey> {
    if proficiencies.contains(&key) {
        proficiencies.iter().copied().filter(|k| *k != key).collect()
    } else {
        let mut next = proficiencies.to_vec();
        next.push(key);
        next
    }
}
