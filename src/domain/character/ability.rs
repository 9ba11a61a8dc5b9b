//! Ability scores and the modifiers derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ValidationError, ValidationErrors};

/// Lowest legal ability score.
pub const MIN_ABILITY_SCORE: i32 = 1;
/// Highest legal ability score.
pub const MAX_ABILITY_SCORE: i32 = 30;

/// One of the six 5e abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AbilityKey {
    #[serde(rename = "STR")]
    Strength,
    #[serde(rename = "DEX")]
    Dexterity,
    #[serde(rename = "CON")]
    Constitution,
    #[serde(rename = "INT")]
    Intelligence,
    #[serde(rename = "WIS")]
    Wisdom,
    #[serde(rename = "CHA")]
    Charisma,
}

impl AbilityKey {
    /// All abilities in sheet order.
    pub const ALL: [AbilityKey; 6] = [
        AbilityKey::Strength,
        AbilityKey::Dexterity,
        AbilityKey::Constitution,
        AbilityKey::Intelligence,
        AbilityKey::Wisdom,
        AbilityKey::Charisma,
    ];

    /// Three-letter abbreviation used on the wire.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            AbilityKey::Strength => "STR",
            AbilityKey::Dexterity => "DEX",
            AbilityKey::Constitution => "CON",
            AbilityKey::Intelligence => "INT",
            AbilityKey::Wisdom => "WIS",
            AbilityKey::Charisma => "CHA",
        }
    }
}

impl fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for AbilityKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbilityKey::ALL
            .into_iter()
            .find(|key| key.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::invalid_format("abilityKey", format!("unknown ability '{}'", s))
            })
    }
}

/// The six ability scores of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AbilityScores {
    pub str: i32,
    pub dex: i32,
    pub con: i32,
    pub int: i32,
    pub wis: i32,
    pub cha: i32,
}

impl AbilityScores {
    /// Score for the given ability.
    pub fn get(&self, key: AbilityKey) -> i32 {
        match key {
            AbilityKey::Strength => self.str,
            AbilityKey::Dexterity => self.dex,
            AbilityKey::Constitution => self.con,
            AbilityKey::Intelligence => self.int,
            AbilityKey::Wisdom => self.wis,
            AbilityKey::Charisma => self.cha,
        }
    }

    /// Modifier for the given ability.
    pub fn modifier(&self, key: AbilityKey) -> i32 {
        ability_modifier(self.get(key))
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for key in AbilityKey::ALL {
            let score = self.get(key);
            if !(MIN_ABILITY_SCORE..=MAX_ABILITY_SCORE).contains(&score) {
                errors.push(ValidationError::out_of_range(
                    key.abbreviation(),
                    MIN_ABILITY_SCORE,
                    MAX_ABILITY_SCORE,
                    score,
                ));
            }
        }
        errors.into_result()
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            str: 10,
            dex: 10,
            con: 10,
            int: 10,
            wis: 10,
            cha: 10,
        }
    }
}

/// `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}
