//! Armor class: base plus DEX, unless overridden.

use serde::{Deserialize, Serialize};

use super::ability::ability_modifier;
use crate::domain::foundation::{ValidationError, ValidationErrors};

pub const DEFAULT_BASE_AC: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClass {
    #[serde(default = "default_base")]
    pub base: i32,
    /// Fixed AC that replaces the computed value when set.
    #[serde(rename = "override", default)]
    pub override_value: Option<i32>,
}

fn default_base() -> i32 {
    DEFAULT_BASE_AC
}

impl ArmorClass {
    pub fn new(base: i32, override_value: Option<i32>) -> Self {
        Self {
            base,
            override_value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.base < 0 {
            errors.push(ValidationError::out_of_range("base", 0, i32::MAX, self.base));
        }
        if let Some(value) = self.override_value {
            if value < 0 {
                errors.push(ValidationError::out_of_range("override", 0, i32::MAX, value));
            }
        }
        errors.into_result()
    }

    /// Same armor class with a new override (or none).
    pub fn with_override(self, override_value: Option<i32>) -> Self {
        Self {
            override_value,
            ..self
        }
    }
}

impl Default for ArmorClass {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_AC, None)
    }
}

/// The override if set, otherwise `base + DEX modifier`.
pub fn calculate_ac(dex_score: i32, armor_class: &ArmorClass) -> i32 {
    match armor_class.override_value {
        Some(value) => value,
        None => armor_class.base + ability_modifier(dex_score),
    }
}
