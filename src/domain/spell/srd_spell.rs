//! A spell from the System Reference Document, as cached locally.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError, ValidationErrors};

pub const MIN_SPELL_LEVEL: i32 = 0;
pub const MAX_SPELL_LEVEL: i32 = 9;

/// Serialized with snake_case keys (`casting_time`, `cached_at`), as existing
/// spell clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrdSpell {
    /// SRD key, e.g. `fireball`.
    pub index: String,
    pub name: String,
    /// 0 for cantrips.
    pub level: i32,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<Timestamp>,
}

impl SrdSpell {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (field, value) in [
            ("index", &self.index),
            ("name", &self.name),
            ("school", &self.school),
            ("casting_time", &self.casting_time),
            ("range", &self.range),
            ("duration", &self.duration),
        ] {
            if value.is_empty() {
                errors.push(ValidationError::empty_field(field));
            }
        }
        if !(MIN_SPELL_LEVEL..=MAX_SPELL_LEVEL).contains(&self.level) {
            errors.push(ValidationError::out_of_range(
                "level",
                MIN_SPELL_LEVEL,
                MAX_SPELL_LEVEL,
                self.level,
            ));
        }
        errors.into_result()
    }

    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }
}

#[cfg(test)]
pub(crate) fn fireball() -> SrdSpell {
    SrdSpell {
        index: "fireball".to_string(),
        name: "Fireball".to_string(),
        level: 3,
        school: "Evocation".to_string(),
        casting_time: "1 action".to_string(),
        range: "150 feet".to_string(),
        duration: "Instantaneous".to_string(),
        description: "A bright streak flashes from your pointing finger.".to_string(),
        classes: vec!["Sorcerer".to_string(), "Wizard".to_string()],
        cached_at: None,
    }
}
