//! HTTP DTOs for character endpoints.
//!
//! Create and update bodies reuse `NewCharacter` and `CharacterPatch`
//! directly; their camelCase serde shape is the wire format.

use serde::{Deserialize, Serialize};

use crate::domain::character::{Character, CharacterSheet};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of the damage and heal actions.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountRequest {
    pub amount: i32,
}

/// Body of `PUT /:id/ac`; a missing or null override clears it.
#[derive(Debug, Clone, Deserialize)]
pub struct AcOverrideRequest {
    #[serde(rename = "override", default)]
    pub override_value: Option<i32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored character plus its computed sheet values.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponse {
    #[serde(flatten)]
    pub character: Character,
    pub derived: CharacterSheet,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        let derived = CharacterSheet::derive(&character);
        Self { character, derived }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::character::test_support::new_wizard;
    use crate::domain::character::generate_slug;
    use crate::domain::foundation::{CharacterId, Timestamp};

    #[test]
    fn ac_override_accepts_number_null_and_missing() {
        let set: AcOverrideRequest = serde_json::from_str(r#"{"override": 17}"#).unwrap();
        assert_eq!(set.override_value, Some(17));

        let cleared: AcOverrideRequest = serde_json::from_str(r#"{"override": null}"#).unwrap();
        assert_eq!(cleared.override_value, None);

        let missing: AcOverrideRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.override_value, None);
    }

    #[test]
    fn character_response_flattens_fields_beside_derived() {
        let character = new_wizard().into_character(
            CharacterId::new(),
            generate_slug("Elminster"),
            Timestamp::now(),
        );
        let json = serde_json::to_value(CharacterResponse::from(character)).unwrap();

        assert_eq!(json["name"], "Elminster");
        assert_eq!(json["class"], "Wizard");
        assert_eq!(json["abilityScores"]["INT"], 18);
        assert_eq!(json["derived"]["proficiencyBonus"], 3);
        assert_eq!(json["derived"]["armorClass"], 12);
    }
}
