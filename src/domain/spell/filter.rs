//! Search criteria for the spell cache.

use serde::Deserialize;

use super::SrdSpell;

/// All criteria are optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SpellFilter {
    /// Case-insensitive substring of the spell name.
    pub name: Option<String>,
    pub level: Option<i32>,
    /// Case-insensitive school name.
    pub school: Option<String>,
    /// Case-insensitive class that can cast the spell.
    pub class_name: Option<String>,
}

impl SpellFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.level.is_none()
            && self.school.is_none()
            && self.class_name.is_none()
    }

    pub fn matches(&self, spell: &SrdSpell) -> bool {
        if let Some(name) = &self.name {
            if !spell
                .name
                .to_ascii_lowercase()
                .contains(&name.to_ascii_lowercase())
            {
                return false;
            }
        }
        if let Some(level) = self.level {
            if spell.level != level {
                return false;
            }
        }
        if let Some(school) = &self.school {
            if !spell.school.eq_ignore_ascii_case(school) {
                return false;
            }
        }
        if let Some(class_name) = &self.class_name {
            if !spell
                .classes
                .iter()
                .any(|class| class.eq_ignore_ascii_case(class_name))
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::spell::srd_spell::fireball;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(SpellFilter::default().is_empty());
        assert!(SpellFilter::default().matches(&fireball()));
    }

    #[test]
    fn name_is_case_insensitive_substring() {
        let filter = SpellFilter {
            name: Some("FIRE".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&fireball()));
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = SpellFilter {
            level: Some(3),
            school: Some("evocation".to_string()),
            class_name: Some("Cleric".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&fireball()));

        let filter = SpellFilter {
            class_name: Some("wizard".to_string()),
            ..filter
        };
        assert!(filter.matches(&fireball()));
    }

    #[test]
    fn level_must_match_exactly() {
        let filter = SpellFilter {
            level: Some(2),
            ..Default::default()
        };
        assert!(!filter.matches(&fireball()));
    }
}
