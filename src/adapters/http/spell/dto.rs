//! HTTP DTOs for spell endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::spell::SpellFilter;

/// Query string of `GET /api/spells`. Empty values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpellListParams {
    pub name: Option<String>,
    pub level: Option<String>,
    pub school: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
}

impl SpellListParams {
    /// Fails with the offending value when `level` is not an integer.
    pub fn into_filter(self) -> Result<SpellFilter, String> {
        let level = match non_empty(self.level) {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| raw)?),
            None => None,
        };
        Ok(SpellFilter {
            name: non_empty(self.name),
            level,
            school: non_empty(self.school),
            class_name: non_empty(self.class_name),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_make_an_empty_filter() {
        let params = SpellListParams {
            name: Some(String::new()),
            level: Some(String::new()),
            ..Default::default()
        };
        assert!(params.into_filter().unwrap().is_empty());
    }

    #[test]
    fn level_must_be_numeric() {
        let params = SpellListParams {
            level: Some("third".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_filter().unwrap_err(), "third");

        let params = SpellListParams {
            level: Some("3".to_string()),
            class_name: Some("Wizard".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.level, Some(3));
        assert_eq!(filter.class_name.as_deref(), Some("Wizard"));
    }
}
