//! Character store policy

use serde::Deserialize;

use super::error::ValidationError;

/// Character behavior settings
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterConfig {
    /// Inserts tried per create when the generated slug collides.
    /// `1` accepts the collision risk and never retries.
    #[serde(default = "default_slug_max_attempts")]
    pub slug_max_attempts: u32,
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.slug_max_attempts == 0 || self.slug_max_attempts > 10 {
            return Err(ValidationError::InvalidSlugAttempts);
        }
        Ok(())
    }
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            slug_max_attempts: default_slug_max_attempts(),
        }
    }
}

fn default_slug_max_attempts() -> u32 {
    3
}
