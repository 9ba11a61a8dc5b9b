//! SRD spell API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where spell data is fetched from
#[derive(Debug, Clone, Deserialize)]
pub struct SrdConfig {
    /// Spell list endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Spell detail requests in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl SrdConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidSrdUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.concurrency == 0 {
            return Err(ValidationError::InvalidConcurrency);
        }
        Ok(())
    }
}

impl Default for SrdConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.dnd5eapi.co/api/spells".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_concurrency() -> usize {
    8
}
