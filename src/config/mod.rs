//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DND_SHEET` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a runnable setup.
//!
//! # Example
//!
//! ```no_run
//! use dnd_sheet::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod characters;
mod database;
mod error;
mod server;
mod srd;

pub use characters::CharacterConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use srd::SrdConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (SQLite file or memory)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// SRD spell API client
    #[serde(default)]
    pub srd: SrdConfig,

    /// Character store policy
    #[serde(default)]
    pub characters: CharacterConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DND_SHEET` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DND_SHEET__SERVER__PORT=4000` -> `server.port = 4000`
    /// - `DND_SHEET__DATABASE__URL=...` -> `database.url = ...`
    /// - `DND_SHEET__CHARACTERS__SLUG_MAX_ATTEMPTS=1` -> no slug retry
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DND_SHEET")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.srd.validate()?;
        self.characters.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "DND_SHEET__SERVER__PORT",
        "DND_SHEET__SERVER__ENVIRONMENT",
        "DND_SHEET__SERVER__LOG_FORMAT",
        "DND_SHEET__DATABASE__URL",
        "DND_SHEET__CHARACTERS__SLUG_MAX_ATTEMPTS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.url, "sqlite://data/app.db");
        assert_eq!(config.characters.slug_max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DND_SHEET__SERVER__PORT", "3000");
        env::set_var("DND_SHEET__SERVER__LOG_FORMAT", "json");
        env::set_var("DND_SHEET__DATABASE__URL", "sqlite::memory:");
        env::set_var("DND_SHEET__CHARACTERS__SLUG_MAX_ATTEMPTS", "1");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert!(config.database.is_in_memory());
        assert_eq!(config.characters.slug_max_attempts, 1);
    }

    #[test]
    fn test_environment_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DND_SHEET__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.environment, Environment::Production);
    }
}
