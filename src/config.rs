//! Configuration management for locker
//!
//! Settings are layered: built-in defaults, then an optional `locker.toml`,
//! then `LOCKER_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::storage::NameLookup;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "locker.toml";

/// Prefix for environment overrides, e.g. `LOCKER_ROOT`
pub const ENV_PREFIX: &str = "LOCKER";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory whose files are managed
    pub root: String,

    /// Create `root` on startup when it is missing
    pub create_root: bool,

    /// How delete, search and find compare names
    pub name_lookup: NameLookup,

    /// Longest accepted shell line, in characters
    pub max_command_length: usize,

    /// Prompt printed before each shell line
    pub prompt: String,
}

impl AppConfig {
    /// Load configuration from `locker.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the given file stem or path
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("root", "locker_files")?
            .set_default("create_root", true)?
            .set_default("name_lookup", "case_insensitive")?
            .set_default("max_command_length", 512_i64)?
            .set_default("prompt", "locker> ")?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get root directory as PathBuf
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.root.trim().is_empty() {
            return Err(ConfigError::Message("root cannot be empty".into()));
        }

        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: "locker_files".to_string(),
            create_root: true,
            name_lookup: NameLookup::CaseInsensitive,
            max_command_length: 512,
            prompt: "locker> ".to_string(),
        }
    }
}
