//! Configuration management for notesman.
//!
//! Configuration is layered with figment: built-in defaults, then an optional
//! TOML file. A missing file is not an error.

use std::path::PathBuf;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir holding our config file.
const CONFIG_DIR_NAME: &str = "notesman";

/// Notes file used when nothing else is configured.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// Application configuration.
///
/// Loaded from (highest precedence first):
/// 1. TOML config file at `~/.config/notesman/config.toml`
/// 2. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notes file configuration.
    pub notes: NotesConfig,
    /// Interactive session configuration.
    pub session: SessionConfig,
}

/// Notes file configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// File the session starts on. Relative paths resolve against the
    /// working directory.
    pub default_file: PathBuf,
}

/// Interactive session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Print the title and data file path before the first menu.
    pub show_banner: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_NOTES_FILE),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

impl Config {
    /// Load configuration, from `config_path` or the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.notes.default_file.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "notes.default_file must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The notes file a session should start on.
    ///
    /// An explicit override (from the command line) wins over the configured
    /// default.
    #[must_use]
    pub fn notes_path(&self, file_override: Option<PathBuf>) -> PathBuf {
        file_override.unwrap_or_else(|| self.notes.default_file.clone())
    }
}
