//! Configuration module for pillbox
//!
//! Manages user defaults for the `pillbox` binary. Configuration is stored
//! in the user's config directory (`~/.config/pillbox/config.toml` on
//! Linux). Command-line flags override anything set here.

use crate::combo::ComboSettings;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PillboxConfig {
    /// Prompt shown in front of the search field
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Allow creating options that are not in the catalog
    #[serde(default)]
    pub allow_create: bool,

    /// Open the option list as soon as the widget is shown
    #[serde(default)]
    pub list_open_initial: bool,

    /// Maximum number of option rows shown at once
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Catalog file used when none is given on the command line
    #[serde(default)]
    pub default_catalog: Option<PathBuf>,
}

fn default_prompt() -> String {
    "Select:".to_string()
}

const fn default_max_visible() -> usize {
    8
}

impl Default for PillboxConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            allow_create: false,
            list_open_initial: false,
            max_visible: default_max_visible(),
            default_catalog: None,
        }
    }
}

impl PillboxConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("pillbox").join("config.toml"))
    }

    /// Load configuration from the user config file
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Keys accepted by [`get`](Self::get) and [`set`](Self::set)
    pub const KEYS: [&'static str; 5] = [
        "prompt",
        "allow_create",
        "list_open_initial",
        "max_visible",
        "default_catalog",
    ];

    /// Read a value by key, formatted for display
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "prompt" => self.prompt.clone(),
            "allow_create" => self.allow_create.to_string(),
            "list_open_initial" => self.list_open_initial.to_string(),
            "max_visible" => self.max_visible.to_string(),
            "default_catalog" => self
                .default_catalog
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        };
        Ok(value)
    }

    /// Update a value from its textual form
    ///
    /// An empty `default_catalog` clears it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key, or
    /// `ConfigError::Message` if the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "prompt" => self.prompt = value.to_string(),
            "allow_create" => self.allow_create = parse_bool(key, value)?,
            "list_open_initial" => self.list_open_initial = parse_bool(key, value)?,
            "max_visible" => {
                self.max_visible = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for {key}: '{value}'. Use a positive number"
                    ))
                })?;
            }
            "default_catalog" => {
                self.default_catalog = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }

    /// Combo box start-up settings derived from this configuration
    #[must_use]
    pub const fn combo_settings(&self) -> ComboSettings {
        ComboSettings {
            list_open_initial: self.list_open_initial,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}
