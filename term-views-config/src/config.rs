//! Window-level configuration for the view layer.
//!
//! Covers:
//! - the `Config` struct and its serde defaults
//! - `load` / `load_from` / `save` / `save_to` (YAML file I/O with atomic write)
//! - path helpers (`config_dir`, `config_path`, `session_state_path`)

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{LogLevel, NavigationMethod, NavigationVisibility, NewTabBehavior};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "term-views";

/// View-layer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the profile used for new sessions; `None` uses the first profile
    #[serde(default = "defaults::default_profile")]
    pub default_profile: Option<String>,

    /// Placement of new tabs in their container
    #[serde(default)]
    pub new_tab_behavior: NewTabBehavior,

    /// Whether tab navigation actions are enabled
    #[serde(default)]
    pub navigation_method: NavigationMethod,

    /// Tab bar visibility applied to every container
    #[serde(default)]
    pub navigation_visibility: NavigationVisibility,

    /// Size tabs to their titles instead of filling the tab bar
    #[serde(default)]
    pub tab_width_to_text: bool,

    /// Remove containers that become empty while others remain.
    /// Off by default: emptied containers are kept.
    #[serde(default)]
    pub reclaim_empty_containers: bool,

    /// Restore the previous window layout at startup
    #[serde(default = "defaults::bool_true")]
    pub restore_session: bool,

    /// Log level used when neither the CLI nor `RUST_LOG` sets one
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: defaults::default_profile(),
            new_tab_behavior: NewTabBehavior::default(),
            navigation_method: NavigationMethod::default(),
            navigation_visibility: NavigationVisibility::default(),
            tab_width_to_text: false,
            reclaim_empty_containers: false,
            restore_session: defaults::bool_true(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        log::info!("Config file not found, creating default at {:?}", config_path);
        let config = Self::default();
        if let Err(e) = config.save() {
            log::error!("Failed to save default config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        config.validate()?;

        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let yaml = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        // Atomic save: write to temp file then rename
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)
            .with_context(|| format!("Failed to write config to {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move config into place at {:?}", path))?;

        Ok(())
    }

    /// Reject values that would leave the view layer without a profile
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(name) = &self.default_profile
            && name.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "default_profile must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the saved window layout path
    pub fn session_state_path() -> PathBuf {
        Self::config_dir().join("last_session.yaml")
    }
}
