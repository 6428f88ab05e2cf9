//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving user defaults
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::export::ExportFormat;
use crate::models::{HarmonyScheme, RgbColor};
use crate::services::store::{DEFAULT_PRIMARY, DEFAULT_SECONDARY};

/// Default palette inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Primary base color (hex)
    pub primary: String,
    /// Secondary base color (hex)
    pub secondary: String,
    /// Harmony scheme linking the secondary to the primary
    pub scheme: HarmonyScheme,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_hex(),
            secondary: DEFAULT_SECONDARY.to_hex(),
            scheme: HarmonyScheme::Auto,
        }
    }
}

impl PaletteConfig {
    /// Parsed primary color.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hex is malformed.
    pub fn primary_color(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.primary).context("Invalid primary color in config")
    }

    /// Parsed secondary color.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hex is malformed.
    pub fn secondary_color(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.secondary).context("Invalid secondary color in config")
    }
}

/// Export preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub format: ExportFormat,
    /// Directory for generated files (current directory if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
///
/// Stored at:
/// - Linux: `~/.config/Shadeforge/config.toml`
/// - macOS: `~/Library/Application Support/Shadeforge/config.toml`
/// - Windows: `%APPDATA%\Shadeforge\config.toml`
///
/// The directory can be overridden with `SHADEFORGE_CONFIG_DIR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default palette inputs
    pub palette: PaletteConfig,
    /// Export preferences
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `SHADEFORGE_CONFIG_DIR`, otherwise the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "Saved config");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks that both palette colors are well-formed hex.
    pub fn validate(&self) -> Result<()> {
        self.palette.primary_color()?;
        self.palette.secondary_color()?;
        Ok(())
    }
}
