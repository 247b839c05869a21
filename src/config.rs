//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::{PaperFormats, PosterConfiguration};

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "POSTERWIZARD_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Force adaptive styling on or off. Unset means "only on macOS".
    #[serde(default)]
    pub adaptive_styling: Option<bool>,
    /// Corner radius of preview panels
    #[serde(default = "default_panel_radius")]
    pub panel_radius: i32,
    /// Corner radius of framed labels
    #[serde(default = "default_label_radius")]
    pub label_radius: i32,
}

const fn default_panel_radius() -> i32 {
    12
}

const fn default_label_radius() -> i32 {
    8
}

impl UiConfig {
    /// Whether adaptive styling should run on this platform.
    #[must_use]
    pub fn adaptive_styling_enabled(&self) -> bool {
        self.adaptive_styling
            .unwrap_or(cfg!(target_os = "macos"))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            adaptive_styling: None,
            panel_radius: default_panel_radius(),
            label_radius: default_label_radius(),
        }
    }
}

/// Initial poster settings used when the wizard starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterDefaults {
    /// Paper format key (must exist in the paper format table)
    pub paper_format: String,
    /// Unit of length label
    pub unit_of_length: String,
    /// Open the PDF after saving
    pub launch_pdf_application: bool,
}

impl Default for PosterDefaults {
    fn default() -> Self {
        Self {
            paper_format: "DIN A4".to_string(),
            unit_of_length: "cm".to_string(),
            launch_pdf_application: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PosterWizard/config.toml`
/// - macOS: `~/Library/Application Support/PosterWizard/config.toml`
/// - Windows: `%APPDATA%\PosterWizard\config.toml`
///
/// `POSTERWIZARD_CONFIG_DIR` replaces the directory part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Poster defaults
    #[serde(default)]
    pub poster: PosterDefaults,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PosterWizard");

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

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
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

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
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

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - paper format exists in the embedded format table
    /// - unit of length is not empty
    /// - corner radii are not negative
    pub fn validate(&self) -> Result<()> {
        let formats = PaperFormats::load()?;
        if !formats.contains(&self.poster.paper_format) {
            anyhow::bail!(
                "Unknown paper format '{}'. Known formats: {}",
                self.poster.paper_format,
                formats.names_sorted().join(", ")
            );
        }

        if self.poster.unit_of_length.trim().is_empty() {
            anyhow::bail!("Unit of length cannot be empty");
        }

        if self.ui.panel_radius < 0 || self.ui.label_radius < 0 {
            anyhow::bail!(
                "Corner radii must not be negative (panel: {}, label: {})",
                self.ui.panel_radius,
                self.ui.label_radius
            );
        }

        Ok(())
    }

    /// Builds the configuration the wizard starts with.
    #[must_use]
    pub fn poster_defaults(&self) -> PosterConfiguration {
        PosterConfiguration {
            paper_format: self.poster.paper_format.clone(),
            unit_of_length: self.poster.unit_of_length.clone(),
            launch_pdf_application: self.poster.launch_pdf_application,
            ..PosterConfiguration::default()
        }
    }
}
