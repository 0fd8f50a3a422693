//! Application settings management.
//!
//! Handles loading, validating, and saving app settings in TOML format
//! with platform-specific directory resolution. Settings cover the viewer
//! itself (theme preference, export directory, audio volume); everything
//! the page displays lives in the site document instead.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::branding::APP_DATA_DIR;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Always use the dark theme (the page's native look)
    #[default]
    Dark,
    /// Always use the light theme
    Light,
    /// Detect the OS theme (dark/light)
    Auto,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Site document opened when none is given on the command line
    pub default_site: Option<PathBuf>,
    /// Directory receiving brochart exports; defaults under the config dir
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

/// Audio playback configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Playback volume, 0.0 through 2.0
    #[serde(default = "default_volume")]
    pub volume: f32,
}

/// Default playback volume (1.0 = 100%)
fn default_volume() -> f32 {
    1.0
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the help overlay on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Dark, Light, Auto)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application settings.
///
/// # File Location
///
/// - Linux: `~/.config/LazyLink/config.toml`
/// - macOS: `~/Library/Application Support/LazyLink/config.toml`
/// - Windows: `%APPDATA%\LazyLink\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Audio playback settings
    #[serde(default)]
    pub audio: AudioConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// The directory brochart exports are written to.
    ///
    /// Uses `paths.export_dir` when set, otherwise `exports/` under the
    /// config directory.
    pub fn export_dir(&self) -> Result<PathBuf> {
        match &self.paths.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("exports")),
        }
    }

    /// Loads settings from the config file.
    ///
    /// If the file doesn't exist, returns default settings.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
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

    /// Saves settings to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates settings values.
    ///
    /// Checks:
    /// - `default_site` points at an existing file when set
    /// - `volume` stays within 0.0..=2.0
    pub fn validate(&self) -> Result<()> {
        if let Some(site) = &self.paths.default_site {
            if !site.exists() {
                anyhow::bail!("Default site document does not exist: {}", site.display());
            }
        }

        if !(0.0..=2.0).contains(&self.audio.volume) {
            anyhow::bail!(
                "Audio volume must be between 0.0 and 2.0, got {}",
                self.audio.volume
            );
        }

        Ok(())
    }
}
