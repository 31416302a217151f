//! Configuration management for Task Master
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_NAME, CONFIG_GENERATED, DEFAULT_CALENDAR_URL};
use crate::icons::IconTheme;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon set: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Theme used until the first toggle is saved
    pub default_dark_mode: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for task due dates
    pub date_format: String,
    /// Show due dates as "today", "next Friday", ... instead of the raw date
    pub human_dates: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file, defaults to the XDG data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    /// Keep state in memory only (nothing survives a restart)
    pub in_memory: bool,
}

/// Calendar export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Base URL of the "create event" page
    pub base_url: String,
    /// Open links with the system opener; when false the link is only shown
    pub open_in_browser: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::Unicode,
            default_dark_mode: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DUE_DATE_FORMAT.to_string(),
            human_dates: false,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CALENDAR_URL.to_string(),
            open_in_browser: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(format!("{}.toml", APP_NAME));
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Display-only format: it must render, it does not need to round-trip.
        let sample = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        if self.display.date_format.trim().is_empty()
            || datetime::format_with(sample, &self.display.date_format).is_none()
        {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        let base_url = &self.calendar.base_url;
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            anyhow::bail!("calendar.base_url must be an http(s) URL, got '{}'", base_url);
        }

        self.logging.level_filter()?;

        if self.storage.in_memory && self.storage.database_path.is_some() {
            anyhow::bail!("storage.database_path cannot be combined with storage.in_memory");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Task Master Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DUE_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
