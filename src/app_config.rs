use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::language_utils::Locale;
use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Locale concepts are shown in when none is requested
    #[serde(default)]
    pub default_locale: Locale,

    /// Locale used when a value is missing in the requested one
    #[serde(default)]
    pub fallback_locale: Locale,

    /// Directory of additional `*.json` concept files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,

    /// Whether the concepts compiled into the binary are loaded
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Content validation config
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Read a config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open config file: {:?}", path))?;
        let config: Config = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Read a config file, or fall back to defaults when it does not exist.
    ///
    /// The flag tells whether the file was found.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        if FileManager::file_exists(&path) {
            Ok((Self::from_file(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Write the config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        FileManager::write_to_file(path, &json)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.include_builtin && self.content_dir.is_none() {
            return Err(anyhow!(
                "No concept source configured: enable include_builtin or set content_dir"
            ));
        }

        if let Some(dir) = &self.content_dir {
            if !FileManager::dir_exists(dir) {
                return Err(anyhow!("Content directory does not exist: {:?}", dir));
            }
        }

        if self.validation.strict && !self.validation.enabled {
            return Err(anyhow!("Strict validation requires validation to be enabled"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_locale: Locale::En,
            fallback_locale: Locale::En,
            content_dir: None,
            include_builtin: true,
            validation: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
