//! Configuration module for the loxt CLI.
//!
//! This module handles locating and loading configuration
//! settings for the loxt application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{LoxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "loxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Interactive prompt configuration.
    #[serde(default)]
    pub repl: ReplConfig,

    /// Token output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Interactive prompt options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt printed before each line is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Leave the prompt with exit code 65 after a line with lexical errors.
    #[serde(default)]
    pub exit_on_error: bool,
}

/// How tokens and errors are printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format for tokens.
    #[serde(default)]
    pub format: OutputFormat,

    /// Whether comment tokens are printed.
    #[serde(default = "default_true")]
    pub show_comments: bool,

    /// Stop scanning an input at its first lexical error.
    #[serde(default)]
    pub stop_on_error: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_on_error: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_comments: true,
            stop_on_error: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LoxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| LoxtError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("loxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("loxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
