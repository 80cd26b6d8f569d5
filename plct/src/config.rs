//! Configuration module for the plct CLI.
//!
//! This module handles loading the `plct.toml` configuration file and
//! supplying defaults for every setting it may omit.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::{error_messages, OutputFormat};
use crate::error::{PlctError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "plct.toml";

/// Application configuration structure.
///
/// Command-line flags take precedence over the values here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Colored log output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Lex-specific configuration.
    #[serde(default)]
    pub lex: LexConfig,
}

/// Lex-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Default token output format (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            lex: LexConfig::default(),
        }
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/plct/`
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
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlctError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| PlctError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.lex_format()?;
        Ok(config)
    }

    /// The configured default output format for `lex`.
    pub fn lex_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_name(&self.lex.format).ok_or_else(|| {
            PlctError::Validation(format!(
                "{}: {}",
                error_messages::INVALID_CONFIG_FORMAT,
                self.lex.format
            ))
        })
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("plct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("plct").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.color);
        assert_eq!(config.lex.format, "text");
        assert_eq!(config.lex_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("color = false\n").unwrap();
        assert!(!config.color);
        assert!(!config.verbose);
        assert_eq!(config.lex.format, "text");
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n\n[lex]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
        assert!(config.color);
        assert_eq!(config.lex_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        let original = Config {
            verbose: true,
            color: false,
            lex: LexConfig {
                format: "json".to_string(),
            },
        };
        std::fs::write(&config_path, toml::to_string_pretty(&original).unwrap()).unwrap();

        assert_eq!(Config::load_from_path(&config_path).unwrap(), original);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Config::parse("[lex]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(PlctError::Validation(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Config::parse("verbose = ");
        assert!(matches!(result, Err(PlctError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/plct.toml"));
        assert!(matches!(result, Err(PlctError::Config(_))));
    }
}
