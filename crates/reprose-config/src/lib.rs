//! Reprose Config
//!
//! This crate handles configuration loading and management
//! for reprose, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/reprose/config.toml`
//! - macOS: `~/Library/Application Support/reprose/config.toml`
//! - Windows: `%APPDATA%\reprose\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use reprose_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod convert;
mod sanitize;

pub use convert::ConvertConfig;
pub use sanitize::SanitizeConfig;

use reprose_core::{ReproseError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[convert]
HeadingHeuristic = true
HeadingMaxLength = 100
HeuristicLevel   = 2

[sanitize]
ImageAlt      = "Article image"
FigureMargin  = "margin: 1.5rem 0;"
FontSizeLimit = 100
FontSizeClamp = "2rem"
Display       = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Text-to-HTML conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,

    /// HTML sanitization settings
    #[serde(default)]
    pub sanitize: SanitizeConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use reprose_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[convert]"));
    /// assert!(toml.contains("[sanitize]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "reprose")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// Returns the path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| ReproseError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| ReproseError::Config(format!("{} ({})", e, path.display())))
    }

    /// Parse a TOML string into a configuration.
    ///
    /// Missing sections and keys fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use reprose_config::Config;
    /// let config = Config::parse("[sanitize]\nImageAlt = \"Photo\"").unwrap();
    /// assert_eq!(config.sanitize.image_alt, "Photo");
    /// assert!(config.convert.heading_heuristic);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReproseError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, merge its contents
    ///    - Otherwise, treat it as a TOML string and merge that
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            config.merge_toml(&override_toml)?;
        }

        Ok(config)
    }

    /// Merge a TOML overlay into this config.
    ///
    /// Only keys present in `overlay` change; everything else keeps its
    /// current value.
    ///
    /// # Example
    ///
    /// ```
    /// use reprose_config::Config;
    ///
    /// let mut config = Config::parse("[sanitize]\nImageAlt = \"Photo\"").unwrap();
    /// config.merge_toml("[convert]\nHeadingHeuristic = false").unwrap();
    ///
    /// assert!(!config.convert.heading_heuristic);
    /// assert_eq!(config.sanitize.image_alt, "Photo");
    /// ```
    pub fn merge_toml(&mut self, overlay: &str) -> Result<()> {
        let overlay: toml::Table = toml::from_str(overlay)
            .map_err(|e| ReproseError::Config(format!("Override parse error: {}", e)))?;

        let mut base = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => return Err(ReproseError::Config("Config is not a table".into())),
            Err(e) => return Err(ReproseError::Config(format!("Serialization error: {}", e))),
        };
        merge_tables(&mut base, overlay);

        *self = toml::Value::Table(base)
            .try_into()
            .map_err(|e| ReproseError::Config(format!("Override value error: {}", e)))?;
        Ok(())
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ReproseError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

/// Recursively overlay `overlay` onto `base`; nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let value = match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
                continue;
            }
            (_, value) => value,
        };
        base.insert(key, value);
    }
}
