//! Marker Config
//!
//! This crate handles configuration loading and management
//! for marker, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/marker/config.toml`
//! - macOS: `~/Library/Application Support/marker/config.toml`
//! - Windows: `%APPDATA%\marker\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use marker_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod features;

pub use features::FeaturesConfig;

use marker_core::{MarkerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Links  = true
Images = true
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML so defaults and DEFAULT_TOML stay in sync
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    ///
    /// # Example
    ///
    /// ```
    /// use marker_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    ///
    /// # Example
    ///
    /// ```
    /// use marker_config::Config;
    /// if let Some(path) = Config::config_path() {
    ///     println!("Config path: {}", path.display());
    /// }
    /// ```
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "marker")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "marker")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use marker_config::Config;
    /// let config = Config::load().unwrap();
    /// ```
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| MarkerError::Config(format!("Parse error: {}", e)));
            }
        }

        // Return defaults if no config found
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use marker_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./config.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MarkerError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Arguments
    ///
    /// * `override_config` - Optional path to override file or inline TOML string
    ///
    /// # Example
    ///
    /// ```no_run
    /// use marker_config::Config;
    ///
    /// // Load with file override
    /// let config = Config::load_with_override(Some("./custom.toml")).unwrap();
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[features]\nLinks = false")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        // Start with base config
        let mut config = Self::load()?;

        // Apply override if provided
        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                // It's a file path
                std::fs::read_to_string(override_path)?
            } else {
                // Treat as inline TOML
                override_str.to_string()
            };

            // Parse and merge
            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| MarkerError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    /// This is used for applying CLI overrides or secondary config files.
    ///
    /// # Example
    ///
    /// ```
    /// use marker_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [features]
    ///     Links = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.links);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MarkerError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
