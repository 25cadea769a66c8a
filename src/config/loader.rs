use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::plugin::{PluginRegistry, DEFAULT_PLUGINS};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/anymore/config.toml` on Linux, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory if
    /// there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("anymore").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `page_height`, if set, is at least 1
    /// - every disabled plugin is one of the default plugins
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pager.page_height == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "page_height must be at least 1".to_string(),
            });
        }

        if let Some(unknown) = self
            .plugins
            .disabled
            .iter()
            .find(|name| !DEFAULT_PLUGINS.contains(&name.as_str()))
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown plugin '{}' in plugins.disabled (known: {})",
                    unknown,
                    DEFAULT_PLUGINS.join(", ")
                ),
            });
        }

        Ok(())
    }

    /// The default plugins minus the disabled ones.
    pub fn registry(&self) -> PluginRegistry {
        let mut registry = PluginRegistry::with_defaults();
        for name in &self.plugins.disabled {
            registry.remove(name);
        }
        registry
    }
}
