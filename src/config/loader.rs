use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_PAGE_SIZE};

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
    /// Uses `~/.config/photo-search/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("photo-search").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `base_url` is an absolute URL
    /// - `per_page` and `random_count` are within what the API accepts
    /// - an access key source is named
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api = &self.api;

        if reqwest::Url::parse(&api.base_url).is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' is not a valid URL", api.base_url),
            });
        }

        for (field, value) in [("per_page", api.per_page), ("random_count", api.random_count)] {
            if value == 0 || value > MAX_PAGE_SIZE {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "api.{} must be between 1 and {}, got {}",
                        field, MAX_PAGE_SIZE, value
                    ),
                });
            }
        }

        if api.access_key_env.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.access_key_env must name an environment variable".to_string(),
            });
        }

        Ok(())
    }
}
