//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/doctag/config.toml)
//! 3. Environment variables (DOCTAG_* prefix)
//!
//! Environment variables take precedence over config file values. The
//! only setting the core needs is the index path; `DOCTAG_DB` overrides
//! it directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable prefix
const ENV_PREFIX: &str = "DOCTAG";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the persisted tag index
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
        }
    }
}

impl Config {
    /// Load configuration from the default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (DOCTAG_DB)
    /// 2. Config file (~/.config/doctag/config.toml or DOCTAG_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides. If the file
    /// doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(toml_content).map_err(|source| {
            ConfigError::Parse {
                path: PathBuf::from("<inline>"),
                source,
            }
        })?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // DOCTAG_DB
        if let Ok(val) = std::env::var(format!("{}_DB", ENV_PREFIX)) {
            if !val.is_empty() {
                self.index_path = PathBuf::from(val);
            }
        }
    }

    /// Get the config file path
    ///
    /// Can be overridden with the DOCTAG_CONFIG environment variable.
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("doctag")
            .join("config.toml")
    }
}

/// Errors loading the configuration file
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default index location: `.dtdb.json` in the user's home directory
fn default_index_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dtdb.json")
}
