//! Application configuration
//!
//! Precedence (highest to lowest):
//! 1. `--api-url` on the command line
//! 2. `VECTORWORX_API_URL`
//! 3. Config file (`--config`, `./vectorworx.toml`, `<config dir>/vectorworx/config.toml`)
//! 4. Defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::backend::DEFAULT_API_URL;

pub const API_URL_ENV: &str = "VECTORWORX_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the QA backend
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, environment and command-line override
    ///
    /// An explicit `path` must exist and parse. A discovered file that fails
    /// to load is skipped.
    pub fn load(path: Option<&Path>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::discover(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }
        if let Some(url) = api_url {
            config.api_url = url.to_string();
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn discover() -> Self {
        let Some(path) = Self::find_config_file() else {
            return Self::default();
        };

        debug!("Loading config from: {}", path.display());
        Self::load_from_file(&path).unwrap_or_else(|e| {
            warn!("{}; using defaults", e);
            Self::default()
        })
    }

    fn find_config_file() -> Option<PathBuf> {
        let mut candidates = vec![PathBuf::from("./vectorworx.toml")];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("vectorworx").join("config.toml"));
        }

        candidates.into_iter().find(|p| p.is_file())
    }
}
