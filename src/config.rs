//! Optional TOML configuration.
//!
//! Looked up at `<config dir>/geoquiz/config.toml` unless a path is given
//! explicitly. Command-line flags override anything set here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants;
use crate::error::ConfigError;

/// User configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Invalid answers tolerated per question before the run aborts.
    pub max_retries: Option<u32>,
    /// Question file to use instead of the built-in set.
    pub questions: Option<PathBuf>,
}

impl Config {
    /// Parse config content. A relative `questions` path is resolved against
    /// the directory holding `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(questions), Some(dir)) = (config.questions.as_mut(), path.parent()) {
            if questions.is_relative() {
                *questions = dir.join(&*questions);
            }
        }
        Ok(config)
    }

    /// Load a config file that must exist.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Load the explicit file if given, otherwise the default location.
    /// A missing default file yields the default config.
    ///
    /// # Errors
    ///
    /// Fails if an existing or explicitly named file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Default config file location, if the platform has a config directory.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}
