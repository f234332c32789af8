//! Configuration management module.
//!
//! This module handles loading the inspector configuration: the default
//! snapshot to read and the log level.

mod error;

pub use error::ConfigError;

use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/wizard-inspect";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub snapshot_path: Option<PathBuf>,
    pub log_level: String,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings.
    ///
    pub fn new() -> Config {
        Config {
            snapshot_path: None,
            log_level: default_log_level(),
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// otherwise from the default directory. A missing file leaves the
    /// defaults in place.
    ///
    pub fn load(custom_path: Option<&str>) -> Result<Config, ConfigError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(FILE_NAME);

        if !file_path.exists() {
            return Ok(Config::new());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Config::from_yaml_str(&contents)
    }

    /// Parse a configuration from YAML file contents.
    ///
    pub fn from_yaml_str(contents: &str) -> Result<Config, ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        Ok(Config {
            snapshot_path: data.snapshot_path,
            log_level: data.log_level,
        })
    }

    /// Returns the configured level, falling back to `Info` when the value
    /// is not a recognized level name.
    ///
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.parse::<LevelFilter>() {
            Ok(level) => level,
            Err(_) => {
                warn!(
                    "Unrecognized log level '{}', using info instead",
                    self.log_level
                );
                LevelFilter::Info
            }
        }
    }

    /// Returns the snapshot path from arguments if given, otherwise from the
    /// configuration file.
    ///
    pub fn resolve_snapshot_path(&self, argument: Option<&str>) -> Result<PathBuf, ConfigError> {
        match argument {
            Some(path) => Ok(PathBuf::from(path)),
            None => self
                .snapshot_path
                .clone()
                .ok_or(ConfigError::SnapshotPathNotSet),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound),
        }
    }
}
