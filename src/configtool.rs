//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-30
// Version : 0.1.8
// License : Mulan PSL v2
//
// Config Tools

use std::{env, fs, path::{Path, PathBuf}};

use dirs::config_dir;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::CharacterClassSelection;

pub const CONFIG_ENV: &str = "RPWGEN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error")]
    IoError(#[from] std::io::Error),
    #[error("JSON error")]
    JsonError(#[from] serde_json::Error),
    #[error("Config directory error: {0}")]
    ConfigDirError(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Defaults the shell applies before calling the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub selection: CharacterClassSelection,
    pub clipboard_clear_secs: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            default_length: 16,
            min_length: 4,
            max_length: 32,
            selection: CharacterClassSelection::default(),
            clipboard_clear_secs: 30,
        }
    }
}

impl GenConfig {
    /// Reads the config at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let file = fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::Invalid("min_length must be at least 1".to_string()));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::Invalid(format!(
                "min_length {} is greater than max_length {}",
                self.min_length, self.max_length
            )));
        }
        self.check_length(self.default_length)
    }

    pub fn check_length(&self, length: usize) -> Result<(), ConfigError> {
        if length < self.min_length || length > self.max_length {
            return Err(ConfigError::Invalid(format!(
                "length {} is outside {}..={}",
                length, self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpwgen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

/// `RPWGEN_CONFIG` if set, otherwise `<config_dir>/rpwgen/config.json`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(get_config_dir()?.join("config.json"))
}
