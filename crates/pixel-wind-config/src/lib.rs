//! Configuration file handling for pixel-wind.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing file means defaults, written out on first run so there is a
//! file to edit; a file that exists but cannot be read or parsed is an
//! error so a typo is not silently ignored.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Frame rate bounds accepted from the file.
const MIN_FRAME_RATE: u32 = 1;
const MAX_FRAME_RATE: u32 = 120;

/// Errors while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation ticks per second.
    pub frame_rate: u32,
    /// Base URL sealed letters are appended to.
    pub link_base: String,
    /// Show the key help line at the bottom of the screen.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            link_base: "https://pixel-wind.example/".to_string(),
            show_help: true,
        }
    }
}

impl Config {
    /// Platform project directories for pixel-wind.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "pixel-wind")
    }

    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, writing defaults there if absent.
    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::default_path()?)
    }

    /// Load from `path`, first saving the defaults if no file exists.
    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }
        Self::load_from(path)
    }

    /// Load from a specific file, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.normalized())
    }

    /// Save to a specific file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_err)
    }

    /// Clamp values into their supported ranges.
    fn normalized(mut self) -> Self {
        self.frame_rate = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        if self.link_base.trim().is_empty() {
            self.link_base = Self::default().link_base;
        }
        self
    }
}
