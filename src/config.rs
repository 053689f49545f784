//! Configuration loaded from `config.toml`.
//!
//! Missing files and missing fields fall back to defaults, so an empty file
//! and no file behave the same. Command-line flags override loaded values
//! through [`Config::apply_cli`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Cli;
use crate::codec::{Endian, NumberBase};

/// Errors from reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("Could not determine the config directory")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

/// Editor start-up settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial number base
    pub base: NumberBase,
    /// Initial byte order for the interpretation panel
    pub endian: Endian,
    /// Start in overwrite mode (insert mode when false)
    pub overwrite: bool,
    /// Start in ASCII edit mode
    pub start_in_ascii: bool,
    /// Fixed bytes per row; 0 fits the terminal width
    pub bytes_per_row: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            base: NumberBase::Hex,
            endian: Endian::Native,
            overwrite: true,
            start_in_ascii: false,
            bytes_per_row: 0,
        }
    }
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Filter directive, e.g. `info` or `hexe::session=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path of the default config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("hexe").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Write to the default config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write as pretty TOML to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |message: String| ConfigError::Write {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| write_err(e.to_string()))?;
        fs::write(path, content).map_err(|e| write_err(e.to_string()))
    }

    /// Override loaded values with flags given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(base) = cli.base {
            self.editor.base = base;
        }
        if let Some(endian) = cli.endian {
            self.editor.endian = endian;
        }
        if cli.insert {
            self.editor.overwrite = false;
        }
        if cli.ascii {
            self.editor.start_in_ascii = true;
        }
        if let Some(bytes_per_row) = cli.bytes_per_row {
            self.editor.bytes_per_row = bytes_per_row;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }
}
