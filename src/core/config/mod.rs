//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (applied with [`Config::with_overrides`])
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$REGIONMETA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/regionmeta/config.toml`
//! 3. `~/.regionmeta/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use regionmeta::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Data dir: {}", config.data_dir().display());
//! println!("Metadata file: {}", config.meta_file());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default name of the metadata resource.
pub const COUNTRIES_META_FILE: &str = "countries_meta.txt";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Resolved configuration.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values from the config file (or overrides)
    pub file: FileConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let file = Self::read_config(path)?;
        file.validate()?;
        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Locate the config file, if any.
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check $REGIONMETA_CONFIG
        if let Ok(path) = std::env::var("REGIONMETA_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/regionmeta/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("regionmeta/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.regionmeta/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".regionmeta/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply overrides (from CLI flags) on top of the loaded values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if an override is invalid.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        meta_file: Option<String>,
    ) -> Result<Self, ConfigError> {
        if data_dir.is_some() {
            self.file.data_dir = data_dir;
        }
        if meta_file.is_some() {
            self.file.meta_file = meta_file;
        }
        self.file.validate()?;
        Ok(self)
    }

    /// Directory holding the metadata file (default: current directory).
    pub fn data_dir(&self) -> PathBuf {
        self.file
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Name of the metadata file (default: [`COUNTRIES_META_FILE`]).
    pub fn meta_file(&self) -> &str {
        self.file.meta_file.as_deref().unwrap_or(COUNTRIES_META_FILE)
    }

    /// Path of the config file that was loaded, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
