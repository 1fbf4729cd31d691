//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the metadata file must be a
//! bare file name inside the data directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::storage::is_bare_file_name;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// data_dir = "/usr/share/regionmeta"
/// meta_file = "countries_meta.txt"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directory holding the metadata file
    pub data_dir: Option<PathBuf>,

    /// Name of the metadata file inside `data_dir`
    pub meta_file: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "data_dir cannot be empty".to_string(),
                ));
            }
        }

        if let Some(file) = &self.meta_file {
            if !is_bare_file_name(file) {
                return Err(ConfigError::InvalidValue(format!(
                    "meta_file '{}' must be a file name without directories",
                    file
                )));
            }
        }

        Ok(())
    }
}
