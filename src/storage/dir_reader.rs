//! storage::dir_reader
//!
//! Resources stored as files in a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::traits::{ResourceReader, StorageError};

/// Reads resources as files directly under a root directory.
///
/// Resource names must be bare file names; anything that could escape the
/// root (path separators, `.`, `..`) is rejected.
///
/// # Example
///
/// ```no_run
/// use regionmeta::storage::{DirectoryReader, ResourceReader};
///
/// let reader = DirectoryReader::new("/usr/share/regionmeta");
/// let text = reader.read_to_string("countries_meta.txt")?;
/// # Ok::<(), regionmeta::storage::StorageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryReader {
    root: PathBuf,
}

impl DirectoryReader {
    /// Create a reader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, resource: &str) -> Result<PathBuf, StorageError> {
        if !is_bare_file_name(resource) {
            return Err(StorageError::InvalidName(resource.to_string()));
        }
        Ok(self.root.join(resource))
    }
}

impl ResourceReader for DirectoryReader {
    fn read_to_string(&self, resource: &str) -> Result<String, StorageError> {
        let path = self.path_for(resource)?;
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            _ => StorageError::Read {
                resource: path.display().to_string(),
                source: e,
            },
        })
    }
}

/// True if `name` names a file without any directory component.
pub(crate) fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.chars().any(|c| c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_existing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("meta.json"), "{\"A\":{}}").unwrap();

        let reader = DirectoryReader::new(dir.path());
        assert_eq!(reader.read_to_string("meta.json").unwrap(), "{\"A\":{}}");
        assert!(reader.exists("meta.json").unwrap());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let reader = DirectoryReader::new(dir.path());

        let result = reader.read_to_string("countries_meta.txt");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
        assert!(!reader.exists("countries_meta.txt").unwrap());
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("meta.json"), [0xff, 0xfe, 0x00]).unwrap();

        let reader = DirectoryReader::new(dir.path());
        let result = reader.read_to_string("meta.json");
        assert!(matches!(result, Err(StorageError::Read { .. })));
    }

    #[test]
    fn rejects_paths_outside_root() {
        let reader = DirectoryReader::new("/tmp");
        for name in ["../secret", "a/b", "a\\b", "..", ".", ""] {
            assert!(
                matches!(reader.read_to_string(name), Err(StorageError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
