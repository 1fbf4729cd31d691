//! storage::traits
//!
//! Resource reader trait definition.
//!
//! # Design
//!
//! The `ResourceReader` trait is the only way the lookup pipeline touches
//! storage. A resource is identified by a bare name (for example
//! `countries_meta.txt`) and is read fully into memory as text.

use thiserror::Error;

/// Errors from reading a resource.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No resource with the given name.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The resource name is not acceptable to this reader.
    #[error("invalid resource name '{0}'")]
    InvalidName(String),

    /// The resource exists but could not be read.
    #[error("failed to read resource '{resource}': {source}")]
    Read {
        resource: String,
        source: std::io::Error,
    },
}

/// Trait for resource providers.
///
/// Implementations must be thread-safe (Send + Sync).
///
/// # Example
///
/// ```
/// use regionmeta::storage::{MemoryReader, ResourceReader};
///
/// let reader = MemoryReader::new().with_resource("countries_meta.txt", "{}");
///
/// assert_eq!(reader.read_to_string("countries_meta.txt").unwrap(), "{}");
/// assert!(!reader.exists("other.txt").unwrap());
/// ```
pub trait ResourceReader: Send + Sync {
    /// Read a resource fully as UTF-8 text.
    ///
    /// Returns `Err(StorageError::NotFound)` if the resource does not exist.
    fn read_to_string(&self, resource: &str) -> Result<String, StorageError>;

    /// Check if a resource exists.
    ///
    /// Default implementation uses `read_to_string()`.
    fn exists(&self, resource: &str) -> Result<bool, StorageError> {
        match self.read_to_string(resource) {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
