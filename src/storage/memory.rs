//! storage::memory
//!
//! In-memory resource reader.
//!
//! Used for embedding metadata directly in a program and for deterministic
//! tests. Reads are recorded so tests can check how often a resource was
//! fetched, and a failure can be injected for a given resource.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use super::traits::{ResourceReader, StorageError};

/// In-memory resource reader.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    inner: Arc<Mutex<MemoryReaderInner>>,
}

#[derive(Debug, Default)]
struct MemoryReaderInner {
    resources: HashMap<String, String>,
    /// Resources that fail with a read error instead of returning content.
    failing: Vec<String>,
    /// Names passed to `read_to_string`, in call order.
    reads: Vec<String>,
}

impl MemoryReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_resource(self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Add or replace a resource.
    pub fn insert(&self, name: impl Into<String>, contents: impl Into<String>) {
        self.lock().resources.insert(name.into(), contents.into());
    }

    /// Make reads of `name` fail with an I/O error.
    pub fn fail_reads_of(&self, name: impl Into<String>) {
        self.lock().failing.push(name.into());
    }

    /// Names read so far, in call order.
    pub fn reads(&self) -> Vec<String> {
        self.lock().reads.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryReaderInner> {
        // A poisoned lock only means another test thread panicked mid-read.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ResourceReader for MemoryReader {
    fn read_to_string(&self, resource: &str) -> Result<String, StorageError> {
        let mut inner = self.lock();
        inner.reads.push(resource.to_string());

        if inner.failing.iter().any(|name| name == resource) {
            return Err(StorageError::Read {
                resource: resource.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "injected read failure"),
            });
        }

        inner
            .resources
            .get(resource)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(resource.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_inserted_resource() {
        let reader = MemoryReader::new().with_resource("a.json", "{}");
        assert_eq!(reader.read_to_string("a.json").unwrap(), "{}");
    }

    #[test]
    fn missing_resource_not_found() {
        let reader = MemoryReader::new();
        assert!(matches!(
            reader.read_to_string("a.json"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn injected_failure() {
        let reader = MemoryReader::new().with_resource("a.json", "{}");
        reader.fail_reads_of("a.json");
        assert!(matches!(
            reader.read_to_string("a.json"),
            Err(StorageError::Read { .. })
        ));
    }

    #[test]
    fn clones_share_state_and_record_reads() {
        let reader = MemoryReader::new();
        let clone = reader.clone();
        clone.insert("a.json", "[]");

        reader.read_to_string("a.json").unwrap();
        let _ = reader.read_to_string("b.json");

        assert_eq!(clone.reads(), vec!["a.json", "b.json"]);
    }
}
