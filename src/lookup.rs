//! lookup
//!
//! Top-level region metadata lookup.
//!
//! [`RegionMetaReader`] ties together a [`ResourceReader`], the name of the
//! metadata resource, document parsing and name resolution.
//!
//! # Two APIs
//!
//! - [`RegionMetaReader::try_read_region_data`] returns a typed
//!   [`RegionError`] that tells a missing region from a malformed one.
//! - [`RegionMetaReader::read_region_data`] logs the failure and returns
//!   `None` for every failure kind. Storage failures are logged as
//!   warnings; malformed documents and entries as errors.
//!
//! # Example
//!
//! ```
//! use regionmeta::lookup::RegionMetaReader;
//! use regionmeta::storage::MemoryReader;
//!
//! let storage = MemoryReader::new().with_resource(
//!     "countries_meta.txt",
//!     r#"{ "Russia": { "languages": ["ru"], "driving": "r" } }"#,
//! );
//! let reader = RegionMetaReader::new(storage);
//!
//! let data = reader.read_region_data("Russia_Moscow").unwrap();
//! assert_eq!(data.languages(), ["ru"]);
//! assert!(reader.read_region_data("France").is_none());
//! ```

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::core::config::{Config, COUNTRIES_META_FILE};
use crate::core::document::MetadataDocument;
use crate::core::region::{resolve_region, RegionData, RegionError};
use crate::storage::{DirectoryReader, ResourceReader};

/// A successful lookup: the data and the entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRegion {
    /// The name that was asked for
    pub requested: String,
    /// The name whose entry was used (the requested name or an ancestor)
    pub matched: String,
    /// The resolved metadata
    pub data: RegionData,
}

/// Reads region metadata from a resource provider.
#[derive(Debug, Clone)]
pub struct RegionMetaReader<R> {
    reader: R,
    meta_file: String,
}

impl RegionMetaReader<DirectoryReader> {
    /// Create a reader for the data directory and file named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_meta_file(DirectoryReader::new(config.data_dir()), config.meta_file())
    }
}

impl<R: ResourceReader> RegionMetaReader<R> {
    /// Create a reader for the default metadata resource,
    /// [`COUNTRIES_META_FILE`].
    pub fn new(reader: R) -> Self {
        Self::with_meta_file(reader, COUNTRIES_META_FILE)
    }

    /// Create a reader for a named metadata resource.
    pub fn with_meta_file(reader: R, meta_file: impl Into<String>) -> Self {
        Self {
            reader,
            meta_file: meta_file.into(),
        }
    }

    /// Name of the metadata resource.
    pub fn meta_file(&self) -> &str {
        &self.meta_file
    }

    /// The underlying resource reader.
    pub fn storage(&self) -> &R {
        &self.reader
    }

    /// Read and parse the metadata resource.
    ///
    /// The returned document is immutable; callers that resolve many
    /// regions may load it once and use [`lookup_in`].
    ///
    /// # Errors
    ///
    /// - [`RegionError::Storage`] if the resource cannot be read
    /// - [`RegionError::Document`] if it is not a valid document
    pub fn load_document(&self) -> Result<MetadataDocument, RegionError> {
        let text = self.reader.read_to_string(&self.meta_file)?;
        Ok(MetadataDocument::parse(&text)?)
    }

    /// Look up `country_name`, reporting which entry was used.
    ///
    /// Reads the metadata resource once per call.
    pub fn lookup(&self, country_name: &str) -> Result<ResolvedRegion, RegionError> {
        let document = self.load_document()?;
        lookup_in(&document, country_name)
    }

    /// Read metadata for `country_name` with a typed error.
    pub fn try_read_region_data(&self, country_name: &str) -> Result<RegionData, RegionError> {
        self.lookup(country_name).map(|resolved| resolved.data)
    }

    /// Read metadata for `country_name`.
    ///
    /// Returns `None` if there is no entry for the name or any ancestor,
    /// or if anything goes wrong; failures are logged.
    pub fn read_region_data(&self, country_name: &str) -> Option<RegionData> {
        match self.try_read_region_data(country_name) {
            Ok(data) => Some(data),
            Err(e) => {
                self.log_failure(country_name, &e);
                None
            }
        }
    }

    fn log_failure(&self, country_name: &str, err: &RegionError) {
        match err {
            RegionError::NotFound(_) => {
                debug!(region = country_name, "no region metadata");
            }
            RegionError::Storage(e) => {
                warn!(resource = %self.meta_file, error = %e, "error reading region metadata");
            }
            RegionError::Document(e) => {
                error!(resource = %self.meta_file, error = %e, "error parsing region metadata");
            }
            RegionError::Malformed { country, reason } => {
                error!(
                    resource = %self.meta_file,
                    region = %country,
                    reason = %reason,
                    "error parsing region metadata"
                );
            }
        }
    }
}

/// Look up `country_name` in an already-loaded document.
///
/// # Errors
///
/// - [`RegionError::NotFound`] if no name in the fallback chain has an entry
/// - [`RegionError::Malformed`] if the entry found fails validation
pub fn lookup_in(
    document: &MetadataDocument,
    country_name: &str,
) -> Result<ResolvedRegion, RegionError> {
    let mut data = RegionData::new();
    match resolve_region(country_name, document, &mut data)? {
        Some(matched) => Ok(ResolvedRegion {
            requested: country_name.to_string(),
            matched: matched.to_string(),
            data,
        }),
        None => Err(RegionError::NotFound(country_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AttributeKey;
    use crate::storage::MemoryReader;

    const META: &str = r#"{
        "Russia": { "languages": ["ru"], "driving": "r", "holidays": [["orthodox easter", 0]] },
        "Russia_Moscow": { "timezone": "Europe/Moscow" },
        "Canada": { "holidays": [["unknown", 1]] }
    }"#;

    fn reader() -> RegionMetaReader<MemoryReader> {
        RegionMetaReader::new(MemoryReader::new().with_resource(COUNTRIES_META_FILE, META))
    }

    #[test]
    fn lookup_reports_matched_entry() {
        let resolved = reader().lookup("Russia_Moscow_Central").unwrap();
        assert_eq!(resolved.requested, "Russia_Moscow_Central");
        assert_eq!(resolved.matched, "Russia_Moscow");
        assert_eq!(resolved.data.get(AttributeKey::Timezone), Some("Europe/Moscow"));
    }

    #[test]
    fn typed_not_found() {
        let result = reader().try_read_region_data("France");
        assert!(matches!(result, Err(RegionError::NotFound(ref name)) if name == "France"));
    }

    #[test]
    fn typed_malformed() {
        let result = reader().try_read_region_data("Canada_Ontario");
        assert!(matches!(result, Err(RegionError::Malformed { .. })));
    }

    #[test]
    fn missing_resource_is_storage_error() {
        let reader = RegionMetaReader::new(MemoryReader::new());
        let result = reader.try_read_region_data("Russia");
        assert!(matches!(result, Err(RegionError::Storage(_))));
        assert!(reader.read_region_data("Russia").is_none());
    }

    #[test]
    fn bad_document_is_document_error() {
        let storage = MemoryReader::new().with_resource(COUNTRIES_META_FILE, "not json");
        let reader = RegionMetaReader::new(storage);
        assert!(matches!(
            reader.try_read_region_data("Russia"),
            Err(RegionError::Document(_))
        ));
        assert!(reader.read_region_data("Russia").is_none());
    }

    #[test]
    fn conflating_api_returns_none_for_every_failure() {
        let reader = reader();
        assert!(reader.read_region_data("France").is_none());
        assert!(reader.read_region_data("Canada").is_none());
        assert!(reader.read_region_data("Russia").is_some());
    }

    #[test]
    fn custom_meta_file() {
        let storage = MemoryReader::new().with_resource("regions.json", META);
        let reader = RegionMetaReader::with_meta_file(storage, "regions.json");
        assert_eq!(reader.meta_file(), "regions.json");
        assert!(reader.read_region_data("Russia").is_some());
    }

    #[test]
    fn document_read_once_per_call() {
        let reader = reader();
        let _ = reader.read_region_data("Russia_Moscow_Central");
        let _ = reader.read_region_data("France_Normandy");
        assert_eq!(reader.storage().reads().len(), 2);
    }

    #[test]
    fn shared_document_across_threads() {
        let document = reader().load_document().unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = ["Russia", "Russia_Moscow", "Russia_Kazan"]
                .into_iter()
                .map(|name| {
                    let document = &document;
                    scope.spawn(move || {
                        lookup_in(document, name).map(|r| r.matched)
                    })
                })
                .collect();

            let matched: Vec<String> = handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect();
            assert_eq!(matched, vec!["Russia", "Russia_Moscow", "Russia"]);
        });
    }

    mod failure_severity {
        use super::*;
        use std::io;
        use std::sync::{Arc, Mutex};

        /// Collects formatted log output.
        #[derive(Clone, Default)]
        struct LogBuffer(Arc<Mutex<Vec<u8>>>);

        impl io::Write for LogBuffer {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        fn logged<R: ResourceReader>(reader: &RegionMetaReader<R>, name: &str) -> String {
            let buffer = LogBuffer::default();
            let writer = buffer.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .finish();

            let result = tracing::subscriber::with_default(subscriber, || {
                reader.read_region_data(name)
            });
            assert!(result.is_none(), "{name} unexpectedly resolved");

            let bytes = buffer.0.lock().unwrap().clone();
            String::from_utf8(bytes).unwrap()
        }

        #[test]
        fn missing_resource_warns() {
            let reader = RegionMetaReader::new(MemoryReader::new());
            let out = logged(&reader, "Russia");
            assert!(out.contains("WARN"), "{out}");
            assert!(!out.contains("ERROR"), "{out}");
            assert!(out.contains("resource=countries_meta.txt"), "{out}");
        }

        #[test]
        fn failed_read_warns() {
            let storage = MemoryReader::new().with_resource(COUNTRIES_META_FILE, META);
            storage.fail_reads_of(COUNTRIES_META_FILE);
            let reader = RegionMetaReader::new(storage);

            assert!(matches!(
                reader.try_read_region_data("Russia"),
                Err(RegionError::Storage(crate::storage::StorageError::Read { .. }))
            ));
            let out = logged(&reader, "Russia");
            assert!(out.contains("WARN"), "{out}");
            assert!(out.contains("injected read failure"), "{out}");
            assert!(!out.contains("ERROR"), "{out}");
        }

        #[test]
        fn malformed_entry_is_error() {
            let out = logged(&reader(), "Canada_Ontario");
            assert!(out.contains("ERROR"), "{out}");
            assert!(out.contains("region=Canada"), "{out}");
            assert!(out.contains("incorrect holiday reference"), "{out}");
            assert!(!out.contains("WARN"), "{out}");
        }

        #[test]
        fn bad_document_is_error() {
            let storage = MemoryReader::new().with_resource(COUNTRIES_META_FILE, "not json");
            let out = logged(&RegionMetaReader::new(storage), "Russia");
            assert!(out.contains("ERROR"), "{out}");
            assert!(out.contains("resource=countries_meta.txt"), "{out}");
            assert!(!out.contains("WARN"), "{out}");
        }

        #[test]
        fn not_found_is_debug_only() {
            let out = logged(&reader(), "France");
            assert!(out.contains("DEBUG"), "{out}");
            assert!(out.contains("no region metadata"), "{out}");
            assert!(!out.contains("WARN"), "{out}");
            assert!(!out.contains("ERROR"), "{out}");
        }
    }
}
