//! core::document
//!
//! The parsed metadata file.
//!
//! # Format
//!
//! The metadata file is a single JSON object keyed by region name. Each
//! value is the entry for that region:
//!
//! ```json
//! {
//!     "Russia": { "languages": ["ru"], "driving": "r" },
//!     "Russia_Moscow": { "timezone": "Europe/Moscow" }
//! }
//! ```
//!
//! A [`MetadataDocument`] is immutable once parsed and can be shared
//! between threads; each lookup writes into its own output record.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors from parsing the metadata file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse metadata JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("metadata root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Metadata entries keyed by region name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocument {
    entries: Map<String, Value>,
}

impl MetadataDocument {
    /// Parse the text of a metadata file.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::Parse`] if the text is not valid JSON
    /// - [`DocumentError::NotAnObject`] if the root is not an object
    ///
    /// # Example
    ///
    /// ```
    /// use regionmeta::core::document::MetadataDocument;
    ///
    /// let doc = MetadataDocument::parse(r#"{ "France": { "driving": "r" } }"#).unwrap();
    /// assert!(doc.contains("France"));
    /// assert!(!doc.contains("Spain"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(root)
    }

    /// Build a document from an already-parsed JSON value.
    pub fn from_value(root: Value) -> Result<Self, DocumentError> {
        match root {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(DocumentError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Get the entry for an exact region name.
    ///
    /// A `null` entry counts as absent.
    pub fn entry(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).filter(|v| !v.is_null())
    }

    /// Check whether an entry exists for an exact region name.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }
}

/// Human-readable JSON type of a value, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a real number",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
