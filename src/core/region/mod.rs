//! core::region
//!
//! Region metadata record, entry parsing and name resolution.
//!
//! # Modules
//!
//! - [`data`] - The [`RegionData`] result record
//! - [`holiday`] - Named holiday anchors
//! - [`parser`] - Validation of one region entry
//! - [`resolver`] - Hierarchical name fallback
//!
//! # Example
//!
//! ```
//! use regionmeta::core::document::MetadataDocument;
//! use regionmeta::core::region::{resolve_region, RegionData, RegionError};
//!
//! let doc = MetadataDocument::parse(r#"{
//!     "France": { "languages": ["fr"], "holidays": [["easter", 1]] },
//!     "Canada": { "holidays": [["unknown", 1]] }
//! }"#).unwrap();
//!
//! let mut data = RegionData::new();
//! assert_eq!(resolve_region("France_Normandy", &doc, &mut data).unwrap(), Some("France"));
//! assert_eq!(data.languages(), ["fr"]);
//!
//! let mut data = RegionData::new();
//! let result = resolve_region("Canada_Ontario", &doc, &mut data);
//! assert!(matches!(result, Err(RegionError::Malformed { .. })));
//! ```

pub mod data;
pub mod holiday;
pub mod parser;
pub mod resolver;

pub use data::{RegionData, HOUSENAMES_MARKER};
pub use holiday::{resolve_holiday_reference, HolidayReference};
pub use parser::parse_entry;
pub use resolver::{fallback_chain, resolve_region, FallbackChain};

use thiserror::Error;

use crate::core::document::DocumentError;
use crate::storage::StorageError;

/// Errors from looking up a region.
#[derive(Debug, Error)]
pub enum RegionError {
    /// No name in the fallback chain has an entry.
    #[error("no metadata entry for region '{0}'")]
    NotFound(String),

    /// An entry was found but failed validation.
    #[error("malformed metadata entry for '{country}': {reason}")]
    Malformed { country: String, reason: String },

    /// The metadata resource could not be read.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The metadata resource is not a valid document.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}
