//! regionmeta - Per-region metadata lookup
//!
//! Resolves spoken languages, driving side, timezone, house-naming
//! convention and public-holiday rules for a named administrative region,
//! from a single JSON metadata file keyed by region name.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to lookup)
//! - [`lookup`] - Top-level entry point: load, resolve, report
//! - [`core`] - Domain types, document model, entry parsing, name fallback
//! - [`storage`] - Abstraction over where the metadata file comes from
//!
//! # Lookup Semantics
//!
//! 1. A region name is tried verbatim, then with its last `_`-separated
//!    level removed, repeatedly, until an entry is found
//! 2. The first entry found is final; a malformed entry is an error, not
//!    a reason to try a shorter name
//! 3. An entry is validated in full before anything is written to the result
//!
//! # Example
//!
//! ```
//! use regionmeta::lookup::RegionMetaReader;
//! use regionmeta::storage::MemoryReader;
//! use regionmeta::core::types::DrivingSide;
//!
//! let storage = MemoryReader::new().with_resource(
//!     "countries_meta.txt",
//!     r#"{ "United Kingdom": { "driving": "l", "holidays": [["easter", -2]] } }"#,
//! );
//! let reader = RegionMetaReader::new(storage);
//!
//! let data = reader.read_region_data("United Kingdom_Scotland").unwrap();
//! assert_eq!(data.driving_side(), Some(DrivingSide::Left));
//! assert_eq!(data.public_holidays()[0].offset(), -2);
//! ```

pub mod cli;
pub mod core;
pub mod lookup;
pub mod storage;
