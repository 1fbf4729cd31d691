//! storage
//!
//! Resource storage abstraction for the metadata file.
//!
//! # Architecture
//!
//! Resources are read through the [`ResourceReader`] trait, which has
//! two implementations:
//!
//! - [`DirectoryReader`]: Files directly under a data directory (default)
//! - [`MemoryReader`]: In-memory map, for embedding and tests
//!
//! The name of the metadata resource is configuration, passed to the
//! lookup layer alongside the reader; readers know nothing about it.

mod dir_reader;
mod memory;
mod traits;

pub use dir_reader::DirectoryReader;
pub use memory::MemoryReader;
pub use traits::{ResourceReader, StorageError};

pub(crate) use dir_reader::is_bare_file_name;
