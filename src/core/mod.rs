//! core
//!
//! Core domain types, document model and region resolution.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RegionName, PublicHoliday, AttributeKey
//! - [`document`] - The parsed metadata file
//! - [`region`] - Region record, entry parsing and name fallback
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid holiday rules from being stored
//! - Entry parsing is strict and fails on the first bad field
//! - Resolution is deterministic and never mutates the document

pub mod config;
pub mod document;
pub mod region;
pub mod types;
