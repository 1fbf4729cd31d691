//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RegionName`] - Validated hierarchical region name (`Country_Region_City`)
//! - [`AttributeKey`] - Enumerated keys of free-form region attributes
//! - [`DrivingSide`] - Which side of the road traffic keeps to
//! - [`PublicHoliday`] - A holiday rule: anchor reference plus day offset
//!
//! # Validation
//!
//! These types enforce validity at construction time. A holiday with a
//! non-positive reference cannot be represented.
//!
//! # Examples
//!
//! ```
//! use regionmeta::core::types::{PublicHoliday, RegionName};
//!
//! let name = RegionName::new("Russia_Moscow").unwrap();
//! assert_eq!(name.as_str(), "Russia_Moscow");
//!
//! let holiday = PublicHoliday::new(20, -2).unwrap();
//! assert_eq!(holiday.reference(), 20);
//! assert_eq!(holiday.offset(), -2);
//!
//! assert!(RegionName::new("").is_err());
//! assert!(PublicHoliday::new(0, 1).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Separator between the levels of a hierarchical region name.
pub const REGION_SEPARATOR: char = '_';

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid region name: {0}")]
    InvalidRegionName(String),

    #[error("holiday reference {0} is out of range (1..=127)")]
    InvalidHolidayReference(i64),

    #[error("holiday day offset {0} is out of range (-128..=127)")]
    InvalidDayOffset(i64),
}

/// A validated region name.
///
/// Region names are hierarchical, with levels joined by
/// [`REGION_SEPARATOR`], e.g. `Russia_Moscow` or `France_Normandy`.
/// A name must be non-empty and free of control characters.
///
/// # Example
///
/// ```
/// use regionmeta::core::types::RegionName;
///
/// let name: RegionName = "France_Normandy".parse().unwrap();
/// assert_eq!(name.to_string(), "France_Normandy");
/// assert!(RegionName::new("bad\nname").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionName(String);

impl RegionName {
    /// Create a new validated region name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRegionName` if the name is empty or
    /// contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidRegionName(
                "region name cannot be empty".into(),
            ));
        }
        if name.chars().any(|c| c.is_control()) {
            return Err(TypeError::InvalidRegionName(
                "region name cannot contain control characters".into(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the region name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keys of the free-form string attributes attached to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    /// Driving side, `"l"` or `"r"`
    Driving,
    /// IANA timezone name
    Timezone,
    /// Present (as `"y"`) when buildings may carry names instead of numbers
    AllowHousenames,
}

impl AttributeKey {
    /// All attribute keys, in display order.
    pub const ALL: [AttributeKey; 3] = [
        AttributeKey::Driving,
        AttributeKey::Timezone,
        AttributeKey::AllowHousenames,
    ];

    /// Stable lowercase name of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKey::Driving => "driving",
            AttributeKey::Timezone => "timezone",
            AttributeKey::AllowHousenames => "allow_housenames",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the road traffic keeps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivingSide {
    Left,
    Right,
}

impl DrivingSide {
    /// Parse the single-letter code used in the metadata file.
    ///
    /// Only `"l"` and `"r"` are recognized.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "l" => Some(DrivingSide::Left),
            "r" => Some(DrivingSide::Right),
            _ => None,
        }
    }

    /// The single-letter code for this side.
    pub fn code(self) -> &'static str {
        match self {
            DrivingSide::Left => "l",
            DrivingSide::Right => "r",
        }
    }
}

/// A public holiday rule.
///
/// `reference` identifies the anchor date: `1..=12` are months in the
/// region's own calendar encoding, larger values are named floating
/// observances (see [`HolidayReference`](crate::core::region::HolidayReference)).
/// `offset` is a signed day count applied to the anchor.
///
/// Both values are kept to signed 8-bit range, matching the compact
/// binary encoding consumers read them from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PublicHoliday {
    reference: u8,
    offset: i8,
}

impl PublicHoliday {
    /// Create a validated holiday rule.
    ///
    /// # Errors
    ///
    /// - `TypeError::InvalidHolidayReference` if `reference` is not in `1..=127`
    /// - `TypeError::InvalidDayOffset` if `offset` does not fit in `i8`
    pub fn new(reference: i64, offset: i64) -> Result<Self, TypeError> {
        let reference = i8::try_from(reference)
            .ok()
            .filter(|r| *r > 0)
            .ok_or(TypeError::InvalidHolidayReference(reference))?;
        let offset = i8::try_from(offset).map_err(|_| TypeError::InvalidDayOffset(offset))?;
        Ok(Self {
            reference: reference as u8,
            offset,
        })
    }

    /// The anchor reference code (always positive).
    pub fn reference(&self) -> u8 {
        self.reference
    }

    /// The signed day offset from the anchor.
    pub fn offset(&self) -> i8 {
        self.offset
    }
}
