//! core::region::data
//!
//! The resolved metadata record for one region.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::types::{AttributeKey, DrivingSide, PublicHoliday};

/// Marker stored under [`AttributeKey::AllowHousenames`].
pub const HOUSENAMES_MARKER: &str = "y";

/// Metadata resolved for a region.
///
/// Built empty by the caller and filled in by
/// [`resolve_region`](super::resolve_region). Every field is optional;
/// an entry in the metadata file may carry any subset.
///
/// # Example
///
/// ```
/// use regionmeta::core::region::RegionData;
/// use regionmeta::core::types::{AttributeKey, PublicHoliday};
///
/// let mut data = RegionData::default();
/// data.set(AttributeKey::Timezone, "Europe/Paris");
/// data.add_public_holiday(PublicHoliday::new(20, 1).unwrap());
///
/// assert_eq!(data.get(AttributeKey::Timezone), Some("Europe/Paris"));
/// assert_eq!(data.public_holidays().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionData {
    languages: Vec<String>,
    attributes: BTreeMap<AttributeKey, String>,
    public_holidays: Vec<PublicHoliday>,
}

impl RegionData {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spoken language codes, in source order. Empty when unset.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Replace the language list.
    pub fn set_languages(&mut self, languages: Vec<String>) {
        self.languages = languages;
    }

    /// Set a string attribute.
    pub fn set(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.attributes.insert(key, value.into());
    }

    /// Get a string attribute.
    pub fn get(&self, key: AttributeKey) -> Option<&str> {
        self.attributes.get(&key).map(String::as_str)
    }

    /// Check whether an attribute is set.
    pub fn has(&self, key: AttributeKey) -> bool {
        self.attributes.contains_key(&key)
    }

    /// Iterate over the set attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        self.attributes.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Append a holiday rule.
    pub fn add_public_holiday(&mut self, holiday: PublicHoliday) {
        self.public_holidays.push(holiday);
    }

    /// Holiday rules, in source order.
    pub fn public_holidays(&self) -> &[PublicHoliday] {
        &self.public_holidays
    }

    /// Typed view of the driving attribute.
    pub fn driving_side(&self) -> Option<DrivingSide> {
        self.get(AttributeKey::Driving)
            .and_then(DrivingSide::from_code)
    }

    /// Whether buildings in the region may be identified by name.
    pub fn allows_housenames(&self) -> bool {
        self.get(AttributeKey::AllowHousenames) == Some(HOUSENAMES_MARKER)
    }

    /// True when nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.attributes.is_empty() && self.public_holidays.is_empty()
    }

    /// Move everything set in `staged` into `self`.
    ///
    /// Languages are replaced only when `staged` has some; attributes are
    /// overwritten key by key; holidays are appended.
    pub(crate) fn commit(&mut self, staged: RegionData) {
        if !staged.languages.is_empty() {
            self.languages = staged.languages;
        }
        self.attributes.extend(staged.attributes);
        self.public_holidays.extend(staged.public_holidays);
    }
}
