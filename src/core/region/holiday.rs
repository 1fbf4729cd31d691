//! core::region::holiday
//!
//! Symbolic holiday anchors.
//!
//! Holiday rules in the metadata file reference their anchor either by a
//! number (a month, `1..=12`) or by the name of a floating observance.
//! Named anchors map onto codes above the month range so both forms share
//! one integer space.

use std::fmt;

/// A named floating observance used as a holiday anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HolidayReference {
    Easter = 20,
    OrthodoxEaster = 21,
    VictoriaDay = 22,
    CanadaDay = 23,
}

impl HolidayReference {
    /// Every named anchor.
    pub const ALL: [HolidayReference; 4] = [
        HolidayReference::Easter,
        HolidayReference::OrthodoxEaster,
        HolidayReference::VictoriaDay,
        HolidayReference::CanadaDay,
    ];

    /// Look up an anchor by the name used in the metadata file.
    ///
    /// Names are case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use regionmeta::core::region::HolidayReference;
    ///
    /// assert_eq!(HolidayReference::from_name("easter"), Some(HolidayReference::Easter));
    /// assert_eq!(HolidayReference::from_name("Easter"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Look up an anchor by its integer code.
    ///
    /// Month codes and unassigned codes return `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// The name used for this anchor in the metadata file.
    pub fn name(self) -> &'static str {
        match self {
            HolidayReference::Easter => "easter",
            HolidayReference::OrthodoxEaster => "orthodox easter",
            HolidayReference::VictoriaDay => "victoriaDay",
            HolidayReference::CanadaDay => "canadaDay",
        }
    }

    /// The integer code stored in a [`PublicHoliday`](crate::core::types::PublicHoliday).
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HolidayReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a symbolic anchor name to its code.
///
/// Returns `0` for an unknown name; callers treat any non-positive code as
/// invalid.
pub fn resolve_holiday_reference(name: &str) -> u8 {
    HolidayReference::from_name(name).map_or(0, HolidayReference::code)
}
