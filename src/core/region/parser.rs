//! core::region::parser
//!
//! Validation of a single region entry.
//!
//! # Recognized fields
//!
//! | field        | type                 | effect                                  |
//! |--------------|----------------------|-----------------------------------------|
//! | `languages`  | array of strings     | set when non-empty                      |
//! | `driving`    | string               | set when exactly `"l"` or `"r"`         |
//! | `timezone`   | string               | set when non-empty                      |
//! | `housenames` | boolean (default no) | marker set when `true`                  |
//! | `holidays`   | array of `[ref, n]`  | each pair validated and appended        |
//!
//! Unknown fields are ignored. A recognized field holding the wrong JSON
//! type, or any malformed holiday, fails the whole entry. A `null` field
//! counts as absent.
//!
//! # Atomicity
//!
//! The entry is validated in full before anything is written to the
//! output record, so a failed parse leaves it untouched.

use serde_json::{Map, Value};

use super::data::{RegionData, HOUSENAMES_MARKER};
use super::holiday::resolve_holiday_reference;
use super::RegionError;
use crate::core::document::json_type_name;
use crate::core::types::{AttributeKey, DrivingSide, PublicHoliday};

/// Parse one region entry into `out`.
///
/// `country_name` is the key the entry was found under; it is carried in
/// any [`RegionError::Malformed`] returned.
///
/// # Example
///
/// ```
/// use regionmeta::core::region::{parse_entry, RegionData};
/// use regionmeta::core::types::AttributeKey;
///
/// let entry = serde_json::json!({
///     "driving": "l",
///     "holidays": [["easter", -2], [5, 10]]
/// });
///
/// let mut data = RegionData::new();
/// parse_entry(&entry, "United Kingdom", &mut data).unwrap();
///
/// assert_eq!(data.get(AttributeKey::Driving), Some("l"));
/// assert_eq!(data.public_holidays()[0].reference(), 20);
/// assert_eq!(data.public_holidays()[1].offset(), 10);
/// ```
pub fn parse_entry(
    entry: &Value,
    country_name: &str,
    out: &mut RegionData,
) -> Result<(), RegionError> {
    let fields = entry.as_object().ok_or_else(|| {
        malformed(
            country_name,
            format!(
                "region entry must be an object, found {}",
                json_type_name(entry)
            ),
        )
    })?;

    let mut staged = RegionData::new();

    if let Some(languages) = optional_string_array(fields, "languages", country_name)? {
        if !languages.is_empty() {
            staged.set_languages(languages);
        }
    }

    if let Some(driving) = optional_str(fields, "driving", country_name)? {
        if let Some(side) = DrivingSide::from_code(driving) {
            staged.set(AttributeKey::Driving, side.code());
        }
    }

    if let Some(timezone) = optional_str(fields, "timezone", country_name)? {
        if !timezone.is_empty() {
            staged.set(AttributeKey::Timezone, timezone);
        }
    }

    if optional_bool(fields, "housenames", country_name)?.unwrap_or(false) {
        staged.set(AttributeKey::AllowHousenames, HOUSENAMES_MARKER);
    }

    // Holiday encoding follows opening_hours.js:
    // https://github.com/opening-hours/opening_hours.js/blob/master/docs/holidays.md
    if let Some(holidays) = optional_array(fields, "holidays", country_name)? {
        for holiday in holidays {
            staged.add_public_holiday(parse_holiday(holiday, country_name)?);
        }
    }

    out.commit(staged);
    Ok(())
}

/// Validate one `[reference, offset]` pair.
fn parse_holiday(holiday: &Value, country_name: &str) -> Result<PublicHoliday, RegionError> {
    let (reference, offset) = match holiday.as_array().map(Vec::as_slice) {
        Some([reference, offset]) => (reference, offset),
        _ => {
            return Err(malformed(
                country_name,
                "holiday must be an array of two elements",
            ))
        }
    };

    let code = match reference {
        Value::String(name) => i64::from(resolve_holiday_reference(name)),
        other => json_integer(other).ok_or_else(|| {
            malformed(
                country_name,
                "holiday month reference should be either a string or an integer",
            )
        })?,
    };
    if code <= 0 {
        return Err(malformed(
            country_name,
            format!("incorrect holiday reference {reference}"),
        ));
    }

    let offset = json_integer(offset).ok_or_else(|| {
        malformed(country_name, "holiday day offset should be an integer")
    })?;

    PublicHoliday::new(code, offset).map_err(|e| malformed(country_name, e.to_string()))
}

/// Integer value of a JSON number. Reals are not integers.
fn json_integer(value: &Value) -> Option<i64> {
    match value {
        // u64 beyond i64 saturates; it is out of range downstream either way
        Value::Number(n) => n.as_i64().or_else(|| n.as_u64().map(|_| i64::MAX)),
        _ => None,
    }
}

fn optional_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn optional_str<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    country_name: &str,
) -> Result<Option<&'a str>, RegionError> {
    optional_field(fields, key)
        .map(|v| {
            v.as_str()
                .ok_or_else(|| wrong_type(country_name, key, "a string", v))
        })
        .transpose()
}

fn optional_bool(
    fields: &Map<String, Value>,
    key: &str,
    country_name: &str,
) -> Result<Option<bool>, RegionError> {
    optional_field(fields, key)
        .map(|v| {
            v.as_bool()
                .ok_or_else(|| wrong_type(country_name, key, "a boolean", v))
        })
        .transpose()
}

fn optional_array<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    country_name: &str,
) -> Result<Option<&'a Vec<Value>>, RegionError> {
    optional_field(fields, key)
        .map(|v| {
            v.as_array()
                .ok_or_else(|| wrong_type(country_name, key, "an array", v))
        })
        .transpose()
}

fn optional_string_array(
    fields: &Map<String, Value>,
    key: &str,
    country_name: &str,
) -> Result<Option<Vec<String>>, RegionError> {
    let Some(items) = optional_array(fields, key, country_name)? else {
        return Ok(None);
    };
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(country_name, key, "an array of strings", item))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn wrong_type(country_name: &str, key: &str, expected: &str, found: &Value) -> RegionError {
    malformed(
        country_name,
        format!(
            "field '{key}' must be {expected}, found {}",
            json_type_name(found)
        ),
    )
}

fn malformed(country_name: &str, reason: impl Into<String>) -> RegionError {
    RegionError::Malformed {
        country: country_name.to_string(),
        reason: reason.into(),
    }
}
