//! core::region::resolver
//!
//! Hierarchical fallback from a region name to the nearest ancestor entry.
//!
//! `Russia_Moscow_Central` is looked up as-is first, then as
//! `Russia_Moscow`, then as `Russia`. The first name with an entry wins.
//! A malformed entry at any step is final: lookup does not continue to a
//! shorter name.

use tracing::debug;

use super::data::RegionData;
use super::parser::parse_entry;
use super::RegionError;
use crate::core::document::MetadataDocument;
use crate::core::types::REGION_SEPARATOR;

/// Candidate names tried when resolving a region, most specific first.
///
/// Each step cuts the name at the last separator left of the previous cut,
/// so the sequence is strictly decreasing in length and every prefix is
/// visited once.
///
/// # Example
///
/// ```
/// use regionmeta::core::region::fallback_chain;
///
/// let chain: Vec<_> = fallback_chain("Russia_Moscow_Central").collect();
/// assert_eq!(chain, vec!["Russia_Moscow_Central", "Russia_Moscow", "Russia"]);
/// ```
pub fn fallback_chain(name: &str) -> FallbackChain<'_> {
    FallbackChain { next: Some(name) }
}

/// Iterator returned by [`fallback_chain`].
#[derive(Debug, Clone)]
pub struct FallbackChain<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for FallbackChain<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next.take()?;
        self.next = current
            .rfind(REGION_SEPARATOR)
            .map(|cut| &current[..cut]);
        Some(current)
    }
}

/// Resolve `country_name` against `document`, filling `out`.
///
/// Returns the name whose entry was used, or `None` if no candidate in the
/// [`fallback_chain`] has an entry.
///
/// # Errors
///
/// Returns [`RegionError::Malformed`] if the first entry found fails
/// validation. `out` is left untouched in that case.
///
/// # Example
///
/// ```
/// use regionmeta::core::document::MetadataDocument;
/// use regionmeta::core::region::{resolve_region, RegionData};
///
/// let doc = MetadataDocument::parse(r#"{ "Russia": { "driving": "r" } }"#).unwrap();
/// let mut data = RegionData::new();
///
/// let matched = resolve_region("Russia_Moscow", &doc, &mut data).unwrap();
/// assert_eq!(matched, Some("Russia"));
/// ```
pub fn resolve_region<'n>(
    country_name: &'n str,
    document: &MetadataDocument,
    out: &mut RegionData,
) -> Result<Option<&'n str>, RegionError> {
    for candidate in fallback_chain(country_name) {
        let Some(entry) = document.entry(candidate) else {
            continue;
        };

        debug!(region = country_name, matched = candidate, "found metadata entry");
        parse_entry(entry, candidate, out)?;
        return Ok(Some(candidate));
    }

    debug!(region = country_name, "no metadata entry in fallback chain");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AttributeKey;

    mod chain {
        use super::*;

        #[test]
        fn unseparated_name_is_single_step() {
            assert_eq!(fallback_chain("France").collect::<Vec<_>>(), vec!["France"]);
        }

        #[test]
        fn three_levels() {
            assert_eq!(
                fallback_chain("Russia_Moscow_Central").collect::<Vec<_>>(),
                vec!["Russia_Moscow_Central", "Russia_Moscow", "Russia"]
            );
        }

        #[test]
        fn consecutive_separators_each_tried_once() {
            assert_eq!(
                fallback_chain("A__B").collect::<Vec<_>>(),
                vec!["A__B", "A_", "A"]
            );
        }

        #[test]
        fn leading_separator_ends_with_empty_prefix() {
            assert_eq!(fallback_chain("_A").collect::<Vec<_>>(), vec!["_A", ""]);
        }

        #[test]
        fn multibyte_names() {
            assert_eq!(
                fallback_chain("Česko_Praha").collect::<Vec<_>>(),
                vec!["Česko_Praha", "Česko"]
            );
        }
    }

    mod resolve {
        use super::*;

        fn doc(json: &str) -> MetadataDocument {
            MetadataDocument::parse(json).unwrap()
        }

        #[test]
        fn exact_match() {
            let doc = doc(r#"{ "Russia_Moscow": { "timezone": "Europe/Moscow" }, "Russia": {} }"#);
            let mut data = RegionData::new();

            let matched = resolve_region("Russia_Moscow", &doc, &mut data).unwrap();
            assert_eq!(matched, Some("Russia_Moscow"));
            assert_eq!(data.get(AttributeKey::Timezone), Some("Europe/Moscow"));
        }

        #[test]
        fn falls_back_to_nearest_ancestor() {
            let doc = doc(
                r#"{
                    "Russia": { "driving": "r" },
                    "Russia_Moscow": { "timezone": "Europe/Moscow" }
                }"#,
            );
            let mut data = RegionData::new();

            let matched = resolve_region("Russia_Moscow_Central", &doc, &mut data).unwrap();
            assert_eq!(matched, Some("Russia_Moscow"));
            // Only the nearest entry is applied, not its ancestors.
            assert!(!data.has(AttributeKey::Driving));
        }

        #[test]
        fn not_found_when_chain_exhausted() {
            let doc = doc(r#"{ "France": {} }"#);
            let mut data = RegionData::new();

            let matched = resolve_region("Spain_Catalonia", &doc, &mut data).unwrap();
            assert_eq!(matched, None);
            assert!(data.is_empty());
        }

        #[test]
        fn malformed_exact_match_does_not_fall_back() {
            let doc = doc(
                r#"{
                    "France": { "driving": "r" },
                    "France_Normandy": { "holidays": [["easter", 1, 2]] }
                }"#,
            );
            let mut data = RegionData::new();

            let result = resolve_region("France_Normandy", &doc, &mut data);
            match result {
                Err(RegionError::Malformed { country, .. }) => {
                    assert_eq!(country, "France_Normandy");
                }
                other => panic!("expected malformed entry, got {:?}", other),
            }
            assert!(data.is_empty());
        }

        #[test]
        fn malformed_ancestor_reports_ancestor_name() {
            let doc = doc(r#"{ "France": { "holidays": [[-1, 1]] } }"#);
            let mut data = RegionData::new();

            let result = resolve_region("France_Normandy", &doc, &mut data);
            assert!(matches!(
                result,
                Err(RegionError::Malformed { ref country, .. }) if country == "France"
            ));
        }

        #[test]
        fn null_entry_falls_through() {
            let doc = doc(r#"{ "France_Normandy": null, "France": { "driving": "r" } }"#);
            let mut data = RegionData::new();

            let matched = resolve_region("France_Normandy", &doc, &mut data).unwrap();
            assert_eq!(matched, Some("France"));
        }
    }
}
