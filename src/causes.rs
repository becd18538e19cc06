//! Causal tag vocabulary and lenient decoding
//!
//! The causes column reaches the engine in whatever state persistence has
//! kept it: a structured list, a serialized JSON text blob, or garbage from
//! older clients. Decoding is deliberately forgiving; malformed data is a
//! data-quality event, not an error, and is discarded silently.

use crate::types::RawCauses;

/// Causal tags accepted on check-ins
pub const CHECKIN_CAUSES: [&str; 6] = [
    "WORKLOAD",
    "RELATIONS",
    "MOTIVATION",
    "CLARITY",
    "RECOGNITION",
    "BALANCE",
];

/// Categories accepted on feedback entries. A distinct vocabulary from
/// check-in causes, kept here for the collaborator layer that validates
/// feedback submissions.
pub const FEEDBACK_CATEGORIES: [&str; 7] = [
    "WORKLOAD",
    "RELATIONS",
    "MOTIVATION",
    "ORGANIZATION",
    "RECOGNITION",
    "WORK_LIFE_BALANCE",
    "FACILITIES",
];

/// Decode a persisted causes value into a flat tag list.
///
/// Absent input, a decode failure, or a decoded value that is not a list all
/// yield an empty list. Vocabulary filtering is a separate concern; see
/// [`is_known_cause`].
pub fn parse_causes(raw: Option<&RawCauses>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(RawCauses::List(causes)) => causes.clone(),
        Some(RawCauses::Text(text)) => match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(cause) => Some(cause),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        },
    }
}

/// Whether a tag belongs to the check-in cause vocabulary.
pub fn is_known_cause(cause: &str) -> bool {
    CHECKIN_CAUSES.contains(&cause)
}

/// Whether a category belongs to the feedback vocabulary.
pub fn is_known_category(category: &str) -> bool {
    FEEDBACK_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_absent_and_malformed() {
        assert_eq!(parse_causes(None), Vec::<String>::new());
        assert_eq!(
            parse_causes(Some(&RawCauses::Text("invalid-json".into()))),
            Vec::<String>::new()
        );
        assert_eq!(
            parse_causes(Some(&RawCauses::Text("".into()))),
            Vec::<String>::new()
        );
        // valid JSON but not a list
        assert_eq!(
            parse_causes(Some(&RawCauses::Text(r#"{"cause":"WORKLOAD"}"#.into()))),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_parse_serialized_list() {
        let parsed = parse_causes(Some(&RawCauses::Text(r#"["WORKLOAD","UNKNOWN"]"#.into())));
        assert_eq!(parsed, vec!["WORKLOAD".to_string(), "UNKNOWN".to_string()]);

        let known: Vec<String> = parsed.into_iter().filter(|c| is_known_cause(c)).collect();
        assert_eq!(known, vec!["WORKLOAD".to_string()]);
    }

    #[test]
    fn test_parse_structured_list_passes_through() {
        let raw = RawCauses::List(vec!["BALANCE".into(), "CLARITY".into()]);
        assert_eq!(
            parse_causes(Some(&raw)),
            vec!["BALANCE".to_string(), "CLARITY".to_string()]
        );
    }

    #[test]
    fn test_parse_drops_non_string_items() {
        let parsed = parse_causes(Some(&RawCauses::Text(r#"["WORKLOAD", 3, null]"#.into())));
        assert_eq!(parsed, vec!["WORKLOAD".to_string()]);
    }

    #[test]
    fn test_vocabularies_are_distinct() {
        assert!(is_known_cause("CLARITY"));
        assert!(!is_known_category("CLARITY"));
        assert!(is_known_category("WORK_LIFE_BALANCE"));
        assert!(!is_known_cause("WORK_LIFE_BALANCE"));
        assert_eq!(CHECKIN_CAUSES.len(), 6);
        assert_eq!(FEEDBACK_CATEGORIES.len(), 7);
    }
}
