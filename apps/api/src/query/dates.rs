//! Converts the model's JSON filter into a BSON document, turning ISO date
//! strings into BSON dates so range comparisons work against date fields.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use mongodb::bson::{self, Bson, Document};
use regex::Regex;
use serde_json::Value;

fn date_patterns() -> &'static [Regex; 2] {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"),
            Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{3})?Z?$").expect("valid regex"),
        ]
    })
}

/// `2025-07-01` or `2025-07-01T00:00:00[.000][Z]`.
pub fn is_date_string(value: &str) -> bool {
    date_patterns().iter().any(|re| re.is_match(value))
}

/// Parses a date string as UTC. Date-only values are midnight.
fn parse_date(value: &str) -> Option<bson::DateTime> {
    let naive = if value.len() == 10 {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
    } else {
        NaiveDateTime::parse_from_str(value.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f").ok()?
    };
    Some(bson::DateTime::from_millis(
        naive.and_utc().timestamp_millis(),
    ))
}

/// JSON → BSON, with date strings as BSON dates.
pub fn to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Bson::Int64(i),
            None => Bson::Double(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => {
            if is_date_string(&s) {
                if let Some(date) = parse_date(&s) {
                    return Bson::DateTime(date);
                }
            }
            Bson::String(s)
        }
        Value::Array(items) => Bson::Array(items.into_iter().map(to_bson).collect()),
        Value::Object(entries) => Bson::Document(
            entries
                .into_iter()
                .map(|(k, v)| (k, to_bson(v)))
                .collect(),
        ),
    }
}

/// Converts a filter object; anything that is not an object matches everything.
pub fn to_bson_filter(filter: Value) -> Document {
    match to_bson(filter) {
        Bson::Document(doc) => doc,
        _ => Document::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_date_string() {
        assert!(is_date_string("2025-07-01"));
        assert!(is_date_string("2025-07-01T00:00:00"));
        assert!(is_date_string("2025-07-01T00:00:00.000Z"));
        assert!(!is_date_string("07/01/2025"));
        assert!(!is_date_string("2025-07-01 00:00:00"));
        assert!(!is_date_string("NAVY"));
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let bson = to_bson(json!("2026-01-01"));
        let expected = bson::DateTime::from_millis(1_767_225_600_000);
        assert_eq!(bson, Bson::DateTime(expected));
    }

    #[test]
    fn test_datetime_with_millis_and_zulu() {
        let bson = to_bson(json!("2026-01-01T12:30:00.250Z"));
        let expected = bson::DateTime::from_millis(1_767_225_600_000 + 45_000_000 + 250);
        assert_eq!(bson, Bson::DateTime(expected));
    }

    #[test]
    fn test_datetime_without_fraction_or_zone() {
        let bson = to_bson(json!("2026-01-01T12:30:00"));
        let expected = bson::DateTime::from_millis(1_767_225_600_000 + 45_000_000);
        assert_eq!(bson, Bson::DateTime(expected));
    }

    #[test]
    fn test_invalid_calendar_date_stays_string() {
        assert_eq!(to_bson(json!("2026-02-30")), Bson::String("2026-02-30".into()));
    }

    #[test]
    fn test_filter_conversion_is_recursive() {
        let doc = to_bson_filter(json!({
            "$and": [
                {"date_signed_award_completion_date": {"$gte": "2026-01-01", "$lte": "2026-06-30"}},
                {"action_obligation_total_obligation_amount": {"$gte": 1000000, "$lte": 5.5e6}},
                {"type_of_set_aside": {"$regex": "8A", "$options": "i"}}
            ]
        }));
        let clauses = doc.get_array("$and").unwrap();

        let dates = clauses[0].as_document().unwrap()
            .get_document("date_signed_award_completion_date").unwrap();
        assert!(matches!(dates.get("$gte"), Some(Bson::DateTime(_))));

        let amounts = clauses[1].as_document().unwrap()
            .get_document("action_obligation_total_obligation_amount").unwrap();
        assert_eq!(amounts.get("$gte"), Some(&Bson::Int64(1_000_000)));
        assert_eq!(amounts.get("$lte"), Some(&Bson::Double(5.5e6)));

        let set_aside = clauses[2].as_document().unwrap()
            .get_document("type_of_set_aside").unwrap();
        assert_eq!(set_aside.get_str("$regex").unwrap(), "8A");
    }

    #[test]
    fn test_non_object_filter_is_empty_document() {
        assert!(to_bson_filter(json!([1, 2])).is_empty());
        assert!(to_bson_filter(Value::Null).is_empty());
    }
}
