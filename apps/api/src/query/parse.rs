//! Turns the model's filter reply into a `FilterSpec`.
//!
//! The model writes mongo-shell flavoured JSON (`ISODate(..)`, bare `$op:`
//! keys, fenced blocks). `clean_model_reply` rewrites that into plain JSON
//! before parsing. Parse failures degrade to an empty filter.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::llm_client::strip_json_fences;

/// Structured query produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSpec {
    pub filter: Value,
    /// `None` when the reply had no usable sort, `Some(None)` for an explicit
    /// `"sort": null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Option<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            filter: empty_object(),
            sort: None,
            limit: None,
            explanation: None,
        }
    }
}

impl FilterSpec {
    /// Match-everything filter carrying a reason for the fallback.
    pub fn empty(explanation: &str) -> Self {
        Self {
            explanation: Some(explanation.to_string()),
            ..Self::default()
        }
    }
}

struct CleanupPatterns {
    fence_open: Regex,
    fence_close: Regex,
    iso_date_quoted: Regex,
    iso_date_bare: Regex,
    object_id: Regex,
    bare_operator: Regex,
    double_quoted: Regex,
    regex_value: Regex,
    fenced_object: Regex,
}

fn patterns() -> &'static CleanupPatterns {
    static PATTERNS: OnceLock<CleanupPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CleanupPatterns {
        fence_open: Regex::new(r"```(?:json)?\s*").expect("valid regex"),
        fence_close: Regex::new(r"\s*```").expect("valid regex"),
        iso_date_quoted: Regex::new(r#"ISODate\(['"]([^'"]+)['"]\)"#).expect("valid regex"),
        iso_date_bare: Regex::new(r"ISODate\(([^)]+)\)").expect("valid regex"),
        object_id: Regex::new(r#"ObjectId\(['"]([^'"]+)['"]\)"#).expect("valid regex"),
        bare_operator: Regex::new(r"(\$[a-zA-Z]+):\s*").expect("valid regex"),
        double_quoted: Regex::new(r#"""([^"]+)"""#).expect("valid regex"),
        regex_value: Regex::new(r#""\$regex":\s*"([^"]+)""#).expect("valid regex"),
        fenced_object: Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid regex"),
    })
}

/// Rewrites mongo-shell syntax in `reply` into parseable JSON.
///
/// Regex patterns are upper-cased; stored FPDS text is upper-case.
pub fn clean_model_reply(reply: &str) -> String {
    let p = patterns();

    let cleaned = p.fence_open.replace_all(reply, "");
    let cleaned = p.fence_close.replace_all(&cleaned, "");
    let cleaned = p.iso_date_quoted.replace_all(&cleaned, "\"${1}\"");
    let cleaned = p.iso_date_bare.replace_all(&cleaned, "\"${1}\"");
    let cleaned = p.object_id.replace_all(&cleaned, "\"${1}\"");
    let cleaned = p.bare_operator.replace_all(&cleaned, "\"${1}\": ");
    let cleaned = p.double_quoted.replace_all(&cleaned, "\"${1}\"");
    let cleaned = p.regex_value.replace_all(&cleaned, |caps: &Captures| {
        format!("\"$regex\": \"{}\"", caps[1].to_uppercase())
    });

    debug!("Original reply: {reply}");
    debug!("Cleaned reply: {cleaned}");

    cleaned.into_owned()
}

/// Parses the model's reply, falling back to an empty filter on any failure.
pub fn parse_filter_reply(reply: &str) -> FilterSpec {
    let cleaned = clean_model_reply(strip_json_fences(reply));

    let json_text = patterns()
        .fenced_object
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(&cleaned);

    let value: Value = match serde_json::from_str(json_text) {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to parse LLM filter response: {e}");
            error!("Response: {reply}");
            return FilterSpec::empty("Failed to parse response");
        }
    };

    let Value::Object(mut members) = value else {
        warn!("Invalid filter response from LLM");
        return FilterSpec::empty("Failed to parse LLM response");
    };
    let Some(filter) = members.remove("filter") else {
        warn!("Invalid filter response from LLM");
        return FilterSpec::empty("Failed to parse LLM response");
    };

    FilterSpec {
        filter,
        sort: members.remove("sort").and_then(sort_member),
        limit: members.remove("limit").and_then(limit_member),
        explanation: members.remove("explanation").and_then(explanation_member),
    }
}

/// A malformed member is dropped on its own; the filter is always kept.
fn sort_member(value: Value) -> Option<Option<Map<String, Value>>> {
    match value {
        Value::Null => Some(None),
        Value::Object(sort) => Some(Some(sort)),
        other => {
            warn!("Ignoring non-object sort in filter response: {other}");
            None
        }
    }
}

/// Integral floats such as `100.0` are accepted.
fn limit_member(value: Value) -> Option<i64> {
    let limit = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    });
    if limit.is_none() && !value.is_null() {
        warn!("Ignoring non-integer limit in filter response: {value}");
    }
    limit
}

fn explanation_member(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => {
            warn!("Ignoring non-string explanation in filter response: {other}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_rewrites_iso_dates() {
        let cleaned = clean_model_reply(r#"{"d": {"$gte": ISODate('2026-01-01'), "$lte": ISODate("2026-06-30")}}"#);
        assert_eq!(cleaned, r#"{"d": {"$gte": "2026-01-01", "$lte": "2026-06-30"}}"#);
    }

    #[test]
    fn test_clean_collapses_quoted_iso_date() {
        let cleaned = clean_model_reply(r#"{"d": {"$gte": "ISODate('2024-01-01')"}}"#);
        assert_eq!(cleaned, r#"{"d": {"$gte": "2024-01-01"}}"#);
    }

    #[test]
    fn test_clean_rewrites_object_id() {
        let cleaned = clean_model_reply(r#"{"_id": ObjectId("65a1f0c2e4b0a1b2c3d4e5f6")}"#);
        assert_eq!(cleaned, r#"{"_id": "65a1f0c2e4b0a1b2c3d4e5f6"}"#);
    }

    #[test]
    fn test_clean_quotes_bare_operators() {
        let cleaned = clean_model_reply(r#"{$or: [{"a": {$gt: 5}}]}"#);
        assert_eq!(cleaned, r#"{"$or": [{"a": {"$gt": 5}}]}"#);
    }

    #[test]
    fn test_clean_uppercases_regex_values() {
        let cleaned = clean_model_reply(r#"{"nature_of_services": {"$regex": "Cyber", "$options": "i"}}"#);
        assert_eq!(cleaned, r#"{"nature_of_services": {"$regex": "CYBER", "$options": "i"}}"#);
    }

    #[test]
    fn test_parse_fenced_reply() {
        let reply = "```json\n{\"filter\": {\"type_of_set_aside\": {\"$regex\": \"8a\", \"$options\": \"i\"}}, \"limit\": 50, \"explanation\": \"8(a) awards\"}\n```";
        let spec = parse_filter_reply(reply);
        assert_eq!(spec.filter, json!({"type_of_set_aside": {"$regex": "8A", "$options": "i"}}));
        assert_eq!(spec.limit, Some(50));
        assert_eq!(spec.explanation.as_deref(), Some("8(a) awards"));
        assert!(spec.sort.is_none());
    }

    #[test]
    fn test_parse_reply_with_sort_and_dates() {
        let reply = r#"{
            "filter": {"date_signed_award_completion_date": {"$gte": ISODate('2026-01-01')}},
            "sort": {"date_signed_award_completion_date": 1},
            "limit": 100
        }"#;
        let spec = parse_filter_reply(reply);
        assert_eq!(spec.filter["date_signed_award_completion_date"]["$gte"], "2026-01-01");
        assert_eq!(spec.sort.unwrap().unwrap()["date_signed_award_completion_date"], 1);
    }

    #[test]
    fn test_parse_malformed_reply_degrades_to_empty_filter() {
        let spec = parse_filter_reply("Sorry, I can't help with that.");
        assert_eq!(spec, FilterSpec::empty("Failed to parse response"));
        assert_eq!(spec.filter, json!({}));
    }

    #[test]
    fn test_parse_reply_without_filter_key() {
        let spec = parse_filter_reply(r#"{"query": {"a": 1}}"#);
        assert_eq!(spec, FilterSpec::empty("Failed to parse LLM response"));
    }

    #[test]
    fn test_list_shaped_sort_keeps_filter() {
        let reply = r#"{
            "filter": {"type_of_set_aside": {"$regex": "8A", "$options": "i"}},
            "sort": [["date_signed_date_signed", -1]],
            "limit": 50
        }"#;
        let spec = parse_filter_reply(reply);
        assert_eq!(spec.filter, json!({"type_of_set_aside": {"$regex": "8A", "$options": "i"}}));
        assert!(spec.sort.is_none());
        assert_eq!(spec.limit, Some(50));
        assert!(spec.explanation.is_none());
    }

    #[test]
    fn test_float_limit_is_accepted() {
        let spec = parse_filter_reply(r#"{"filter": {"nature_of_services": {"$regex": "CYBER"}}, "limit": 100.0}"#);
        assert_eq!(spec.filter, json!({"nature_of_services": {"$regex": "CYBER"}}));
        assert_eq!(spec.limit, Some(100));
    }

    #[test]
    fn test_bad_limit_and_explanation_dropped_individually() {
        let spec = parse_filter_reply(r#"{"filter": {"a": 1}, "limit": "lots", "explanation": 7}"#);
        assert_eq!(spec.filter, json!({"a": 1}));
        assert!(spec.limit.is_none());
        assert!(spec.explanation.is_none());
    }

    #[test]
    fn test_null_sort_is_explicit() {
        let spec = parse_filter_reply(r#"{"filter": {}, "sort": null}"#);
        assert_eq!(spec.sort, Some(None));
    }
}
