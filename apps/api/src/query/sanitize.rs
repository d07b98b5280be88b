//! Set-aside sanitizer.
//!
//! Set-aside conditions may only reference the four set-aside fields listed
//! in `intent::set_aside_search_fields`. Any other `*set_aside*` key, and the
//! business-size selection field, is removed wherever it appears in the
//! filter tree. Logical groups left empty by a removal are dropped.

use serde_json::{Map, Value};

use crate::query::intent::set_aside_search_fields;
use crate::query::parse::FilterSpec;

const DISALLOWED_FIELDS: &[&str] = &["contracting_officers_business_size_selection"];

const LOGICAL_OPERATORS: &[&str] = &["$and", "$or", "$nor"];

/// True if `key` must never appear in a filter.
pub fn is_disallowed_field(key: &str) -> bool {
    DISALLOWED_FIELDS.contains(&key)
        || (key.contains("set_aside") && !set_aside_search_fields().contains(&key))
}

/// Sanitizes `spec.filter` in place. An empty result becomes `{}`.
pub fn sanitize_set_aside_filters(mut spec: FilterSpec) -> FilterSpec {
    if spec.filter.is_object() || spec.filter.is_array() {
        let sanitized = sanitize_node(std::mem::take(&mut spec.filter));
        spec.filter = if is_falsy(&sanitized) {
            Value::Object(Map::new())
        } else {
            sanitized
        };
    }
    spec
}

fn sanitize_node(node: Value) -> Value {
    match node {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(sanitize_node)
                .filter(|item| !is_empty_node(item))
                .collect(),
        ),
        Value::Object(entries) => {
            let mut sanitized = Map::new();
            for (key, value) in entries {
                if LOGICAL_OPERATORS.contains(&key.as_str()) {
                    let value = sanitize_node(value);
                    // an empty $or/$nor would match nothing, an empty $and is a no-op
                    if !is_falsy(&value) {
                        sanitized.insert(key, value);
                    }
                    continue;
                }
                if is_disallowed_field(&key) {
                    continue;
                }
                sanitized.insert(key, sanitize_node(value));
            }
            Value::Object(sanitized)
        }
        scalar => scalar,
    }
}

/// `null`, `{}` and `[]`: the nodes dropped from lists.
fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        other => is_empty_node(other),
    }
}
