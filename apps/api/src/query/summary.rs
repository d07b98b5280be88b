//! Result digest fed to the formatting prompt: headline statistics plus one
//! citation-ready line per sample award.

use std::collections::HashSet;

use serde_json::Value;

/// Only this many records are itemised for the model.
const SAMPLE_SIZE: usize = 20;

const AGENCY_FIELD: &str = "contracting_office_agency_id_contracting_office_agency_name";
const VENDOR_FIELD: &str = "unique_entity_id_legal_business_name";
const COMPLETION_DATE_FIELD: &str = "date_signed_award_completion_date";
const SIGNED_DATE_FIELD: &str = "date_signed_date_signed";
const OBLIGATION_FIELD: &str = "action_obligation_total_obligation_amount";
const CONTRACT_TYPE_FIELD: &str = "type_of_contract";

pub fn summarize_results(results: &[Value]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let total_obligation: f64 = results
        .iter()
        .filter_map(|r| r.get(OBLIGATION_FIELD).and_then(parse_amount))
        .sum();

    let mut agencies = HashSet::new();
    let mut vendors = HashSet::new();
    let mut completion_dates = Vec::new();
    let mut samples = Vec::new();

    for result in results.iter().take(SAMPLE_SIZE) {
        let agency = text_or(result, AGENCY_FIELD, "Unknown");
        let vendor = text_or(result, VENDOR_FIELD, "Unknown");
        agencies.insert(agency.clone());
        vendors.insert(vendor.clone());

        if let Some(date) = result.get(COMPLETION_DATE_FIELD).and_then(display_value) {
            if !date.is_empty() {
                completion_dates.push(date);
            }
        }

        let award_id = format!(
            "{}-{}",
            text_or(result, "award_id_agency_id", "N/A"),
            text_or(result, "award_id_procurement_identifier", "N/A")
        );
        let amount = result
            .get(OBLIGATION_FIELD)
            .and_then(parse_amount)
            .unwrap_or(0.0);

        samples.push(format!(
            "Award ID: {award_id}, Agency: {agency}, Vendor: {vendor}, Type: {}, Date: {}, Amount: {}",
            text_or(result, CONTRACT_TYPE_FIELD, "Unknown"),
            text_or(result, SIGNED_DATE_FIELD, "Unknown"),
            format_usd(amount)
        ));
    }

    let date_range = match (completion_dates.iter().min(), completion_dates.iter().max()) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "N/A to N/A".to_string(),
    };

    format!(
        "\nStatistics:\n\
         - Total Results: {}\n\
         - Total Obligation: {}\n\
         - Unique Agencies: {}\n\
         - Unique Vendors: {}\n\
         - Date Range: {date_range}\n\
         \n\
         Sample Results:\n\
         {}\n",
        results.len(),
        format_usd(total_obligation),
        agencies.len(),
        vendors.len(),
        samples.join("\n")
    )
}

/// Renders a stored value as plain text; extended-JSON dates unwrap to their string.
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("$date") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Object(inner)) => inner
                .get("$numberLong")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => Some(value.to_string()),
        },
        other => Some(other.to_string()),
    }
}

fn text_or(result: &Value, field: &str, fallback: &str) -> String {
    result
        .get(field)
        .and_then(display_value)
        .unwrap_or_else(|| fallback.to_string())
}

/// Numbers as-is; strings like "$1,250,000.00" with `$` and `,` removed.
fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let digits: String = s.chars().filter(|c| *c != '$' && *c != ',').collect();
            digits.trim().parse().ok()
        }
        Value::Object(map) => map
            .get("$numberDecimal")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok()),
        _ => None,
    }
}

/// `1234567.8` → `$1,234,568`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn award(agency: &str, vendor: &str, amount: Value, completion: &str, piid: &str) -> Value {
        json!({
            "award_id_agency_id": "9700",
            "award_id_procurement_identifier": piid,
            "contracting_office_agency_id_contracting_office_agency_name": agency,
            "unique_entity_id_legal_business_name": vendor,
            "type_of_contract": "FIRM FIXED PRICE",
            "date_signed_date_signed": "2025-01-15",
            "date_signed_award_completion_date": {"$date": completion},
            "action_obligation_total_obligation_amount": amount
        })
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1000.0), "$1,000");
        assert_eq!(format_usd(1234567.8), "$1,234,568");
        assert_eq!(format_usd(-25000.0), "-$25,000");
    }

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount(&json!(1500)), Some(1500.0));
        assert_eq!(parse_amount(&json!("$1,250,000.00")), Some(1_250_000.0));
        assert_eq!(parse_amount(&json!({"$numberDecimal": "42.5"})), Some(42.5));
        assert_eq!(parse_amount(&json!("n/a")), None);
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(summarize_results(&[]), "No results found.");
    }

    #[test]
    fn test_summary_statistics_and_citations() {
        let results = vec![
            award("DEPT OF THE NAVY", "ACME CORP", json!(1_000_000), "2026-03-31T00:00:00Z", "N0001"),
            award("DEPT OF THE NAVY", "GLOBEX", json!("$2,500,000"), "2026-01-31T00:00:00Z", "N0002"),
            award("DEPT OF THE ARMY", "ACME CORP", json!(500.4), "2026-06-30T00:00:00Z", "W0003"),
        ];
        let summary = summarize_results(&results);

        assert!(summary.contains("- Total Results: 3"));
        assert!(summary.contains("- Total Obligation: $3,500,500"));
        assert!(summary.contains("- Unique Agencies: 2"));
        assert!(summary.contains("- Unique Vendors: 2"));
        assert!(summary.contains("- Date Range: 2026-01-31T00:00:00Z to 2026-06-30T00:00:00Z"));
        assert!(summary.contains(
            "Award ID: 9700-N0002, Agency: DEPT OF THE NAVY, Vendor: GLOBEX, \
             Type: FIRM FIXED PRICE, Date: 2025-01-15, Amount: $2,500,000"
        ));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let summary = summarize_results(&[json!({"type_of_contract": "IDIQ"})]);
        assert!(summary.contains("Award ID: N/A-N/A, Agency: Unknown, Vendor: Unknown"));
        assert!(summary.contains("Amount: $0"));
        assert!(summary.contains("- Date Range: N/A to N/A"));
    }

    #[test]
    fn test_only_first_twenty_are_itemised() {
        let results: Vec<Value> = (0..25)
            .map(|i| award("NASA", &format!("VENDOR {i}"), json!(1), "2026-01-01", &format!("P{i}")))
            .collect();
        let summary = summarize_results(&results);
        assert!(summary.contains("- Total Results: 25"));
        assert!(summary.contains("- Total Obligation: $25"));
        assert!(summary.contains("- Unique Vendors: 20"));
        assert_eq!(summary.matches("Award ID: ").count(), 20);
    }
}
