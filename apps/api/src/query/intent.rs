//! Intent heuristics: keyword checks that decide which context hints and
//! field suggestions go into the filter-generation prompt.
//!
//! Matching is plain case-insensitive substring membership, so short terms
//! such as "it" also match inside longer words.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    Service,
    SetAside,
    Agency,
    Vendor,
    Date,
    Amount,
}

const SERVICE_TERMS: &[&str] = &[
    "opportunity",
    "service",
    "cybersecurity",
    "it",
    "construction",
    "maintenance",
    "consulting",
    "training",
    "research",
    "software",
    "hardware",
    "supplies",
    "security",
    "medical",
];

/// Service terms used for field suggestions; differs from `SERVICE_TERMS`.
const SERVICE_SUGGESTION_TERMS: &[&str] = &[
    "cybersecurity",
    "it",
    "computer",
    "software",
    "hardware",
    "construction",
    "maintenance",
    "consulting",
    "training",
    "research",
    "security",
    "medical",
    "healthcare",
];

const SET_ASIDE_TERMS: &[&str] = &[
    "8a",
    "small business",
    "women owned",
    "veteran owned",
    "minority owned",
    "disadvantaged",
    "hubzone",
    "set aside",
    "set-aside",
];

const AGENCY_TERMS: &[&str] = &[
    "nasa",
    "dod",
    "navy",
    "army",
    "air force",
    "defense",
    "homeland security",
    "energy",
    "health",
    "treasury",
    "interior",
    "agriculture",
    "commerce",
    "labor",
    "transportation",
    "education",
    "veterans",
    "justice",
    "state",
    "epa",
    "gsa",
    "ssa",
    "opm",
    "nrc",
    "fcc",
];

const VENDOR_TERMS: &[&str] = &[
    "booz allen",
    "boeing",
    "lockheed",
    "raytheon",
    "northrop",
    "general dynamics",
    "company",
    "vendor",
    "contractor",
];

const DATE_TERMS: &[&str] = &[
    "expiring",
    "expired",
    "active",
    "recent",
    "old",
    "this year",
    "last year",
    "next year",
    "2024",
    "2025",
    "2026",
];

const AMOUNT_TERMS: &[&str] = &[
    "large",
    "small",
    "million",
    "billion",
    "thousand",
    "high value",
    "low value",
    "$",
    "amount",
    "value",
];

impl QueryIntent {
    pub const ALL: [QueryIntent; 6] = [
        QueryIntent::Service,
        QueryIntent::SetAside,
        QueryIntent::Agency,
        QueryIntent::Vendor,
        QueryIntent::Date,
        QueryIntent::Amount,
    ];

    fn terms(&self) -> &'static [&'static str] {
        match self {
            QueryIntent::Service => SERVICE_TERMS,
            QueryIntent::SetAside => SET_ASIDE_TERMS,
            QueryIntent::Agency => AGENCY_TERMS,
            QueryIntent::Vendor => VENDOR_TERMS,
            QueryIntent::Date => DATE_TERMS,
            QueryIntent::Amount => AMOUNT_TERMS,
        }
    }

    /// Hint sentence appended to the question for the model.
    pub fn context(&self) -> &'static str {
        match self {
            QueryIntent::Service => {
                "SERVICE/OPPORTUNITY SEARCH: This query is looking for specific services or opportunities."
            }
            QueryIntent::SetAside => {
                "SET-ASIDE SEARCH: This query involves business set-aside requirements."
            }
            QueryIntent::Agency => "AGENCY SEARCH: This query involves specific federal agencies.",
            QueryIntent::Vendor => {
                "VENDOR SEARCH: This query involves specific vendors or contractors."
            }
            QueryIntent::Date => "DATE SEARCH: This query involves time-based filtering.",
            QueryIntent::Amount => "AMOUNT SEARCH: This query involves financial value filtering.",
        }
    }
}

fn mentions_any(question_lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| question_lower.contains(term))
}

pub fn detect_intents(question: &str) -> Vec<QueryIntent> {
    let lower = question.to_lowercase();
    QueryIntent::ALL
        .into_iter()
        .filter(|intent| mentions_any(&lower, intent.terms()))
        .collect()
}

/// Appends a `CONTEXT:` line naming every detected intent.
pub fn enhance_question(question: &str) -> String {
    let intents = detect_intents(question);
    if intents.is_empty() {
        return question.to_string();
    }
    let hints: Vec<&str> = intents.iter().map(QueryIntent::context).collect();
    format!("{question}\n\nCONTEXT: {}", hints.join("; "))
}

pub fn service_search_fields() -> &'static [&'static str] {
    &[
        "productservice_code_product_or_service_code_description",
        "nature_of_services",
        "principal_naics_code_north_american_industry_classification_system_description",
        "description_of_requirement",
        "productservice_code_product_or_service_code",
        "principal_naics_code_principal_north_american_industry_classification_system_code",
        "bundled_contract",
        "dod_acquisition_program_dod_acquisition_program",
        "dod_acquisition_program_programsystem_or_equipment_code_description",
        "information_technology_commercial_category",
        "claimant_program_code_claimant_program_code_description",
    ]
}

/// The only fields a set-aside condition may use.
pub fn set_aside_search_fields() -> &'static [&'static str] {
    &[
        "type_of_set_aside",
        "idv_type_of_set_aside_idv_type_of_set_aside",
        "type_of_set_aside_source_type_of_set_aside_source",
        "local_area_set_aside",
    ]
}

pub fn agency_search_fields() -> &'static [&'static str] {
    &[
        "contracting_office_agency_id_contracting_office_agency_id",
        "contracting_office_agency_id_contracting_office_agency_name",
        "contracting_office_id_contracting_office_id",
        "contracting_office_id_contracting_office_name",
        "funding_agency_id_funding_or_requesting_agency_id",
        "funding_agency_id_funding_or_requesting_agency_name",
        "funding_office_id_funding_or_requesting_office_id",
        "funding_office_id_funding_or_requesting_office_name",
    ]
}

/// A named group of fields recommended for one part of the question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSuggestion {
    pub group: &'static str,
    pub fields: &'static [&'static str],
}

pub fn suggested_fields(question: &str) -> Vec<FieldSuggestion> {
    let lower = question.to_lowercase();
    let mut suggestions = Vec::new();

    if mentions_any(&lower, SERVICE_SUGGESTION_TERMS) {
        suggestions.push(FieldSuggestion {
            group: "service_fields",
            fields: service_search_fields(),
        });
    }
    if mentions_any(&lower, SET_ASIDE_TERMS) {
        suggestions.push(FieldSuggestion {
            group: "set_aside_fields",
            fields: set_aside_search_fields(),
        });
    }
    if mentions_any(&lower, AGENCY_TERMS) {
        suggestions.push(FieldSuggestion {
            group: "agency_fields",
            fields: agency_search_fields(),
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_service_set_aside_and_date() {
        let intents =
            detect_intents("Find me SUPPORT opportunities expiring bet Jan to June 2026 which are 8a set aside");
        assert!(intents.contains(&QueryIntent::Service));
        assert!(intents.contains(&QueryIntent::SetAside));
        assert!(intents.contains(&QueryIntent::Date));
    }

    #[test]
    fn test_detects_agency_vendor_amount() {
        let intents = detect_intents("Boeing awards over $1M from the Navy");
        assert_eq!(
            intents,
            vec![QueryIntent::Agency, QueryIntent::Vendor, QueryIntent::Amount]
        );
    }

    #[test]
    fn test_no_intents_leaves_question_unchanged() {
        assert!(detect_intents("zzz").is_empty());
        assert_eq!(enhance_question("zzz"), "zzz");
    }

    #[test]
    fn test_enhance_question_appends_context_in_order() {
        let enhanced = enhance_question("NASA awards expiring");
        assert_eq!(
            enhanced,
            "NASA awards expiring\n\nCONTEXT: AGENCY SEARCH: This query involves specific federal agencies.; \
             DATE SEARCH: This query involves time-based filtering."
        );
    }

    #[test]
    fn test_suggested_fields_for_cyber_8a() {
        let suggestions = suggested_fields("find me CYBERSECURITY opportunity which are set aside 8A");
        let groups: Vec<&str> = suggestions.iter().map(|s| s.group).collect();
        assert_eq!(groups, vec!["service_fields", "set_aside_fields"]);
        assert_eq!(suggestions[1].fields, set_aside_search_fields());
    }

    #[test]
    fn test_suggestion_terms_differ_from_intent_terms() {
        // "computer" only appears in the suggestion list
        assert!(!detect_intents("computer").contains(&QueryIntent::Service));
        assert_eq!(suggested_fields("computer")[0].group, "service_fields");
    }

    #[test]
    fn test_field_lists_exist_in_catalogue() {
        let catalogue = crate::fields::FieldCatalogue::new();
        let all = service_search_fields()
            .iter()
            .chain(set_aside_search_fields())
            .chain(agency_search_fields());
        for field in all {
            assert!(catalogue.get(field).is_some(), "{field} missing");
        }
    }
}
