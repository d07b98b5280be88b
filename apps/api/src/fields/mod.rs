//! FPDS field catalogue, the static vocabulary the query prompts are built from.
//!
//! Every field the model may filter on is listed in `catalogue::FIELDS` with a
//! description, a category and the phrases users tend to say when they mean it.
//! The catalogue is immutable and shared through `AppState`.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{json, Map, Value};

pub mod aliases;
pub mod catalogue;

use aliases::SEARCH_ALIASES;
use catalogue::FIELDS;

/// Placeholder written into results that lack an award-id field.
pub const NOT_AVAILABLE: &str = "Not Available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    Transaction,
    AwardId,
    Idv,
    Dates,
    Financial,
    ContractingOffice,
    Funding,
    Entity,
    Contract,
    PerformanceLocation,
    ProductService,
    Competition,
    BusinessSize,
}

impl FieldCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Transaction => "transaction",
            FieldCategory::AwardId => "award_id",
            FieldCategory::Idv => "idv",
            FieldCategory::Dates => "dates",
            FieldCategory::Financial => "financial",
            FieldCategory::ContractingOffice => "contracting_office",
            FieldCategory::Funding => "funding",
            FieldCategory::Entity => "entity",
            FieldCategory::Contract => "contract",
            FieldCategory::PerformanceLocation => "performance_location",
            FieldCategory::ProductService => "product_service",
            FieldCategory::Competition => "competition",
            FieldCategory::BusinessSize => "business_size",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[serde(rename = "string")]
    Text,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Number,
    Currency,
}

/// One searchable FPDS field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub category: FieldCategory,
    pub search_terms: &'static [&'static str],
    pub data_type: DataType,
}

/// A catalogue field scored against a free-text query.
#[derive(Debug, Clone, Serialize)]
pub struct FieldMatch {
    pub field_name: &'static str,
    pub score: u32,
    pub matched_terms: Vec<String>,
    pub description: &'static str,
    pub category: FieldCategory,
    pub data_type: DataType,
}

/// Read-only view over the static field and alias tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCatalogue;

impl FieldCatalogue {
    pub fn new() -> Self {
        Self
    }

    /// All fields, in authoring order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    pub fn fields_in(&self, category: FieldCategory) -> Vec<&'static FieldSpec> {
        FIELDS.iter().filter(|f| f.category == category).collect()
    }

    /// Distinct categories in the order they first appear in the table.
    pub fn categories(&self) -> Vec<FieldCategory> {
        let mut seen = Vec::new();
        for field in FIELDS {
            if !seen.contains(&field.category) {
                seen.push(field.category);
            }
        }
        seen
    }

    pub fn award_id_fields(&self) -> Vec<&'static str> {
        self.fields_in(FieldCategory::AwardId)
            .into_iter()
            .map(|f| f.name)
            .collect()
    }

    /// Fills in missing award-id fields so every result can be cited.
    pub fn ensure_award_id_fields(&self, results: &mut [Value]) {
        let award_fields = self.award_id_fields();
        for result in results.iter_mut() {
            if let Some(doc) = result.as_object_mut() {
                for field in &award_fields {
                    doc.entry(field.to_string())
                        .or_insert_with(|| Value::String(NOT_AVAILABLE.to_string()));
                }
            }
        }
    }
}

/// Lookup and search helpers over the catalogue. The query pipeline only
/// reads the prompt listing; these serve callers that search fields directly.
#[allow(dead_code)]
impl FieldCatalogue {
    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        FIELDS.iter().find(|f| f.name == name)
    }

    /// Scores every field against `query`.
    ///
    /// description hit = 10, each search-term overlap = 5, category hit = 3.
    /// Zero-score fields are dropped; ties keep catalogue order.
    pub fn find_matching_fields(&self, query: &str) -> Vec<FieldMatch> {
        let query = query.to_lowercase();
        let mut matches = Vec::new();

        for field in FIELDS {
            let mut score = 0;
            let mut matched_terms = Vec::new();

            if field.description.to_lowercase().contains(&query) {
                score += 10;
                matched_terms.push("description".to_string());
            }

            for term in field.search_terms {
                let term_lower = term.to_lowercase();
                if term_lower.contains(&query) || query.contains(&term_lower) {
                    score += 5;
                    matched_terms.push(format!("search_term: {term}"));
                }
            }

            if field.category.as_str().contains(&query) {
                score += 3;
                matched_terms.push("category".to_string());
            }

            if score > 0 {
                matches.push(FieldMatch {
                    field_name: field.name,
                    score,
                    matched_terms,
                    description: field.description,
                    category: field.category,
                    data_type: field.data_type,
                });
            }
        }

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    /// Expands `query` with every alias whose key appears in it.
    pub fn expand_search_terms(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        let mut seen = HashSet::new();
        let mut expanded = Vec::new();

        let alias_terms = SEARCH_ALIASES
            .iter()
            .filter(|(key, _)| query.contains(key))
            .flat_map(|(_, terms)| terms.iter().map(|t| t.to_string()));

        for term in std::iter::once(query.clone()).chain(alias_terms) {
            if seen.insert(term.clone()) {
                expanded.push(term);
            }
        }
        expanded
    }

    /// Case-insensitive filter on the procurement instrument identifier (PIID).
    pub fn award_id_filter(&self, piid: &str) -> Value {
        regex_filter("award_id_procurement_identifier", piid)
    }

    pub fn award_agency_filter(&self, agency_id: &str) -> Value {
        regex_filter("award_id_agency_id", agency_id)
    }
}

fn regex_filter(field: &str, needle: &str) -> Value {
    let mut filter = Map::new();
    filter.insert(
        field.to_string(),
        json!({ "$regex": regex::escape(needle), "$options": "i" }),
    );
    Value::Object(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_unique() {
        let mut names = HashSet::new();
        for field in FIELDS {
            assert!(names.insert(field.name), "duplicate field {}", field.name);
        }
    }

    #[test]
    fn test_get_known_field() {
        let catalogue = FieldCatalogue::new();
        let field = catalogue.get("award_id_procurement_identifier").unwrap();
        assert_eq!(field.category, FieldCategory::AwardId);
        assert!(field.search_terms.contains(&"piid"));
        assert!(catalogue.get("no_such_field").is_none());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let categories = FieldCatalogue::new().categories();
        assert_eq!(categories.len(), 13);
        assert_eq!(categories[0], FieldCategory::Transaction);
        assert_eq!(categories[1], FieldCategory::AwardId);
        assert_eq!(*categories.last().unwrap(), FieldCategory::BusinessSize);
    }

    #[test]
    fn test_award_id_fields() {
        let fields = FieldCatalogue::new().award_id_fields();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], "award_id_agency_id");
        assert!(fields.contains(&"award_id_procurement_identifier"));
    }

    #[test]
    fn test_find_matching_fields_ranks_piid_first() {
        let matches = FieldCatalogue::new().find_matching_fields("PIID");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].field_name, "award_id_procurement_identifier");
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_find_matching_fields_no_match() {
        let matches = FieldCatalogue::new().find_matching_fields("zzqqxx");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_expand_search_terms_includes_aliases() {
        let terms = FieldCatalogue::new().expand_search_terms("NASA awards");
        assert_eq!(terms[0], "nasa awards");
        assert!(terms.contains(&"national aeronautics and space administration".to_string()));
        let unique: HashSet<_> = terms.iter().collect();
        assert_eq!(unique.len(), terms.len());
    }

    #[test]
    fn test_ensure_award_id_fields_fills_missing_only() {
        let mut results = vec![json!({
            "award_id_agency_id": "9700",
            "type_of_contract": "FFP"
        })];
        FieldCatalogue::new().ensure_award_id_fields(&mut results);
        assert_eq!(results[0]["award_id_agency_id"], "9700");
        assert_eq!(results[0]["award_id_procurement_identifier"], NOT_AVAILABLE);
        assert_eq!(results[0]["solicitation_id_solicitation_id"], NOT_AVAILABLE);
    }

    #[test]
    fn test_award_id_filter_escapes_input() {
        let filter = FieldCatalogue::new().award_id_filter("N00024-21.C");
        assert_eq!(
            filter["award_id_procurement_identifier"]["$regex"],
            "N00024\\-21\\.C"
        );
        assert_eq!(filter["award_id_procurement_identifier"]["$options"], "i");
    }
}
