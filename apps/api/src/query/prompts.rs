// Query pipeline LLM prompt templates.
// All prompts for the query module are defined here.

use crate::fields::{FieldCatalogue, FieldCategory};
use crate::query::intent::{service_search_fields, set_aside_search_fields, suggested_fields};

pub const FILTER_SYSTEM: &str = "You are an expert at converting natural language queries to \
    MongoDB filters for FPDS (Federal Procurement Data System) data. \
    Focus on comprehensive searches that capture all relevant records.";

pub const FORMAT_SYSTEM: &str = "You are an expert analyst specializing in federal procurement \
    data. Provide clear, accurate responses with proper citations using award IDs.";

/// Categories listed first, with a larger field budget, in this order.
const PRIORITY_CATEGORIES: &[FieldCategory] = &[
    FieldCategory::ProductService,
    FieldCategory::Contract,
    FieldCategory::Competition,
    FieldCategory::Entity,
    FieldCategory::ContractingOffice,
    FieldCategory::Funding,
    FieldCategory::Dates,
    FieldCategory::Financial,
];

/// Priority categories that get the widest field listing.
const WIDE_CATEGORIES: &[FieldCategory] = &[
    FieldCategory::ProductService,
    FieldCategory::Contract,
    FieldCategory::Competition,
];

/// Filter prompt template.
/// Replace: {categorized_fields}, {field_suggestions}, {service_fields},
///          {set_aside_fields}, then {query} last.
const FILTER_PROMPT_TEMPLATE: &str = r#"Convert this natural language query to a MongoDB filter for FPDS data:

Query: "{query}"

IMPORTANT: When searching for services, opportunities, or specialized terms, use comprehensive OR filters across ALL relevant fields to ensure no relevant records are missed.

Available FPDS fields organized by category:
{categorized_fields}{field_suggestions}

Key filtering strategies:

1. SERVICE/OPPORTUNITY SEARCHES (cybersecurity, IT, construction, etc.):
   - Use OR filters across ALL service-related fields: {service_fields}
   - For specialized terms like "cybersecurity", search in ALL text fields that might contain service descriptions
   - Example for cybersecurity: {"$or": [
       {"productservice_code_product_or_service_code_description": {"$regex": "CYBERSECURITY", "$options": "i"}},
       {"nature_of_services": {"$regex": "CYBERSECURITY", "$options": "i"}},
       {"principal_naics_code_north_american_industry_classification_system_description": {"$regex": "CYBERSECURITY", "$options": "i"}},
       {"description_of_requirement": {"$regex": "CYBERSECURITY", "$options": "i"}},
       {"productservice_code_product_or_service_code": {"$regex": "CYBERSECURITY", "$options": "i"}},
       {"information_technology_commercial_category": {"$regex": "CYBERSECURITY", "$options": "i"}}
   ]}

2. AGENCY SEARCHES (NASA, DOD, etc.):
   - Use OR filters across ALL contracting office fields: contracting_office_agency_id_contracting_office_agency_id, contracting_office_agency_id_contracting_office_agency_name, contracting_office_id_contracting_office_id, contracting_office_id_contracting_office_name
   - Use OR filters across ALL funding office fields: funding_agency_id_funding_or_requesting_agency_id, funding_agency_id_funding_or_requesting_agency_name, funding_office_id_funding_or_requesting_office_id, funding_office_id_funding_or_requesting_office_name
   - Example for NASA: {"$or": [
       {"contracting_office_agency_id_contracting_office_agency_name": {"$regex": "NASA", "$options": "i"}},
       {"contracting_office_id_contracting_office_name": {"$regex": "NASA", "$options": "i"}},
       {"funding_agency_id_funding_or_requesting_agency_name": {"$regex": "NASA", "$options": "i"}},
       {"funding_office_id_funding_or_requesting_office_name": {"$regex": "NASA", "$options": "i"}}
   ]}

3. VENDOR/COMPANY SEARCHES:
   - Use OR filters across ALL entity fields: unique_entity_id_legal_business_name, legal_business_name_legal_business_name
   - Example: {"$or": [{"unique_entity_id_legal_business_name": {"$regex": "Company Name", "$options": "i"}}, {"legal_business_name_legal_business_name": {"$regex": "Company Name", "$options": "i"}}]}

4. CONTRACT TYPE SEARCHES:
   - Use OR filters across: type_of_contract, award_type_display
   - Example: {"$or": [{"type_of_contract": {"$regex": "IDIQ", "$options": "i"}}, {"award_type_display": {"$regex": "IDIQ", "$options": "i"}}]}

5. SET-ASIDE SEARCHES (8A, small business, etc.):
   - Use OR filters across ONLY these set-aside fields: {set_aside_fields}
   - Do NOT use "contracting_officers_business_size_selection" for set-aside classification.
   - Example for 8A: {"$or": [
       {"type_of_set_aside": {"$regex": "8A", "$options": "i"}},
       {"idv_type_of_set_aside_idv_type_of_set_aside": {"$regex": "8A", "$options": "i"}},
       {"type_of_set_aside_source_type_of_set_aside_source": {"$regex": "8A", "$options": "i"}},
       {"local_area_set_aside": {"$regex": "8A", "$options": "i"}}
   ]}

6. DATE SEARCHES:
   - Use appropriate date fields: date_signed_award_completion_date, est_ultimate_completion_date_estimated_ultimate_completion_date
   - Use ISODate format: ISODate('2025-04-30')

7. AMOUNT SEARCHES:
   - Use: action_obligation_total_obligation_amount, base_and_exercised_options_value_total_base_and_excercised_options_value

8. LOCATION SEARCHES:
   - Use OR filters across: unique_entity_id_entity_state, principal_place_of_performance_code_principal_place_of_performance_state_code

9. COMPETITION SEARCHES:
   - Use OR filters across: extent_competed, type_of_set_aside, solicitation_procedures
   - Example for competitive: {"$or": [
       {"extent_competed": {"$regex": "COMPETITIVE", "$options": "i"}},
       {"solicitation_procedures": {"$regex": "COMPETITIVE", "$options": "i"}}
   ]}

Date formats: Use ISODate for date comparisons (e.g., ISODate('2026-03-31'))
Text searches: Use $regex for partial matches (e.g., {"field": {"$regex": "NASA", "$options": "i"}})
Amount ranges: Use $gte, $lte for numeric comparisons

Return a JSON object with the MongoDB filter:
{
    "filter": {
        "$and": [
            {"$or": [{"field1": {"$regex": "value", "$options": "i"}}, {"field2": {"$regex": "value", "$options": "i"}}]},
            {"date_field": {"$gte": "ISODate('2024-01-01')"}}
        ]
    },
    "sort": {"field": 1},
    "limit": 100,
    "explanation": "Brief explanation of the filter logic"
}

Examples:
- "find me CYBERSECURITY opportunity which are set aside 8A" → filter for cybersecurity services (ALL service description fields) AND 8A set-aside (ONLY set-aside fields)
- "NASA awards expiring in Q2 2026" → filter for NASA agency (ALL contracting and funding office fields) and completion dates in Q2 2026
- "Booz Allen contracts over $1M" → filter for vendor name (ALL entity fields) and obligation amount > 1000000
- "IDIQs awarded to Booz Allen" → filter for vendor name (ALL entity fields) and contract type (both type_of_contract and award_type_display)
- "IT services set aside for small business" → filter for IT services (ALL service fields) AND small business set-aside (ALL set-aside fields)
- "COMPUTER PROGRAMMING SERVICES opportunity which are set aside 8A" → filter for computer programming services (ALL service fields) AND 8A set-aside (ALL set-aside fields)
- "NAVY or ARMY related to CYBERSECURITY" → filter for Navy/Army agencies (ALL agency fields) AND cybersecurity services (ALL service fields)

CRITICAL: Always use comprehensive OR filters when searching for services, entities, or specialized terms to ensure no relevant records are missed. For service searches, include ALL fields that might contain service descriptions.

Return only the JSON object."#;

/// Lists catalogue fields grouped by category, priority categories first.
pub fn categorized_field_info(catalogue: &FieldCatalogue) -> String {
    let mut lines = Vec::new();

    for category in PRIORITY_CATEGORIES {
        let fields = catalogue.fields_in(*category);
        if fields.is_empty() {
            continue;
        }
        lines.push(format!(
            "\n{} FIELDS (use ALL for comprehensive search):",
            category.as_str().to_uppercase()
        ));
        let max_fields = if WIDE_CATEGORIES.contains(category) { 12 } else { 8 };
        for field in fields.iter().take(max_fields) {
            lines.push(field_line(field.name, field.description, field.search_terms, 5));
        }
    }

    for category in catalogue.categories() {
        if PRIORITY_CATEGORIES.contains(&category) {
            continue;
        }
        lines.push(format!("\n{} FIELDS:", category.as_str().to_uppercase()));
        for field in catalogue.fields_in(category).iter().take(6) {
            lines.push(field_line(field.name, field.description, field.search_terms, 3));
        }
    }

    lines.join("\n")
}

fn field_line(name: &str, description: &str, terms: &[&str], max_terms: usize) -> String {
    let terms: Vec<&str> = terms.iter().take(max_terms).copied().collect();
    format!("  - {name}: {description} (search: {})", terms.join(", "))
}

/// Renders the query-specific suggestion block, or "" when nothing matched.
fn field_suggestion_block(question: &str) -> String {
    let suggestions = suggested_fields(question);
    if suggestions.is_empty() {
        return String::new();
    }

    let mut block = String::from("\n\nQUERY-SPECIFIC FIELD SUGGESTIONS:\n");
    for suggestion in suggestions {
        block.push_str(&format!("\n{}:\n", title_case(suggestion.group)));
        for field in suggestion.fields {
            block.push_str(&format!("  - {field}\n"));
        }
    }
    block
}

/// `set_aside_fields` → `Set Aside Fields`.
fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the user prompt asking the model for a filter document.
pub fn filter_prompt(question: &str, catalogue: &FieldCatalogue) -> String {
    FILTER_PROMPT_TEMPLATE
        .replace("{categorized_fields}", &categorized_field_info(catalogue))
        .replace("{field_suggestions}", &field_suggestion_block(question))
        .replace("{service_fields}", &service_search_fields().join(", "))
        .replace("{set_aside_fields}", &set_aside_search_fields().join(", "))
        .replace("{query}", question)
}

/// Builds the user prompt asking the model to write the cited report.
pub fn format_prompt(
    question: &str,
    explanation: Option<&str>,
    result_count: usize,
    summary: &str,
) -> String {
    let explanation = explanation.unwrap_or("N/A");
    format!(
        r#"Format the following FPDS query results into a clear, structured response with citations.

Original Query: "{question}"
Query Filter: {explanation}
Results Count: {result_count}

Results Summary:
{summary}

Please provide a structured response that includes:
1. A clear answer to the original query
2. Key statistics (count, total value, date ranges, etc.)
3. Notable examples with citations using award IDs in format: "Award ID: award_id_agency_id-award_id_procurement_identifier"
4. Any relevant insights or patterns

For each example, include:
- Contract title/description
- Contract type
- Contract date
- Award ID citation
- Key details relevant to the query

Format the response in a clear, professional manner suitable for business reporting."#
    )
}
