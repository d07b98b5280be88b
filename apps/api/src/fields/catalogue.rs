//! Static FPDS field table, in authoring order.

use super::{DataType, FieldCategory, FieldSpec};

pub static FIELDS: &[FieldSpec] = &[
    // transaction
    FieldSpec {
        name: "award_type_display",
        description: "Type of award (e.g., Delivery/Task Order, Purchase Order)",
        category: FieldCategory::Transaction,
        search_terms: &["award type", "contract type", "delivery order", "task order", "purchase order", "contract award"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "award_status_display",
        description: "Current status of the award (e.g., Final, Draft)",
        category: FieldCategory::Transaction,
        search_terms: &["award status", "contract status", "final", "draft", "active"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "closed_status_display",
        description: "Whether the contract is closed",
        category: FieldCategory::Transaction,
        search_terms: &["closed", "closed status", "contract closed", "terminated"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "prepared_date",
        description: "Date and time when the award record was prepared",
        category: FieldCategory::Transaction,
        search_terms: &["prepared date", "date prepared", "award prepared", "prepared on"],
        data_type: DataType::DateTime,
    },
    FieldSpec {
        name: "prepared_user",
        description: "User who prepared the award record",
        category: FieldCategory::Transaction,
        search_terms: &["prepared user", "prepared by", "award prepared by", "record creator"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "last_modified_date",
        description: "Date and time when the award record was last modified",
        category: FieldCategory::Transaction,
        search_terms: &["last modified date", "modified date", "updated date", "last updated"],
        data_type: DataType::DateTime,
    },
    FieldSpec {
        name: "last_modified_user",
        description: "User who last modified the award record",
        category: FieldCategory::Transaction,
        search_terms: &["last modified user", "modified by", "updated by", "last updated by"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "approved_date",
        description: "Date and time when the award was approved",
        category: FieldCategory::Transaction,
        search_terms: &["approved date", "date approved", "award approved"],
        data_type: DataType::DateTime,
    },
    FieldSpec {
        name: "approved_by_display",
        description: "User who approved the award",
        category: FieldCategory::Transaction,
        search_terms: &["approved by", "approver", "award approver"],
        data_type: DataType::Text,
    },

    // award_id
    FieldSpec {
        name: "award_id_agency_id",
        description: "Agency ID for the award",
        category: FieldCategory::AwardId,
        search_terms: &["agency id", "award agency", "contracting agency"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "award_id_procurement_identifier",
        description: "Procurement identifier (PIID)",
        category: FieldCategory::AwardId,
        search_terms: &["procurement id", "piid", "contract number", "award number"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "award_id_modification_number",
        description: "Modification number for the award",
        category: FieldCategory::AwardId,
        search_terms: &["modification", "mod number", "contract modification"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "award_id_transaction_number",
        description: "Transaction number",
        category: FieldCategory::AwardId,
        search_terms: &["transaction number", "transaction id"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "solicitation_id_solicitation_id",
        description: "Solicitation ID for the award",
        category: FieldCategory::AwardId,
        search_terms: &["solicitation id", "solicitation", "bid id", "request for proposal"],
        data_type: DataType::Text,
    },

    // idv
    FieldSpec {
        name: "referenced_idv_id_indefinite_delivery_vehicle_agency_id",
        description: "Agency ID for the referenced IDV",
        category: FieldCategory::Idv,
        search_terms: &["idv agency", "indefinite delivery vehicle agency"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "referenced_idv_id_indefinite_delivery_vehicle_procurement_id",
        description: "Procurement ID for the referenced IDV",
        category: FieldCategory::Idv,
        search_terms: &["idv procurement", "indefinite delivery vehicle procurement"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "referenced_idv_id_idv_mod_number",
        description: "Modification number for the IDV",
        category: FieldCategory::Idv,
        search_terms: &["idv modification", "idv mod"],
        data_type: DataType::Text,
    },

    // dates
    FieldSpec {
        name: "date_signed_date_signed",
        description: "Date when the contract was signed",
        category: FieldCategory::Dates,
        search_terms: &["date signed", "signature date", "contract date", "award date"],
        data_type: DataType::Date,
    },
    FieldSpec {
        name: "date_signed_period_of_performance_start_date",
        description: "Start date of the performance period",
        category: FieldCategory::Dates,
        search_terms: &["performance start", "start date", "period start", "contract start"],
        data_type: DataType::Date,
    },
    FieldSpec {
        name: "date_signed_award_completion_date",
        description: "Award completion date",
        category: FieldCategory::Dates,
        search_terms: &["completion date", "award completion", "contract completion", "end date"],
        data_type: DataType::Date,
    },
    FieldSpec {
        name: "date_signed_estimated_ultimate_completion_date",
        description: "Estimated ultimate completion date",
        category: FieldCategory::Dates,
        search_terms: &["estimated completion", "ultimate completion", "expected end"],
        data_type: DataType::Date,
    },

    // financial
    FieldSpec {
        name: "action_obligation_current_obligation_amount",
        description: "Current obligation amount",
        category: FieldCategory::Financial,
        search_terms: &["current obligation", "obligation amount", "current amount", "funds obligated"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "action_obligation_total_obligation_amount",
        description: "Total obligation amount",
        category: FieldCategory::Financial,
        search_terms: &["total obligation", "total amount", "total funds", "total obligated"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "base_and_exercised_options_value_current_base_and_excercised_options_value",
        description: "Current base and exercised options value",
        category: FieldCategory::Financial,
        search_terms: &["base value", "exercised options", "current value"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "base_and_exercised_options_value_total_base_and_excercised_options_value",
        description: "Total base and exercised options value",
        category: FieldCategory::Financial,
        search_terms: &["total base", "total options", "total contract value"],
        data_type: DataType::Currency,
    },

    // contracting_office
    FieldSpec {
        name: "contracting_office_agency_id_contracting_office_agency_id",
        description: "Contracting office agency ID",
        category: FieldCategory::ContractingOffice,
        search_terms: &["contracting office agency", "contracting agency id"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "contracting_office_agency_id_contracting_office_agency_name",
        description: "Contracting office agency name",
        category: FieldCategory::ContractingOffice,
        search_terms: &["contracting office", "contracting agency", "awarding agency"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "contracting_office_id_contracting_office_id",
        description: "Contracting office ID",
        category: FieldCategory::ContractingOffice,
        search_terms: &["contracting office id", "office id"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "contracting_office_id_contracting_office_name",
        description: "Contracting office name",
        category: FieldCategory::ContractingOffice,
        search_terms: &["contracting office name", "office name"],
        data_type: DataType::Text,
    },

    // funding
    FieldSpec {
        name: "funding_agency_id_funding_or_requesting_agency_id",
        description: "Funding agency ID",
        category: FieldCategory::Funding,
        search_terms: &["funding agency", "funding agency id", "requesting agency"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "funding_agency_id_funding_or_requesting_agency_name",
        description: "Funding agency name",
        category: FieldCategory::Funding,
        search_terms: &["funding agency name", "requesting agency name"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "funding_office_id_funding_or_requesting_office_id",
        description: "Funding office ID",
        category: FieldCategory::Funding,
        search_terms: &["funding office", "funding office id"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "funding_office_id_funding_or_requesting_office_name",
        description: "Funding office name",
        category: FieldCategory::Funding,
        search_terms: &["funding office name"],
        data_type: DataType::Text,
    },

    // entity
    FieldSpec {
        name: "unique_entity_id_unique_entity_identifier",
        description: "Unique entity identifier (UEI)",
        category: FieldCategory::Entity,
        search_terms: &["unique entity id", "uei", "entity identifier", "vendor id"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_legal_business_name",
        description: "Legal business name of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["business name", "contractor name", "vendor name", "company name"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_cage_code",
        description: "CAGE code of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["cage code", "cage"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_entity_city",
        description: "City of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["contractor city", "vendor city", "business city"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_entity_state",
        description: "State of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["contractor state", "vendor state", "business state"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_entity_zip",
        description: "ZIP code of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["contractor zip", "vendor zip", "business zip"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_entity_country",
        description: "Country of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["contractor country", "vendor country", "business country"],
        data_type: DataType::Text,
    },

    // contract
    FieldSpec {
        name: "type_of_contract",
        description: "Type of contract (e.g., Firm Fixed Price)",
        category: FieldCategory::Contract,
        search_terms: &["contract type", "type of contract", "fixed price", "cost plus"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "nature_of_services",
        description: "Nature of services provided",
        category: FieldCategory::Contract,
        search_terms: &["nature of services", "service type", "work type"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "multiyear_contract",
        description: "Whether this is a multiyear contract",
        category: FieldCategory::Contract,
        search_terms: &["multiyear", "multi year", "multi-year"],
        data_type: DataType::Text,
    },

    // performance_location
    FieldSpec {
        name: "principal_place_of_performance_code_principal_place_of_performance_state_code",
        description: "State code for principal place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance state", "work state", "location state"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "principal_place_of_performance_code_principal_place_of_performance_country_code",
        description: "Country code for principal place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance country", "work country", "location country"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "principal_place_of_performance_county_name_principal_place_of_performance_county_name",
        description: "County name for principal place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance county", "work county", "location county"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "principal_place_of_performance_city_name_principal_place_of_performance_city_name",
        description: "City name for principal place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance city", "work city", "location city"],
        data_type: DataType::Text,
    },

    // product_service
    FieldSpec {
        name: "productservice_code_product_or_service_code",
        description: "Product or service code",
        category: FieldCategory::ProductService,
        search_terms: &["product code", "service code", "psc", "product service code"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "productservice_code_product_or_service_code_description",
        description: "Description of the product or service code",
        category: FieldCategory::ProductService,
        search_terms: &["product description", "service description", "work description"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "principal_naics_code_principal_north_american_industry_classification_system_code",
        description: "Principal NAICS code",
        category: FieldCategory::ProductService,
        search_terms: &["naics code", "naics", "industry code"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "principal_naics_code_north_american_industry_classification_system_description",
        description: "NAICS code description",
        category: FieldCategory::ProductService,
        search_terms: &["naics description", "industry description"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "description_of_requirement",
        description: "Detailed description of the requirement (e.g., period of performance extension TI 003)",
        category: FieldCategory::ProductService,
        search_terms: &["requirement description", "description of requirement", "period of performance", "performance extension"],
        data_type: DataType::Text,
    },

    // competition
    FieldSpec {
        name: "extent_competed",
        description: "Extent of competition",
        category: FieldCategory::Competition,
        search_terms: &["extent competed", "competition", "competitive", "full and open"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "type_of_set_aside",
        description: "Type of set aside",
        category: FieldCategory::Competition,
        search_terms: &["set aside", "small business", "8a", "women owned"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "number_of_offers_received_number_of_offers_received",
        description: "Number of offers received",
        category: FieldCategory::Competition,
        search_terms: &["number of offers", "offers received", "bids received"],
        data_type: DataType::Number,
    },

    // business_size
    FieldSpec {
        name: "contracting_officers_business_size_selection",
        description: "Business size selection by contracting officer",
        category: FieldCategory::BusinessSize,
        search_terms: &["business size", "small business", "large business"],
        data_type: DataType::Text,
    },

    // financial
    FieldSpec {
        name: "date_signed_current_obligation_amount",
        description: "Current obligation amount as of date signed",
        category: FieldCategory::Financial,
        search_terms: &["current obligation", "current amount", "obligated funds", "current funding"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "date_signed_total_obligation_amount",
        description: "Total obligation amount as of date signed",
        category: FieldCategory::Financial,
        search_terms: &["total obligation", "total amount", "total funding", "total obligated"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "date_signed_current_base_and_excercised_options_value",
        description: "Current base and exercised options value",
        category: FieldCategory::Financial,
        search_terms: &["current value", "base value", "exercised options", "current contract value"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "date_signed_total_base_and_excercised_options_value",
        description: "Total base and exercised options value",
        category: FieldCategory::Financial,
        search_terms: &["total value", "total contract value", "total options", "full contract value"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "date_signed_base_and_all_options_value",
        description: "Base and all options value",
        category: FieldCategory::Financial,
        search_terms: &["all options", "potential value", "maximum value", "ceiling value"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "date_signed_total_base_and_all_options_value",
        description: "Total base and all options value",
        category: FieldCategory::Financial,
        search_terms: &["total potential", "maximum contract", "ceiling amount", "total ceiling"],
        data_type: DataType::Currency,
    },
    FieldSpec {
        name: "date_signed_fee_paid_for_use_of_indefinite_delivery_vehicle",
        description: "Fee paid for use of indefinite delivery vehicle",
        category: FieldCategory::Financial,
        search_terms: &["idv fee", "delivery vehicle fee", "contract fee", "vehicle fee"],
        data_type: DataType::Currency,
    },

    // dates
    FieldSpec {
        name: "period_of_performance_start_date_period_of_performance_start_date",
        description: "Period of performance start date",
        category: FieldCategory::Dates,
        search_terms: &["performance start", "work start", "contract start", "period start"],
        data_type: DataType::Date,
    },
    FieldSpec {
        name: "completion_date_award_completion_date",
        description: "Award completion date",
        category: FieldCategory::Dates,
        search_terms: &["completion date", "award completion", "contract end", "work end"],
        data_type: DataType::Date,
    },
    FieldSpec {
        name: "est_ultimate_completion_date_estimated_ultimate_completion_date",
        description: "Estimated ultimate completion date",
        category: FieldCategory::Dates,
        search_terms: &["estimated completion", "ultimate completion", "expected end", "projected end"],
        data_type: DataType::Date,
    },

    // entity
    FieldSpec {
        name: "unique_entity_id_entity_street",
        description: "Street address of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["contractor address", "vendor address", "business address", "street address"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_vendorcountry",
        description: "Vendor country code",
        category: FieldCategory::Entity,
        search_terms: &["vendor country", "contractor country", "business country", "country code"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_entity_phone_number",
        description: "Phone number of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["contractor phone", "vendor phone", "business phone", "phone number"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "unique_entity_id_entity_congressional_district",
        description: "Congressional district of the contractor",
        category: FieldCategory::Entity,
        search_terms: &["congressional district", "contractor district", "vendor district", "political district"],
        data_type: DataType::Text,
    },

    // contract
    FieldSpec {
        name: "reason_for_modification_reason_for_modification",
        description: "Reason for contract modification",
        category: FieldCategory::Contract,
        search_terms: &["modification reason", "change reason", "contract change", "mod reason"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "foreign_funding",
        description: "Whether contract uses foreign funding",
        category: FieldCategory::Contract,
        search_terms: &["foreign funding", "international funding", "foreign money", "overseas funding"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "national_interest_action",
        description: "National interest action designation",
        category: FieldCategory::Contract,
        search_terms: &["national interest", "national security", "critical action", "priority contract"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "cost_or_pricing_data",
        description: "Whether cost or pricing data was required",
        category: FieldCategory::Contract,
        search_terms: &["cost data", "pricing data", "cost analysis", "price analysis"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "purchase_card_used_as_payment_method",
        description: "Whether purchase card was used for payment",
        category: FieldCategory::Contract,
        search_terms: &["purchase card", "government card", "payment method", "card payment"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "undefinitized_action",
        description: "Whether this is an undefinitized action",
        category: FieldCategory::Contract,
        search_terms: &["undefinitized", "not definitized", "pending definition", "temporary contract"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "performance_based_service_acquisition",
        description: "Whether this is a performance-based service acquisition",
        category: FieldCategory::Contract,
        search_terms: &["performance based", "pbsa", "service acquisition", "performance contract"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "emergency_acquisition",
        description: "Whether this is an emergency acquisition",
        category: FieldCategory::Contract,
        search_terms: &["emergency", "urgent", "crisis", "emergency contract"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "contract_financing",
        description: "Type of contract financing used",
        category: FieldCategory::Contract,
        search_terms: &["contract financing", "payment terms", "financing", "payment schedule"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "cost_accounting_standards_clause",
        description: "Cost accounting standards clause",
        category: FieldCategory::Contract,
        search_terms: &["cost accounting", "cas", "accounting standards", "cost standards"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "consolidated_contract",
        description: "Whether this is a consolidated contract",
        category: FieldCategory::Contract,
        search_terms: &["consolidated", "combined contract", "merged contract", "unified contract"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "clingercohen_act",
        description: "Whether Clinger-Cohen Act applies",
        category: FieldCategory::Contract,
        search_terms: &["clinger cohen", "it management", "information technology", "it reform"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "labor_standards",
        description: "Whether labor standards apply",
        category: FieldCategory::Contract,
        search_terms: &["labor standards", "wage requirements", "worker protection", "employment standards"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "materials_supplies_articles_and_equip",
        description: "Whether contract involves materials, supplies, articles, and equipment",
        category: FieldCategory::Contract,
        search_terms: &["materials", "supplies", "equipment", "articles", "goods"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "construction_wage_rate_requirements",
        description: "Whether construction wage rate requirements apply",
        category: FieldCategory::Contract,
        search_terms: &["construction wage", "davis bacon", "prevailing wage", "construction labor"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "interagency_contracting_authority",
        description: "Interagency contracting authority used",
        category: FieldCategory::Contract,
        search_terms: &["interagency", "cross agency", "shared services", "cooperative agreement"],
        data_type: DataType::Text,
    },

    // performance_location
    FieldSpec {
        name: "congressional_district_place_of_performance_congressional_district_place_of_performance",
        description: "Congressional district for place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance district", "work district", "location district", "political district"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "place_of_performance_zip_code4_place_of_performance_zip_code5",
        description: "ZIP code for place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance zip", "work zip", "location zip", "zip code"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "place_of_performance_zip_code4_place_of_performance_zip_code4",
        description: "ZIP+4 code for place of performance",
        category: FieldCategory::PerformanceLocation,
        search_terms: &["performance zip4", "work zip4", "location zip4", "zip+4"],
        data_type: DataType::Text,
    },

    // product_service
    FieldSpec {
        name: "bundled_contract",
        description: "Whether this is a bundled contract",
        category: FieldCategory::ProductService,
        search_terms: &["bundled", "combined services", "package contract", "multiple services"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "dod_acquisition_program_dod_acquisition_program",
        description: "DOD acquisition program code",
        category: FieldCategory::ProductService,
        search_terms: &["dod program", "acquisition program", "defense program", "military program"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "dod_acquisition_program_programsystem_or_equipment_code_description",
        description: "DOD acquisition program description",
        category: FieldCategory::ProductService,
        search_terms: &["dod description", "program description", "defense description", "military description"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "country_of_product_or_service_origin_country_of_product_or_service_origin",
        description: "Country of origin for product or service",
        category: FieldCategory::ProductService,
        search_terms: &["origin country", "product origin", "service origin", "country of origin"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "country_of_product_or_service_origin_country_of_product_or_service_origin_for_display",
        description: "Display name for country of origin",
        category: FieldCategory::ProductService,
        search_terms: &["origin display", "product origin display", "service origin display"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "place_of_manufacture",
        description: "Place of manufacture for the product",
        category: FieldCategory::ProductService,
        search_terms: &["manufacture", "manufacturing location", "production location", "made in"],
        data_type: DataType::Text,
    },

    // entity
    FieldSpec {
        name: "domestic_or_foreign_entity",
        description: "Whether the entity is domestic or foreign",
        category: FieldCategory::Entity,
        search_terms: &["domestic", "foreign", "u.s. owned", "foreign owned", "entity type"],
        data_type: DataType::Text,
    },

    // product_service
    FieldSpec {
        name: "recovered_materialssustainability",
        description: "Recovered materials and sustainability information",
        category: FieldCategory::ProductService,
        search_terms: &["recovered materials", "sustainability", "green", "environmental", "recycled"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "information_technology_commercial_category",
        description: "Information technology commercial category",
        category: FieldCategory::ProductService,
        search_terms: &["it", "information technology", "software", "hardware", "technology"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "claimant_program_code_claimant_program_code",
        description: "Claimant program code",
        category: FieldCategory::ProductService,
        search_terms: &["claimant program", "program code", "claimant", "program identifier"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "claimant_program_code_claimant_program_code_description",
        description: "Claimant program code description",
        category: FieldCategory::ProductService,
        search_terms: &["claimant description", "program description", "claimant program description"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "sea_transportation",
        description: "Sea transportation information",
        category: FieldCategory::ProductService,
        search_terms: &["sea transportation", "maritime", "shipping", "ocean transport"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "gfp_provided_under_this_action",
        description: "Government furnished property provided under this action",
        category: FieldCategory::ProductService,
        search_terms: &["gfp", "government furnished", "government property", "furnished property"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "use_of_epa_designated_products",
        description: "Use of EPA designated products",
        category: FieldCategory::ProductService,
        search_terms: &["epa", "environmental protection", "designated products", "green products"],
        data_type: DataType::Text,
    },

    // competition
    FieldSpec {
        name: "source_selection_process",
        description: "Source selection process used",
        category: FieldCategory::Competition,
        search_terms: &["source selection", "selection process", "evaluation process", "award process"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "solicitation_procedures",
        description: "Solicitation procedures used",
        category: FieldCategory::Competition,
        search_terms: &["solicitation", "procurement procedures", "bidding process", "request process"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "idv_type_of_set_aside_idv_type_of_set_aside",
        description: "IDV type of set aside",
        category: FieldCategory::Competition,
        search_terms: &["idv set aside", "delivery vehicle set aside", "vehicle set aside"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "type_of_set_aside_source_type_of_set_aside_source",
        description: "Source of the set aside type",
        category: FieldCategory::Competition,
        search_terms: &["set aside source", "set aside origin", "set aside authority"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "evaluated_preference",
        description: "Evaluated preference used",
        category: FieldCategory::Competition,
        search_terms: &["evaluated preference", "preference", "evaluation preference", "award preference"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "sbirsttr",
        description: "SBIR/STTR information",
        category: FieldCategory::Competition,
        search_terms: &["sbir", "sttr", "small business innovation", "research"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "fair_opportunitylimited_sources",
        description: "Fair opportunity or limited sources",
        category: FieldCategory::Competition,
        search_terms: &["fair opportunity", "limited sources", "competitive set aside", "restricted competition"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "other_than_full_and_open_competition",
        description: "Other than full and open competition",
        category: FieldCategory::Competition,
        search_terms: &["other than full", "non-competitive", "limited competition", "restricted"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "local_area_set_aside",
        description: "Local area set aside",
        category: FieldCategory::Competition,
        search_terms: &["local area", "geographic set aside", "local preference", "area preference"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "contract_opportunities_notice",
        description: "Contract opportunities notice",
        category: FieldCategory::Competition,
        search_terms: &["opportunities notice", "contract notice", "solicitation notice", "bid notice"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "a76_action",
        description: "A-76 action",
        category: FieldCategory::Competition,
        search_terms: &["a76", "circular a-76", "commercial activities", "outsourcing"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "commercial_products_and_services_acquisition_procedures",
        description: "Commercial products and services acquisition procedures",
        category: FieldCategory::Competition,
        search_terms: &["commercial procedures", "commercial acquisition", "commercial products", "commercial services"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "number_of_offers_received_number_of_offers_source",
        description: "Source of number of offers received",
        category: FieldCategory::Competition,
        search_terms: &["offers source", "bids source", "proposals source", "responses source"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "simplified_procedures_for_certain_commercial_products_and_commercial_services",
        description: "Simplified procedures for commercial products and services",
        category: FieldCategory::Competition,
        search_terms: &["simplified procedures", "commercial simplified", "streamlined procedures"],
        data_type: DataType::Text,
    },
    FieldSpec {
        name: "subcontract_plan",
        description: "Subcontract plan",
        category: FieldCategory::Competition,
        search_terms: &["subcontract", "subcontracting", "subcontract plan", "subcontracting plan"],
        data_type: DataType::Text,
    },
];
