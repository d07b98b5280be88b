use anyhow::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::FindOptions;
use mongodb::{Client, Collection, IndexModel};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;

/// Fields that get a single-key ascending index at startup.
const INDEXED_FIELDS: &[&str] = &[
    // agency
    "contracting_office_agency_id_contracting_office_agency_name",
    "funding_agency_id_funding_or_requesting_agency_name",
    // dates
    "date_signed_date_signed",
    "date_signed_award_completion_date",
    "date_signed_estimated_ultimate_completion_date",
    // financial
    "action_obligation_total_obligation_amount",
    "base_and_exercised_options_value_total_base_and_excercised_options_value",
    // entity
    "unique_entity_id_legal_business_name",
    "unique_entity_id_entity_state",
    "unique_entity_id_entity_city",
    // place of performance
    "principal_place_of_performance_code_principal_place_of_performance_state_code",
    "principal_place_of_performance_city_name_principal_place_of_performance_city_name",
    // contract type
    "type_of_contract",
    "award_type_display",
    "type_of_set_aside",
];

/// Fields covered by the collection's full-text index.
const TEXT_INDEXED_FIELDS: &[&str] = &[
    "contracting_office_agency_id_contracting_office_agency_name",
    "unique_entity_id_legal_business_name",
    "productservice_code_product_or_service_code_description",
    "nature_of_services",
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// A resolved find: filter plus optional sort and limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractQuery {
    pub filter: Document,
    pub sort: Option<Document>,
    pub limit: Option<i64>,
}

/// Read access to the contract award collection.
#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Runs `query` and returns each matching award as relaxed extended JSON.
    async fn find(&self, query: ContractQuery) -> Result<Vec<Value>, StoreError>;
}

pub struct MongoContractStore {
    collection: Collection<Document>,
}

impl MongoContractStore {
    /// Connects to MongoDB and makes sure the query indexes exist.
    pub async fn connect(config: &Config) -> Result<Self> {
        info!("Connecting to MongoDB...");

        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let collection = client
            .database(&config.mongo_database)
            .collection::<Document>(&config.mongo_collection);

        info!(
            "MongoDB collection ready: {}.{}",
            config.mongo_database, config.mongo_collection
        );

        let store = Self { collection };
        store.create_indexes().await;
        Ok(store)
    }

    /// Index failures are logged, never fatal.
    async fn create_indexes(&self) {
        if let Err(e) = self.collection.create_indexes(index_models(), None).await {
            error!("Error creating indexes: {e}");
            return;
        }
        info!("Indexes created successfully");
    }
}

fn index_models() -> Vec<IndexModel> {
    let mut models: Vec<IndexModel> = INDEXED_FIELDS
        .iter()
        .map(|field| {
            let mut keys = Document::new();
            keys.insert(*field, 1);
            IndexModel::builder().keys(keys).build()
        })
        .collect();

    let mut text_keys = Document::new();
    for field in TEXT_INDEXED_FIELDS {
        text_keys.insert(*field, "text");
    }
    models.push(IndexModel::builder().keys(text_keys).build());
    models
}

#[async_trait]
impl ContractStore for MongoContractStore {
    async fn find(&self, query: ContractQuery) -> Result<Vec<Value>, StoreError> {
        let options = FindOptions::builder()
            .sort(query.sort)
            .limit(query.limit)
            .build();

        let cursor = self.collection.find(query.filter, options).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .map(|doc| Bson::Document(doc).into_relaxed_extjson())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_models_cover_fields_and_text_index() {
        let models = index_models();
        assert_eq!(models.len(), INDEXED_FIELDS.len() + 1);

        let text = &models.last().unwrap().keys;
        assert_eq!(text.len(), TEXT_INDEXED_FIELDS.len());
        assert_eq!(text.get_str("nature_of_services").unwrap(), "text");

        let first = &models[0].keys;
        assert_eq!(
            first.get_i32("contracting_office_agency_id_contracting_office_agency_name").unwrap(),
            1
        );
    }
}
