//! Query pipeline: question → model filter → document store → model report.

use std::sync::Arc;

use mongodb::bson::Document;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::db::{ContractQuery, ContractStore};
use crate::errors::AppError;
use crate::fields::FieldCatalogue;
use crate::llm_client::{ChatCompletion, ChatPrompt};
use crate::query::dates::to_bson_filter;
use crate::query::intent::enhance_question;
use crate::query::parse::{parse_filter_reply, FilterSpec};
use crate::query::prompts::{filter_prompt, format_prompt, FILTER_SYSTEM, FORMAT_SYSTEM};
use crate::query::sanitize::sanitize_set_aside_filters;
use crate::query::summary::summarize_results;

pub const DEFAULT_SORT_FIELD: &str = "date_signed_award_completion_date";
pub const DEFAULT_LIMIT: i64 = 100;
const MAX_TOKENS: u32 = 1500;
const FILTER_TEMPERATURE: f32 = 0.1;
const FORMAT_TEMPERATURE: f32 = 0.3;
/// Raw records echoed back alongside the report.
const RAW_RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct QueryAnswer {
    pub query: String,
    pub mongo_filter: FilterSpec,
    pub results_count: usize,
    pub formatted_response: String,
    pub raw_results: Vec<Value>,
}

#[derive(Clone)]
pub struct QueryHelper {
    llm: Arc<dyn ChatCompletion>,
    store: Arc<dyn ContractStore>,
    catalogue: FieldCatalogue,
}

impl QueryHelper {
    pub fn new(
        llm: Arc<dyn ChatCompletion>,
        store: Arc<dyn ContractStore>,
        catalogue: FieldCatalogue,
    ) -> Self {
        Self {
            llm,
            store,
            catalogue,
        }
    }

    /// Runs the full pipeline. Only the final report call can fail; filter
    /// generation and the store lookup degrade to empty results instead.
    pub async fn answer(&self, question: &str) -> Result<QueryAnswer, AppError> {
        let mongo_filter = self.parse_question_to_filter(question).await;
        let results = self.execute_filter(&mongo_filter).await;
        let formatted_response = self
            .format_results(question, &results, &mongo_filter)
            .await?;

        Ok(QueryAnswer {
            query: question.to_string(),
            results_count: results.len(),
            mongo_filter,
            formatted_response,
            raw_results: results.into_iter().take(RAW_RESULT_LIMIT).collect(),
        })
    }

    /// Asks the model for a filter and strips disallowed set-aside fields.
    pub async fn parse_question_to_filter(&self, question: &str) -> FilterSpec {
        let enhanced = enhance_question(question);
        let prompt = filter_prompt(&enhanced, &self.catalogue);

        let reply = self
            .llm
            .complete(ChatPrompt {
                system: FILTER_SYSTEM,
                user: &prompt,
                temperature: FILTER_TEMPERATURE,
                max_tokens: MAX_TOKENS,
            })
            .await;

        match reply {
            Ok(text) => sanitize_set_aside_filters(parse_filter_reply(&text)),
            Err(e) => {
                error!("LLM query parsing failed: {e}");
                FilterSpec::default()
            }
        }
    }

    /// Runs `spec` against the store. Store failures yield no results.
    pub async fn execute_filter(&self, spec: &FilterSpec) -> Vec<Value> {
        let query = build_contract_query(spec);

        match self.store.find(query).await {
            Ok(mut results) => {
                self.catalogue.ensure_award_id_fields(&mut results);
                info!("Query returned {} results", results.len());
                results
            }
            Err(e) => {
                error!("Error executing MongoDB query: {e}");
                Vec::new()
            }
        }
    }

    pub async fn format_results(
        &self,
        question: &str,
        results: &[Value],
        spec: &FilterSpec,
    ) -> Result<String, AppError> {
        let summary = summarize_results(results);
        let prompt = format_prompt(
            question,
            spec.explanation.as_deref(),
            results.len(),
            &summary,
        );

        let report = self
            .llm
            .complete(ChatPrompt {
                system: FORMAT_SYSTEM,
                user: &prompt,
                temperature: FORMAT_TEMPERATURE,
                max_tokens: MAX_TOKENS,
            })
            .await?;
        Ok(report)
    }
}

/// Applies the default sort (latest completion first) and limit.
///
/// An explicit null or empty sort means unsorted; a limit of zero or less
/// means unlimited.
pub fn build_contract_query(spec: &FilterSpec) -> ContractQuery {
    let sort = match &spec.sort {
        None => {
            let mut sort = Document::new();
            sort.insert(DEFAULT_SORT_FIELD, -1);
            Some(sort)
        }
        Some(None) => None,
        Some(Some(sort)) if sort.is_empty() => None,
        Some(Some(sort)) => Some(to_bson_filter(Value::Object(sort.clone()))),
    };

    let limit = match spec.limit {
        None => Some(DEFAULT_LIMIT),
        Some(n) if n <= 0 => None,
        Some(n) => Some(n),
    };

    ContractQuery {
        filter: to_bson_filter(spec.filter.clone()),
        sort,
        limit,
    }
}
