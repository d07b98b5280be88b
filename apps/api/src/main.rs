mod config;
mod db;
mod errors;
mod fields;
mod llm_client;
mod models;
mod query;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::MongoContractStore;
use crate::fields::FieldCatalogue;
use crate::llm_client::LlmClient;
use crate::query::helper::QueryHelper;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Ask-FPDS API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize MongoDB
    let store = MongoContractStore::connect(&config).await?;

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.openai_model.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    let catalogue = FieldCatalogue::new();
    info!(
        "Field catalogue loaded: {} fields in {} categories",
        catalogue.fields().len(),
        catalogue.categories().len()
    );

    // Build app state
    let state = AppState {
        query_helper: QueryHelper::new(Arc::new(llm), Arc::new(store), catalogue),
    };

    let origin: HeaderValue = config
        .cors_allowed_origin
        .parse()
        .context("CORS_ALLOWED_ORIGIN must be a valid header value")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
