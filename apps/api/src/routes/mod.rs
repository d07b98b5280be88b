pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::query::handlers;
use crate::state::AppState;

pub const API_PREFIX: &str = "/ask_fpds/api/v1";

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/query", post(handlers::handle_query));

    Router::new().nest(API_PREFIX, api).with_state(state)
}
