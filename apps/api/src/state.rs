use crate::query::helper::QueryHelper;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Question → filter → store → report pipeline. Holds the model client,
    /// the contract store and the field catalogue.
    pub query_helper: QueryHelper,
}
