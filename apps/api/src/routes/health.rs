use axum::Json;
use serde_json::{json, Value};

/// GET /ask_fpds/api/v1/health
/// Returns a fixed liveness payload.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "FPDS API is running"
    }))
}
