//! Axum route handlers for the query API.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::query::{BaseResponse, QueryRequest, QueryResults};
use crate::state::AppState;

/// POST /ask_fpds/api/v1/query
///
/// Answers a natural-language FPDS question with a cited prose report.
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<BaseResponse<QueryResults>>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let answer = state.query_helper.answer(&request.question).await?;

    info!(
        "Answered query with {} results, filter: {}",
        answer.results_count,
        serde_json::to_string(&answer.mongo_filter).unwrap_or_default()
    );
    debug!("Formatted response:\n{}", answer.formatted_response);

    Ok(Json(BaseResponse::ok(
        "return questions answer",
        QueryResults {
            results: answer.formatted_response,
        },
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::fields::FieldCatalogue;
    use crate::llm_client::LlmError;
    use crate::query::helper::tests::{FixedStore, ScriptedLlm};
    use crate::query::helper::QueryHelper;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app(replies: Vec<Result<String, LlmError>>, store: FixedStore) -> Router {
        let helper = QueryHelper::new(
            Arc::new(ScriptedLlm::new(replies)),
            Arc::new(store),
            FieldCatalogue::new(),
        );
        build_router(AppState {
            query_helper: helper,
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_query(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask_fpds/api/v1/query")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_payload_is_fixed() {
        let request = Request::builder()
            .uri("/ask_fpds/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(vec![], FixedStore::failing()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "healthy", "message": "FPDS API is running"})
        );
    }

    #[tokio::test]
    async fn test_query_returns_formatted_results() {
        let app = app(
            vec![
                Ok(r#"{"filter": {"type_of_set_aside": {"$regex": "8a"}}, "explanation": "8(a)"}"#.to_string()),
                Ok("Found 1 award. Award ID: 9700-N0001".to_string()),
            ],
            FixedStore::with_results(vec![json!({
                "award_id_agency_id": "9700",
                "award_id_procurement_identifier": "N0001"
            })]),
        );

        let (status, body) = send(app, post_query(json!({"question": "8a awards"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status_code": 200,
                "description": "return questions answer",
                "data": {"results": "Found 1 award. Award ID: 9700-N0001"}
            })
        );
    }

    #[tokio::test]
    async fn test_query_returns_500_when_helper_fails() {
        let app = app(
            vec![
                Ok(r#"{"filter": {}}"#.to_string()),
                Err(LlmError::RateLimited { retries: 3 }),
            ],
            FixedStore::with_results(vec![]),
        );

        let (status, body) = send(app, post_query(json!({"question": "NASA awards"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Failed to process query"}));
    }

    #[tokio::test]
    async fn test_store_outage_still_answers() {
        let app = app(
            vec![
                Ok(r#"{"filter": {}}"#.to_string()),
                Ok("No awards matched.".to_string()),
            ],
            FixedStore::failing(),
        );

        let (status, body) = send(app, post_query(json!({"question": "NASA awards"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["results"], "No awards matched.");
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let app = app(vec![], FixedStore::with_results(vec![]));
        let (status, body) = send(app, post_query(json!({"question": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "question cannot be empty");
    }

    #[tokio::test]
    async fn test_missing_question_is_client_error() {
        let app = app(vec![], FixedStore::with_results(vec![]));
        let (status, _) = send(app, post_query(json!({"prompt": "NASA"}))).await;
        assert!(status.is_client_error());
    }
}
