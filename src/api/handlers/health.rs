use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = state.dataset.read().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "records": dataset.records.len(),
            "discarded": dataset.report.discarded,
            "loaded_at": dataset.loaded_at,
        })),
    )
}
