use axum::extract::State;
use axum::Json;

use crate::models::LoadReport;
use crate::AppState;

/// Discard report of the last load: how many rows made it in, how many
/// were dropped, and a sample of the row errors.
pub async fn report(State(state): State<AppState>) -> Json<LoadReport> {
    let dataset = state.dataset.read().await;
    Json(dataset.report.clone())
}

/// Distinct channel names, for populating the dashboard's multi-select.
pub async fn channels(State(state): State<AppState>) -> Json<Vec<String>> {
    let dataset = state.dataset.read().await;
    Json(dataset.channels())
}
