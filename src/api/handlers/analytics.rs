use axum::extract::{Query, State};
use axum::Json;

use super::FilterQuery;
use crate::analytics::series::{self, DailyPoint, RoiPoint};
use crate::AppState;

/// Daily totals of uv, gmv and cost, plus the day's ROI.
pub async fn daily(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<DailyPoint>> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);
    Json(series::daily_series(&records))
}

/// ROI trend: per date, (gmv - cost) / cost, null for zero-spend days.
pub async fn roi_trend(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<RoiPoint>> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);
    Json(series::roi_series(&records))
}
