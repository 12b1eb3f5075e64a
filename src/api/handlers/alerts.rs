use axum::extract::{Query, State};
use axum::Json;

use super::products::RankingQuery;
use crate::analytics::alerts::{self, CostAlert};
use crate::AppState;

/// Days whose channel spend stands out most against the channel's mean,
/// default limit from config (5).
pub async fn cost(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Json<Vec<CostAlert>> {
    let (filter, limit) = query.split();
    let limit = limit.unwrap_or(state.config.cost_alert_limit);

    let dataset = state.dataset.read().await;
    let records = filter.into_filter().apply(&dataset.records);
    Json(alerts::cost_anomalies(&records, limit))
}
