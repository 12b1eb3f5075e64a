use axum::extract::{Query, State};
use axum::Json;

use super::FilterQuery;
use crate::analytics::channels::{self, ChannelShare, ChannelSummary, ConversionPoint};
use crate::AppState;

/// Per-channel rollup: sums plus conversion rate, ROI and gmv share.
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<ChannelSummary>> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);
    Json(channels::channel_summaries(&records))
}

/// Conversion rate per (channel, date) group.
pub async fn conversion(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<ConversionPoint>> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);
    Json(channels::conversion_by_channel(&records))
}

/// Each channel's share of total gmv.
pub async fn share(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<ChannelShare>> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);
    Json(channels::gmv_shares(&records))
}
