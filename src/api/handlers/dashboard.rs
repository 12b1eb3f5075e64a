use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::FilterQuery;
use crate::analytics;
use crate::AppState;

#[derive(Serialize)]
pub struct DashboardSummary {
    pub records: usize,
    pub discarded: usize,
    pub channels: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub total_uv: i64,
    pub total_orders: i64,
    pub total_gmv: Decimal,
    pub total_cost: Decimal,
    pub overall_roi: Option<Decimal>,
}

pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<DashboardSummary> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);

    let total_uv: i64 = records.iter().map(|r| r.uv).sum();
    let total_orders: i64 = records.iter().map(|r| r.orders).sum();
    let total_gmv: Decimal = records.iter().map(|r| r.gmv).sum();
    let total_cost: Decimal = records.iter().map(|r| r.cost).sum();

    let mut channels: Vec<&str> = records.iter().map(|r| r.channel.as_str()).collect();
    channels.sort();
    channels.dedup();

    Json(DashboardSummary {
        records: records.len(),
        discarded: dataset.report.discarded,
        channels: channels.len(),
        first_date: records.iter().map(|r| r.date).min(),
        last_date: records.iter().map(|r| r.date).max(),
        total_uv,
        total_orders,
        total_gmv,
        total_cost,
        overall_roi: analytics::roi(total_gmv, total_cost),
    })
}
