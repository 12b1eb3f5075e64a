use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::FilterQuery;
use crate::analytics::ranking::{self, CategoryRoi, ComboRoi};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RankingQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub channels: Option<String>,
    pub limit: Option<usize>,
}

impl RankingQuery {
    pub fn split(self) -> (FilterQuery, Option<usize>) {
        (
            FilterQuery {
                from: self.from,
                to: self.to,
                channels: self.channels,
            },
            self.limit,
        )
    }
}

/// Top product categories by ROI, default limit from config (10).
pub async fn top_roi(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Json<Vec<CategoryRoi>> {
    let (filter, limit) = query.split();
    let limit = limit.unwrap_or(state.config.top_roi_limit);

    let dataset = state.dataset.read().await;
    let records = filter.into_filter().apply(&dataset.records);
    Json(ranking::top_roi_categories(&records, limit))
}

/// Channel x category combo ROI table, best combinations first.
pub async fn combo(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<ComboRoi>> {
    let dataset = state.dataset.read().await;
    let records = query.into_filter().apply(&dataset.records);
    Json(ranking::combo_roi(&records))
}
