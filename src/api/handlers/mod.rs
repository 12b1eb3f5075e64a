pub mod alerts;
pub mod analytics;
pub mod channels;
pub mod control;
pub mod dashboard;
pub mod dataset;
pub mod health;
pub mod metrics;
pub mod products;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::analytics::RecordFilter;

/// Query parameters shared by every analytics endpoint: an inclusive date
/// range plus a comma-separated channel multi-select.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub channels: Option<String>,
}

impl FilterQuery {
    pub fn into_filter(self) -> RecordFilter {
        let channels = self
            .channels
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        RecordFilter {
            from: self.from,
            to: self.to,
            channels,
        }
    }
}
