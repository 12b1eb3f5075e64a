use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::SalesRecord;

/// One day of the dashboard's trend charts: total traffic, value, spend,
/// and the day's ROI (null when the day had no spend).
#[derive(Debug, Clone, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub uv: i64,
    pub gmv: Decimal,
    pub cost: Decimal,
    pub roi: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoiPoint {
    pub date: NaiveDate,
    pub roi: Option<Decimal>,
}

#[derive(Default)]
struct DayAcc {
    uv: i64,
    gmv: Decimal,
    cost: Decimal,
}

/// Daily totals of uv/gmv/cost plus per-day ROI, ordered by date ascending.
pub fn daily_series(records: &[&SalesRecord]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, DayAcc> = BTreeMap::new();

    for record in records {
        let acc = days.entry(record.date).or_default();
        acc.uv += record.uv;
        acc.gmv += record.gmv;
        acc.cost += record.cost;
    }

    days.into_iter()
        .map(|(date, acc)| DailyPoint {
            date,
            uv: acc.uv,
            gmv: acc.gmv,
            cost: acc.cost,
            roi: super::roi(acc.gmv, acc.cost),
        })
        .collect()
}

/// The ROI trend alone, for the dedicated trend chart.
pub fn roi_series(records: &[&SalesRecord]) -> Vec<RoiPoint> {
    daily_series(records)
        .into_iter()
        .map(|p| RoiPoint {
            date: p.date,
            roi: p.roi,
        })
        .collect()
}
