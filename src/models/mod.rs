use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to product names that carry no underscore prefix.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

// ---------------------------------------------------------------------------
// SalesRecord — one CSV row, immutable once loaded
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub channel: String,
    pub product_name: String,
    pub uv: i64,
    pub pv: i64,
    pub gmv: Decimal,
    pub cost: Decimal,
    pub orders: i64,
    pub clicks: Option<i64>,
    pub gross_margin: Option<Decimal>,
}

impl SalesRecord {
    /// Product category: the prefix before the first underscore.
    /// Names without an underscore fall into `Unknown`.
    pub fn category(&self) -> &str {
        match self.product_name.split_once('_') {
            Some((prefix, _)) => prefix,
            None => UNKNOWN_CATEGORY,
        }
    }
}

impl fmt::Display for SalesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record: date={} channel={} product={} gmv={} cost={} orders={}",
            self.date, self.channel, self.product_name, self.gmv, self.cost, self.orders,
        )
    }
}

// ---------------------------------------------------------------------------
// LoadReport — outcome of one CSV ingestion pass
// ---------------------------------------------------------------------------

/// Row-level outcome of a dataset load. Malformed rows never abort the
/// load; they are counted here with a bounded sample of their errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub discarded: usize,
    pub errors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dataset — the in-memory table served by the API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub records: Vec<SalesRecord>,
    pub report: LoadReport,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>, report: LoadReport) -> Self {
        Self {
            records,
            report,
            loaded_at: Utc::now(),
        }
    }

    /// First and last observation dates, None when the dataset is empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// Distinct channel names, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut channels: Vec<String> =
            self.records.iter().map(|r| r.channel.clone()).collect();
        channels.sort();
        channels.dedup();
        channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product_name: &str) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            channel: "Google".into(),
            product_name: product_name.into(),
            uv: 0,
            pv: 0,
            gmv: Decimal::ZERO,
            cost: Decimal::ZERO,
            orders: 0,
            clicks: None,
            gross_margin: None,
        }
    }

    #[test]
    fn test_category_prefix() {
        assert_eq!(record("beauty_mask001").category(), "beauty");
        assert_eq!(record("home_lamp_deluxe").category(), "home");
    }

    #[test]
    fn test_category_no_underscore() {
        assert_eq!(record("standalone").category(), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_date_span() {
        let mut a = record("a_1");
        a.date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let b = record("b_1");
        let ds = Dataset::new(vec![a, b], LoadReport::default());
        let (min, max) = ds.date_span().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }
}
