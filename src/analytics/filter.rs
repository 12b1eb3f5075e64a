use chrono::NaiveDate;

use crate::models::SalesRecord;

/// Date-range and channel filter applied before every aggregation.
/// Both bounds are inclusive; an empty channel list means "all channels".
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub channels: Vec<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &SalesRecord) -> bool {
        if let Some(from) = self.from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.date > to {
                return false;
            }
        }
        if !self.channels.is_empty() && !self.channels.iter().any(|c| c == &record.channel) {
            return false;
        }
        true
    }

    /// Borrowing view of the records that pass this filter.
    pub fn apply<'a>(&self, records: &'a [SalesRecord]) -> Vec<&'a SalesRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(date: &str, channel: &str) -> SalesRecord {
        SalesRecord {
            date: date.parse().unwrap(),
            channel: channel.into(),
            product_name: "beauty_mask001".into(),
            uv: 1,
            pv: 1,
            gmv: Decimal::ONE,
            cost: Decimal::ONE,
            orders: 1,
            clicks: None,
            gross_margin: None,
        }
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let filter = RecordFilter {
            from: Some("2024-01-02".parse().unwrap()),
            to: Some("2024-01-03".parse().unwrap()),
            channels: vec![],
        };
        assert!(!filter.matches(&record("2024-01-01", "Google")));
        assert!(filter.matches(&record("2024-01-02", "Google")));
        assert!(filter.matches(&record("2024-01-03", "Google")));
        assert!(!filter.matches(&record("2024-01-04", "Google")));
    }

    #[test]
    fn test_channel_multi_select() {
        let filter = RecordFilter {
            channels: vec!["Google".into(), "Douyin".into()],
            ..Default::default()
        };
        assert!(filter.matches(&record("2024-01-01", "Google")));
        assert!(filter.matches(&record("2024-01-01", "Douyin")));
        assert!(!filter.matches(&record("2024-01-01", "Weibo")));
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = RecordFilter::default();
        assert!(filter.matches(&record("2024-01-01", "Google")));
    }
}
