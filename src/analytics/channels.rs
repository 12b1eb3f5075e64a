use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::SalesRecord;

/// Per-channel rollup backing the dashboard's summary table.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub channel: String,
    pub uv: i64,
    pub pv: i64,
    pub gmv: Decimal,
    pub cost: Decimal,
    pub orders: i64,
    pub clicks: Option<i64>,
    pub conversion_rate: Option<Decimal>,
    pub roi: Option<Decimal>,
    pub gmv_share: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionPoint {
    pub channel: String,
    pub date: NaiveDate,
    pub orders: i64,
    pub conversion_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelShare {
    pub channel: String,
    pub gmv: Decimal,
    pub share: Decimal,
}

#[derive(Default)]
struct Acc {
    uv: i64,
    pv: i64,
    gmv: Decimal,
    cost: Decimal,
    orders: i64,
    clicks: i64,
    has_clicks: bool,
}

impl Acc {
    fn add(&mut self, r: &SalesRecord) {
        self.uv += r.uv;
        self.pv += r.pv;
        self.gmv += r.gmv;
        self.cost += r.cost;
        self.orders += r.orders;
        if let Some(c) = r.clicks {
            self.clicks += c;
            self.has_clicks = true;
        }
    }

    /// orders / clicks, falling back to orders / uv when no record in the
    /// group carried a clicks value. Zero denominator reports as None.
    fn conversion_rate(&self) -> Option<Decimal> {
        let denominator = if self.has_clicks { self.clicks } else { self.uv };
        super::ratio(Decimal::from(self.orders), Decimal::from(denominator))
    }
}

/// Per-channel totals with derived rates, sorted by channel name.
pub fn channel_summaries(records: &[&SalesRecord]) -> Vec<ChannelSummary> {
    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for record in records {
        groups.entry(record.channel.clone()).or_default().add(record);
    }

    let total_gmv: Decimal = groups.values().map(|a| a.gmv).sum();

    groups
        .into_iter()
        .map(|(channel, acc)| ChannelSummary {
            channel,
            uv: acc.uv,
            pv: acc.pv,
            gmv: acc.gmv,
            cost: acc.cost,
            orders: acc.orders,
            clicks: acc.has_clicks.then_some(acc.clicks),
            conversion_rate: acc.conversion_rate(),
            roi: super::roi(acc.gmv, acc.cost),
            // All shares are 0 when nothing was sold at all.
            gmv_share: super::ratio(acc.gmv, total_gmv).unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Conversion rate per (channel, date) group, ordered by channel then date.
pub fn conversion_by_channel(records: &[&SalesRecord]) -> Vec<ConversionPoint> {
    let mut groups: BTreeMap<(String, NaiveDate), Acc> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.channel.clone(), record.date))
            .or_default()
            .add(record);
    }

    groups
        .into_iter()
        .map(|((channel, date), acc)| ConversionPoint {
            channel,
            date,
            orders: acc.orders,
            conversion_rate: acc.conversion_rate(),
        })
        .collect()
}

/// Each channel's share of total gmv. Shares sum to 1 when the grand total
/// is positive; they are all 0 when it is 0.
pub fn gmv_shares(records: &[&SalesRecord]) -> Vec<ChannelShare> {
    channel_summaries(records)
        .into_iter()
        .map(|s| ChannelShare {
            channel: s.channel,
            gmv: s.gmv,
            share: s.gmv_share,
        })
        .collect()
}
