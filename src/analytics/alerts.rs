use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::SalesRecord;

/// A (date, channel) whose spend stands out against the channel's mean
/// daily spend. `ratio` > 1 means above average.
#[derive(Debug, Clone, Serialize)]
pub struct CostAlert {
    pub date: NaiveDate,
    pub channel: String,
    pub cost: Decimal,
    pub mean_cost: Decimal,
    pub ratio: Decimal,
}

/// Rank (date, channel) spend against each channel's mean daily spend and
/// return the `limit` most anomalous days. Channels that never spent
/// anything have no meaningful baseline and are skipped.
pub fn cost_anomalies(records: &[&SalesRecord], limit: usize) -> Vec<CostAlert> {
    let mut daily: BTreeMap<(String, NaiveDate), Decimal> = BTreeMap::new();
    for record in records {
        *daily
            .entry((record.channel.clone(), record.date))
            .or_default() += record.cost;
    }

    // Mean of each channel's daily cost sums.
    let mut totals: BTreeMap<&str, (Decimal, i64)> = BTreeMap::new();
    for ((channel, _), cost) in &daily {
        let entry = totals.entry(channel.as_str()).or_default();
        entry.0 += *cost;
        entry.1 += 1;
    }
    let means: BTreeMap<String, Decimal> = totals
        .into_iter()
        .map(|(channel, (sum, days))| (channel.to_string(), sum / Decimal::from(days)))
        .collect();

    let mut alerts: Vec<CostAlert> = daily
        .into_iter()
        .filter_map(|((channel, date), cost)| {
            let mean = means.get(&channel).copied()?;
            let ratio = super::ratio(cost, mean)?;
            Some(CostAlert {
                date,
                channel,
                cost,
                mean_cost: mean,
                ratio,
            })
        })
        .collect();

    alerts.sort_by(|a, b| b.ratio.cmp(&a.ratio).then_with(|| a.channel.cmp(&b.channel)));
    alerts.truncate(limit);
    alerts
}
