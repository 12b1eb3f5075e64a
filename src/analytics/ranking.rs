use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::SalesRecord;

/// One category in the top-ROI ranking. Only categories with spend appear:
/// a zero-cost category has undefined ROI and cannot be ordered.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRoi {
    pub category: String,
    pub gmv: Decimal,
    pub cost: Decimal,
    pub roi: Decimal,
}

/// Channel x category cell of the combo analysis table.
#[derive(Debug, Clone, Serialize)]
pub struct ComboRoi {
    pub channel: String,
    pub category: String,
    pub gmv: Decimal,
    pub cost: Decimal,
    pub roi: Option<Decimal>,
}

/// Top categories by ROI, non-increasing, with category-name ascending
/// tie-break. Returns at most `limit` entries.
pub fn top_roi_categories(records: &[&SalesRecord], limit: usize) -> Vec<CategoryRoi> {
    let mut groups: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.category().to_string()).or_default();
        entry.0 += record.gmv;
        entry.1 += record.cost;
    }

    let mut ranked: Vec<CategoryRoi> = groups
        .into_iter()
        .filter_map(|(category, (gmv, cost))| {
            super::roi(gmv, cost).map(|roi| CategoryRoi {
                category,
                gmv,
                cost,
                roi,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.roi.cmp(&a.roi).then_with(|| a.category.cmp(&b.category)));
    ranked.truncate(limit);
    ranked
}

/// ROI per (channel, category) pair, sorted by ROI descending with
/// undefined-ROI pairs last.
pub fn combo_roi(records: &[&SalesRecord]) -> Vec<ComboRoi> {
    let mut groups: BTreeMap<(String, String), (Decimal, Decimal)> = BTreeMap::new();
    for record in records {
        let key = (record.channel.clone(), record.category().to_string());
        let entry = groups.entry(key).or_default();
        entry.0 += record.gmv;
        entry.1 += record.cost;
    }

    let mut combos: Vec<ComboRoi> = groups
        .into_iter()
        .map(|((channel, category), (gmv, cost))| ComboRoi {
            roi: super::roi(gmv, cost),
            channel,
            category,
            gmv,
            cost,
        })
        .collect();

    combos.sort_by(|a, b| match (&b.roi, &a.roi) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (None, None) => std::cmp::Ordering::Equal,
    });
    combos
}
