use std::path::Path;

use chrono::NaiveDate;
use metrics::{counter, gauge};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Dataset, LoadReport, SalesRecord};

/// How many row-level error messages the load report keeps verbatim.
/// Everything beyond this is still counted, just not echoed back.
const ERROR_SAMPLE_LIMIT: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// One CSV row as written in the input file. `clicks` and `gross_margin`
/// are optional columns; an absent header or an empty cell both map to None.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: NaiveDate,
    channel: String,
    product_name: String,
    uv: i64,
    pv: i64,
    gmv: Decimal,
    cost: Decimal,
    orders: i64,
    #[serde(default)]
    clicks: Option<i64>,
    #[serde(default)]
    gross_margin: Option<Decimal>,
}

impl RawRow {
    fn validate(self) -> Result<SalesRecord, String> {
        if self.channel.trim().is_empty() {
            return Err("empty channel".into());
        }
        if self.product_name.trim().is_empty() {
            return Err("empty product_name".into());
        }
        if self.uv < 0 || self.pv < 0 || self.orders < 0 {
            return Err("negative count field".into());
        }
        if self.gmv < Decimal::ZERO || self.cost < Decimal::ZERO {
            return Err("negative monetary field".into());
        }
        if matches!(self.clicks, Some(c) if c < 0) {
            return Err("negative clicks".into());
        }

        Ok(SalesRecord {
            date: self.date,
            channel: self.channel,
            product_name: self.product_name,
            uv: self.uv,
            pv: self.pv,
            gmv: self.gmv,
            cost: self.cost,
            orders: self.orders,
            clicks: self.clicks,
            gross_margin: self.gross_margin,
        })
    }
}

/// Load the sales CSV into an in-memory dataset.
///
/// An unreadable file is fatal. Individual malformed rows (non-numeric
/// fields, missing required fields, negative values) are discarded and
/// counted in the returned `LoadReport`; they never abort the load.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header occupies line 1.
        let line = idx + 2;
        let parsed = row.map_err(|e| e.to_string()).and_then(RawRow::validate);
        match parsed {
            Ok(record) => records.push(record),
            Err(e) => {
                report.discarded += 1;
                if report.errors.len() < ERROR_SAMPLE_LIMIT {
                    report.errors.push(format!("row {line}: {e}"));
                }
                tracing::debug!(row = line, error = %e, "Discarded malformed row");
            }
        }
    }

    report.loaded = records.len();

    counter!("rows_loaded_total").increment(report.loaded as u64);
    counter!("rows_discarded_total").increment(report.discarded as u64);
    gauge!("dataset_records").set(report.loaded as f64);

    tracing::info!(
        path = %path.display(),
        loaded = report.loaded,
        discarded = report.discarded,
        "Dataset loaded"
    );

    Ok(Dataset::new(records, report))
}
