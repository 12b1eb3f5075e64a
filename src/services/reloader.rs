use std::path::Path;
use std::time::Duration;

use metrics::counter;
use tokio::time::sleep;

use crate::ingestion::load_dataset;
use crate::AppState;

/// Periodically re-read the CSV and swap the in-memory dataset.
///
/// The file is the source of truth; operators drop an updated export in
/// place and the dashboard picks it up on the next tick. A failed read
/// keeps the previous dataset live.
pub async fn run_reloader(state: AppState, interval_secs: u64) {
    tracing::info!(interval_secs = interval_secs, "Dataset reloader started");

    loop {
        sleep(Duration::from_secs(interval_secs)).await;

        let path = state.config.data_file.clone();
        match load_dataset(Path::new(&path)) {
            Ok(dataset) => {
                counter!("dataset_reloads_total").increment(1);
                tracing::debug!(
                    records = dataset.records.len(),
                    discarded = dataset.report.discarded,
                    "Dataset reloaded"
                );
                *state.dataset.write().await = dataset;
            }
            Err(e) => {
                counter!("dataset_reload_failures_total").increment(1);
                tracing::error!(error = %e, path = %path, "Reloader: dataset load failed, keeping previous data");
            }
        }
    }
}
