use std::sync::OnceLock;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// The recorder is global, so repeated calls (tests build several app
/// instances in one process) reuse the first handle.
pub fn init_metrics() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear even before the first increment.
            counter!("rows_loaded_total").absolute(0);
            counter!("rows_discarded_total").absolute(0);
            counter!("dataset_reloads_total").absolute(0);
            counter!("dataset_reload_failures_total").absolute(0);

            gauge!("dataset_records").set(0.0);

            handle
        })
        .clone()
}
