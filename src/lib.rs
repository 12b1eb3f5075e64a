pub mod analytics;
pub mod api;
pub mod config;
pub mod errors;
pub mod ingestion;
pub mod metrics;
pub mod models;
pub mod services;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::models::Dataset;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<RwLock<Dataset>>,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
