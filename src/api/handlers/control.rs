use std::path::Path;

use axum::extract::State;
use axum::Json;
use metrics::counter;

use crate::errors::AppError;
use crate::ingestion::load_dataset;
use crate::models::LoadReport;
use crate::AppState;

/// POST /api/control/reload — re-read the CSV and swap the dataset.
///
/// On any load failure the previous dataset stays live and the error is
/// returned to the caller.
pub async fn reload(State(state): State<AppState>) -> Result<Json<LoadReport>, AppError> {
    let dataset = load_dataset(Path::new(&state.config.data_file))?;
    counter!("dataset_reloads_total").increment(1);

    let report = dataset.report.clone();
    tracing::info!(
        loaded = report.loaded,
        discarded = report.discarded,
        "Dataset reloaded via control API"
    );

    *state.dataset.write().await = dataset;
    Ok(Json(report))
}
