use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use channelboard::api::router::create_router;
use channelboard::config::AppConfig;
use channelboard::ingestion::load_dataset;
use channelboard::services::reloader::run_reloader;
use channelboard::{metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let metrics_handle = metrics::init_metrics();

    tracing::info!(path = %config.data_file, "Loading dataset...");
    let dataset = load_dataset(Path::new(&config.data_file))?;
    tracing::info!(
        records = dataset.records.len(),
        discarded = dataset.report.discarded,
        "Dataset ready"
    );

    let state = AppState {
        dataset: Arc::new(RwLock::new(dataset)),
        config: config.clone(),
        metrics_handle,
    };

    // --- Background service: periodic CSV reload ---
    if config.reload_interval_secs > 0 {
        let reload_state = state.clone();
        let interval = config.reload_interval_secs;
        tokio::spawn(async move {
            run_reloader(reload_state, interval).await;
        });
        tracing::info!(interval_secs = interval, "Dataset reloader spawned");
    } else {
        tracing::info!("Dataset reloader disabled (RELOAD_INTERVAL_SECS=0)");
    }

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
