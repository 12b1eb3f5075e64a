use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use channelboard::config::AppConfig;
use channelboard::ingestion::load_dataset;
use channelboard::AppState;

/// Two days, three channels, one malformed row (bad date).
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "\
date,channel,product_name,uv,pv,gmv,cost,orders,clicks
2024-01-01,Google,beauty_mask001,100,250,500,100,10,40
2024-01-01,Douyin,home_lamp002,80,160,300,60,6,
2024-01-02,Google,beauty_serum003,120,300,600,150,12,50
2024-01-02,Weibo,toys_car004,50,90,100,0,2,10
bad-date,Google,beauty_mask001,1,1,1,1,1,1
";

#[allow(dead_code)]
pub fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp csv");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[allow(dead_code)]
pub fn test_config(data_file: &str) -> AppConfig {
    AppConfig {
        data_file: data_file.into(),
        host: "127.0.0.1".into(),
        port: 0,
        static_dir: "static".into(),
        api_token: None,
        top_roi_limit: 10,
        cost_alert_limit: 5,
        reload_interval_secs: 0,
    }
}

/// Build an AppState over a fresh temp CSV. The temp file is returned so
/// tests can rewrite it and exercise reloads.
#[allow(dead_code)]
pub fn build_state(csv: &str) -> (AppState, NamedTempFile) {
    let file = write_csv(csv);
    let dataset = load_dataset(file.path()).expect("load test dataset");
    let config = test_config(file.path().to_str().unwrap());

    let state = AppState {
        dataset: Arc::new(RwLock::new(dataset)),
        config,
        metrics_handle: channelboard::metrics::init_metrics(),
    };
    (state, file)
}
