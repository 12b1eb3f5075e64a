use std::env;

const DEFAULT_DATA_FILE: &str = "channel_daily_data.csv";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,

    // Bearer token for the /api routes; None disables authentication
    pub api_token: Option<String>,

    // Analytics defaults
    pub top_roi_limit: usize,
    pub cost_alert_limit: usize,

    // Background reload; 0 disables the reloader
    pub reload_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = env::var("API_TOKEN").ok().filter(|t| !t.is_empty());

        Ok(Self {
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),

            api_token,

            top_roi_limit: env::var("TOP_ROI_LIMIT")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),
            cost_alert_limit: env::var("COST_ALERT_LIMIT")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .unwrap_or(5),

            reload_interval_secs: env::var("RELOAD_INTERVAL_SECS")
                .unwrap_or_else(|_| "0".into())
                .parse()
                .unwrap_or(0),
        })
    }
}
