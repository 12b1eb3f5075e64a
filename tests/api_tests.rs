mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use channelboard::api::router::create_router;

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

fn sample_app() -> (axum::Router, tempfile::NamedTempFile) {
    let (state, file) = common::build_state(common::SAMPLE_CSV);
    (create_router(state), file)
}

fn as_f64(v: &serde_json::Value) -> f64 {
    v.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["records"], 4);
    assert_eq!(json["discarded"], 1);
}

#[tokio::test]
async fn test_dashboard_summary() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/dashboard/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["records"], 4);
    assert_eq!(json["channels"], 3);
    assert_eq!(json["total_uv"], 350);
    assert_eq!(as_f64(&json["total_gmv"]), 1500.0);
    assert_eq!(json["first_date"], "2024-01-01");
    assert_eq!(json["last_date"], "2024-01-02");
}

#[tokio::test]
async fn test_daily_series_and_roi() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/analytics/daily").await;

    assert_eq!(status, StatusCode::OK);
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 2);

    // 2024-01-01: uv 180, gmv 800, cost 160 -> ROI (800-160)/160 = 4
    assert_eq!(days[0]["date"], "2024-01-01");
    assert_eq!(days[0]["uv"], 180);
    assert_eq!(as_f64(&days[0]["gmv"]), 800.0);
    assert_eq!(as_f64(&days[0]["roi"]), 4.0);

    // 2024-01-02: ROI (700-150)/150
    let roi2 = as_f64(&days[1]["roi"]);
    assert!((roi2 - 550.0 / 150.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_date_range_filter() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/analytics/roi?from=2024-01-02").await;

    assert_eq!(status, StatusCode::OK);
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["date"], "2024-01-02");
}

#[tokio::test]
async fn test_invalid_date_param_is_rejected() {
    let (app, _file) = sample_app();
    let (status, _) = get(&app, "/api/analytics/roi?from=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_channel_shares_sum_to_one() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/channels/share").await;

    assert_eq!(status, StatusCode::OK);
    let shares = json.as_array().unwrap();
    assert_eq!(shares.len(), 3);

    let total: f64 = shares.iter().map(|s| as_f64(&s["share"])).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_channel_filter_makes_share_one() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/channels/share?channels=Google").await;

    assert_eq!(status, StatusCode::OK);
    let shares = json.as_array().unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0]["channel"], "Google");
    assert_eq!(as_f64(&shares[0]["share"]), 1.0);
}

#[tokio::test]
async fn test_conversion_rates() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/channels/conversion").await;

    assert_eq!(status, StatusCode::OK);
    let points = json.as_array().unwrap();

    // Douyin 2024-01-01 has no clicks value: 6 orders / 80 uv = 0.075
    let douyin = points
        .iter()
        .find(|p| p["channel"] == "Douyin")
        .expect("Douyin group");
    assert_eq!(as_f64(&douyin["conversion_rate"]), 0.075);

    // Google 2024-01-01: 10 orders / 40 clicks = 0.25
    let google = points
        .iter()
        .find(|p| p["channel"] == "Google" && p["date"] == "2024-01-01")
        .expect("Google group");
    assert_eq!(as_f64(&google["conversion_rate"]), 0.25);
}

#[tokio::test]
async fn test_top_roi_ranking() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/products/top-roi").await;

    assert_eq!(status, StatusCode::OK);
    let ranked = json.as_array().unwrap();

    // home: (300-60)/60 = 4; beauty: (1100-250)/250 = 3.4; toys has no
    // spend so its ROI is undefined and it is not ranked.
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["category"], "home");
    assert_eq!(as_f64(&ranked[0]["roi"]), 4.0);
    assert_eq!(ranked[1]["category"], "beauty");
    assert_eq!(as_f64(&ranked[1]["roi"]), 3.4);
}

#[tokio::test]
async fn test_top_roi_limit_param() {
    let (app, _file) = sample_app();
    let (_, json) = get(&app, "/api/products/top-roi?limit=1").await;

    let ranked = json.as_array().unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0]["category"], "home");
}

#[tokio::test]
async fn test_combo_roi() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/products/combo").await;

    assert_eq!(status, StatusCode::OK);
    let combos = json.as_array().unwrap();
    assert_eq!(combos.len(), 3);
    // Zero-spend combo sorts last with a null ROI.
    assert_eq!(combos[2]["channel"], "Weibo");
    assert!(combos[2]["roi"].is_null());
}

#[tokio::test]
async fn test_cost_alerts() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/alerts/cost").await;

    assert_eq!(status, StatusCode::OK);
    let alerts = json.as_array().unwrap();
    assert!(!alerts.is_empty());
    // Google spent 150 on day 2 against a 125 mean: highest ratio.
    assert_eq!(alerts[0]["channel"], "Google");
    assert_eq!(alerts[0]["date"], "2024-01-02");
}

#[tokio::test]
async fn test_dataset_report_counts_discards() {
    let (app, _file) = sample_app();
    let (status, json) = get(&app, "/api/dataset/report").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["loaded"], 4);
    assert_eq!(json["discarded"], 1);
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dataset_channels() {
    let (app, _file) = sample_app();
    let (_, json) = get(&app, "/api/dataset/channels").await;

    let channels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(channels, vec!["Douyin", "Google", "Weibo"]);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (app, _file) = sample_app();
    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("rows_loaded_total"));
}
