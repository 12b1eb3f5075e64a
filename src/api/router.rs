use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::auth::require_auth;
use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Public routes — no authentication required
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected API routes — require Bearer token when API_TOKEN is set
    let protected = Router::new()
        // Dashboard
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        // Dataset
        .route("/api/dataset/report", get(handlers::dataset::report))
        .route("/api/dataset/channels", get(handlers::dataset::channels))
        // Analytics
        .route("/api/analytics/daily", get(handlers::analytics::daily))
        .route("/api/analytics/roi", get(handlers::analytics::roi_trend))
        // Channels
        .route("/api/channels/summary", get(handlers::channels::summary))
        .route("/api/channels/conversion", get(handlers::channels::conversion))
        .route("/api/channels/share", get(handlers::channels::share))
        // Products
        .route("/api/products/top-roi", get(handlers::products::top_roi))
        .route("/api/products/combo", get(handlers::products::combo))
        // Alerts
        .route("/api/alerts/cost", get(handlers::alerts::cost))
        // Control
        .route("/api/control/reload", post(handlers::control::reload))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // CORS: same-origin dashboard page plus direct API access with token
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        // The dashboard page itself (index.html + assets)
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
