use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{
    handle_panic, logging_middleware, metrics_middleware, security_headers_middleware,
    MAX_BODY_SIZE,
};
use super::registration;
use super::state::AppState;
use super::tracks;

/// Registration routes, mounted at the root and under `/api`
fn create_registration_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(registration::register))
        .route("/tracks", get(tracks::list_tracks))
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(create_registration_router())
        .nest("/api", create_registration_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
