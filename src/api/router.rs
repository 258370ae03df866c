use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::admin;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .nest("/api/v4", admin::create_admin_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
