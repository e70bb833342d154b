//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
///
/// The frontend is served from another origin, so CORS is wide open.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/bins", get(handlers::list_bins))
        .route("/api/bins/nearest", get(handlers::nearest_bin))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
