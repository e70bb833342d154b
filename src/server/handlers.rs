//! API endpoint handlers.
//!
//! The handlers only shape responses; validation of `lat`/`lng` happens
//! in the `Query` extractor, which rejects missing or non-numeric
//! parameters with a 400 before the dataset is ever consulted.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::AppState;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Query parameters for the nearest-bin lookup.
#[derive(Debug, Deserialize)]
pub struct NearestParams {
    pub lat: f64,
    pub lng: f64,
}

/// All bins, in dataset load order.
pub async fn list_bins(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.bins.all().to_vec())
}

/// The bin nearest to the query point, with distance and bearing.
pub async fn nearest_bin(
    State(state): State<AppState>,
    Query(params): Query<NearestParams>,
) -> impl IntoResponse {
    Json(state.bins.nearest(params.lat, params.lng))
}
