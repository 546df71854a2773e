//! Health check endpoints.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of actual rows loaded, absent when no actuals are loaded.
    pub actual_rows: Option<usize>,
    /// Number of budget rows loaded, absent when no budget is loaded.
    pub budget_rows: Option<usize>,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = state.analytics.dataset();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        actual_rows: dataset.actuals().map(<[_]>::len),
        budget_rows: dataset.budget().map(<[_]>::len),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
