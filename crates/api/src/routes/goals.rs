//! KPI goal-tracking routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    routing::get,
};
use ledgerlens_core::analytics::{Goal, GoalTracking};
use serde::Deserialize;

use super::run_blocking;
use crate::query::ScopeQuery;
use crate::{ApiError, AppState};

/// Creates the goal routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/goals", get(get_goals).post(track_goals))
}

/// Request body for tracking custom goals. The default goals apply when omitted.
#[derive(Debug, Default, Deserialize)]
pub struct GoalRequest {
    /// Goals to track.
    #[serde(default)]
    pub goals: Option<Vec<Goal>>,
}

/// GET /reports/goals
///
/// Tracks the default goals.
async fn get_goals(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<GoalTracking>, ApiError> {
    tracking(state, &query, GoalRequest::default()).await
}

/// POST /reports/goals
///
/// Body: `{ "goals": [{ "name", "metric", "target" }] }`.
async fn track_goals(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
    body: Bytes,
) -> Result<Json<GoalTracking>, ApiError> {
    let request: GoalRequest = if body.iter().all(u8::is_ascii_whitespace) {
        GoalRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::validation(format!("Invalid goal request: {e}")))?
    };
    tracking(state, &query, request).await
}

async fn tracking(
    state: AppState,
    query: &ScopeQuery,
    request: GoalRequest,
) -> Result<Json<GoalTracking>, ApiError> {
    let scope = query.scope()?;
    tracing::debug!(custom = request.goals.is_some(), "Tracking goals");

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.track_goals(&scope, request.goals.as_deref()))
        .await??
        .map(Json)
        .ok_or_else(|| ApiError::no_data("No actuals loaded"))
}
