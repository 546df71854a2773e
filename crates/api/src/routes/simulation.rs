//! Forecast and scenario routes.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
};
use ledgerlens_core::simulation::{
    DEFAULT_GROWTH_RATE, Forecast, ForecastStrategy, Scenario, ScenarioOutcome,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::reports::category_param;
use super::run_blocking;
use crate::query::{ScopeQuery, parse_number};
use crate::{ApiError, AppState};

/// Default forecast horizon in periods.
const DEFAULT_HORIZON: u32 = 12;

/// Creates the simulation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/forecast", get(get_forecast))
        .route("/reports/scenarios", post(run_scenarios))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for a forecast.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Category name or slug.
    pub category: Option<String>,
    /// Number of periods to project (1-60, default 12).
    pub horizon: Option<String>,
    /// `fixed` (default) or `historical`.
    pub strategy: Option<String>,
    /// Growth rate for the fixed strategy as a fraction (default 0.05).
    pub growth_rate: Option<String>,
}

impl ForecastQuery {
    fn strategy(&self) -> Result<ForecastStrategy, ApiError> {
        match self.strategy.as_deref().map(str::trim) {
            None | Some("" | "fixed" | "fixed_rate") => {
                let rate = match self.growth_rate.as_deref() {
                    Some(rate) => Decimal::from_str(rate.trim()).map_err(|_| {
                        ApiError::validation(format!("Invalid growth_rate: {rate}"))
                    })?,
                    None => DEFAULT_GROWTH_RATE,
                };
                Ok(ForecastStrategy::FixedRate(rate))
            }
            Some("historical") => Ok(ForecastStrategy::Historical),
            Some(other) => Err(ApiError::validation(format!("Unknown strategy: {other}"))),
        }
    }
}

/// Request body for running scenarios. The default set runs when omitted.
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioRequest {
    /// Scenarios to run.
    #[serde(default)]
    pub scenarios: Option<Vec<Scenario>>,
}

/// Response for a scenario run.
#[derive(Debug, Serialize)]
pub struct ScenarioResponse {
    /// One outcome per scenario, in request order.
    pub scenarios: Vec<ScenarioOutcome>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reports/forecast
async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
    Query(params): Query<ForecastQuery>,
) -> Result<Json<Forecast>, ApiError> {
    let scope = query.scope()?;
    let currency = query.currency()?;
    let category = category_param(params.category.as_deref())?;
    let strategy = params.strategy()?;
    let horizon = params
        .horizon
        .as_deref()
        .map_or(Ok(DEFAULT_HORIZON), |h| parse_number("horizon", h))?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.forecast(category, &scope, currency, strategy, horizon))
        .await??
        .map(Json)
        .ok_or_else(|| ApiError::no_data(format!("No history for {category}")))
}

/// POST /reports/scenarios
///
/// Body: `{ "scenarios": [{ "name", "revenue_change", "cost_change", "adjustments" }] }`.
/// An empty body runs the default scenario set.
async fn run_scenarios(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
    body: Bytes,
) -> Result<Json<ScenarioResponse>, ApiError> {
    let scope = query.scope()?;
    let currency = query.currency()?;
    let request: ScenarioRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ScenarioRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::validation(format!("Invalid scenario request: {e}")))?
    };

    tracing::debug!(custom = request.scenarios.is_some(), "Running scenarios");

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.scenarios(&scope, currency, request.scenarios.as_deref()))
        .await??
        .map(|scenarios| Json(ScenarioResponse { scenarios }))
        .ok_or_else(|| ApiError::no_data("No actuals loaded"))
}
