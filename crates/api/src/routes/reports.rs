//! Report routes.
//!
//! Every report takes the scope query (`company_codes`, `year`, `periods`,
//! `currency`) and answers 404 `no_data` when its row source is not loaded.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use ledgerlens_core::chart::Category;
use ledgerlens_core::comparison::{VarianceRecord, YoyComparison};
use ledgerlens_core::reports::{CostCenterSpend, KpiSet, MonthlyTrend, PlSummary};
use serde::Deserialize;

use super::run_blocking;
use crate::query::{ScopeQuery, parse_number};
use crate::{ApiError, AppState};

/// Default number of cost centers returned.
const DEFAULT_TOP_N: usize = 10;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/pl-summary", get(get_pl_summary))
        .route("/reports/actual-vs-budget", get(get_actual_vs_budget))
        .route("/reports/cost-centers", get(get_cost_centers))
        .route("/reports/trend", get(get_trend))
        .route("/reports/yoy", get(get_yoy))
        .route("/reports/kpis", get(get_kpis))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the cost-center report.
#[derive(Debug, Deserialize)]
pub struct CostCenterQuery {
    /// Number of cost centers to return (default 10).
    pub top_n: Option<String>,
}

/// Query parameters for the trend report.
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    /// Category name or slug, e.g. `Revenue` or `sales_marketing`.
    pub category: Option<String>,
}

/// Parses a category parameter. Unknown names are "no data", not malformed input.
pub(crate) fn category_param(category: Option<&str>) -> Result<Category, ApiError> {
    let name = category
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::validation("Missing category"))?;
    name.parse()
        .map_err(|_| ApiError::no_data(format!("Unknown category: {name}")))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reports/pl-summary
async fn get_pl_summary(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Arc<PlSummary>>, ApiError> {
    let scope = query.scope()?;
    let currency = query.currency()?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.pl_summary(&scope, currency))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::no_data("No actuals loaded"))
}

/// GET /reports/actual-vs-budget
async fn get_actual_vs_budget(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Arc<Vec<VarianceRecord>>>, ApiError> {
    let scope = query.scope()?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.actual_vs_budget(&scope))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::no_data("Actuals and budget are both required"))
}

/// GET /reports/cost-centers
async fn get_cost_centers(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
    Query(params): Query<CostCenterQuery>,
) -> Result<Json<Arc<Vec<CostCenterSpend>>>, ApiError> {
    let scope = query.scope()?;
    let top_n = params
        .top_n
        .as_deref()
        .map_or(Ok(DEFAULT_TOP_N), |n| parse_number("top_n", n))?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.cost_centers(&scope, top_n))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::no_data("No actuals loaded"))
}

/// GET /reports/trend
async fn get_trend(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
    Query(params): Query<TrendQuery>,
) -> Result<Json<Arc<MonthlyTrend>>, ApiError> {
    let scope = query.scope()?;
    let currency = query.currency()?;
    let category = category_param(params.category.as_deref())?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.monthly_trend(category, &scope, currency))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::no_data(format!("No trend data for {category}")))
}

/// GET /reports/yoy
///
/// `year` is required and selects the current year.
async fn get_yoy(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Arc<YoyComparison>>, ApiError> {
    let year = query
        .year()
        .ok_or_else(|| ApiError::validation("Missing year"))??;
    let scope = query.scope()?;
    let currency = query.currency()?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.yoy_comparison(year, &scope, currency))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::no_data("No actuals loaded"))
}

/// GET /reports/kpis
async fn get_kpis(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Arc<KpiSet>>, ApiError> {
    let scope = query.scope()?;

    let analytics = Arc::clone(&state.analytics);
    run_blocking(move || analytics.kpis(&scope))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::no_data("No actuals loaded"))
}
