//! HTTP reporting API with Axum routes.
//!
//! This crate provides:
//! - REST API routes for P&L reports, comparisons, forecasts, scenarios and KPI goals
//! - Scope query parsing
//! - JSON error responses

pub mod error;
pub mod query;
pub mod routes;

use axum::Router;
use axum::http::Uri;
use ledgerlens_core::analytics::AnalyticsService;
use ledgerlens_shared::AppError;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Report operations over the loaded dataset.
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    /// Creates the state from an analytics service.
    #[must_use]
    pub fn new(analytics: AnalyticsService) -> Self {
        Self {
            analytics: Arc::new(analytics),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(format!("No route for {}", uri.path())))
}
