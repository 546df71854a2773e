//! API route definitions.

use axum::Router;

use crate::{ApiError, AppState};

pub mod goals;
pub mod health;
pub mod reports;
pub mod simulation;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(reports::routes())
        .merge(simulation::routes())
        .merge(goals::routes())
}

/// Runs a report computation off the async worker threads.
pub(crate) async fn run_blocking<T, F>(compute: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(compute).await.map_err(|e| {
        ApiError(ledgerlens_shared::AppError::Internal(format!(
            "Report task failed: {e}"
        )))
    })
}
