//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledgerlens_core::analytics::GoalError;
use ledgerlens_core::simulation::SimulationError;
use ledgerlens_shared::AppError;
use serde_json::json;

/// Handler error rendered as `{ "error": code, "message": text }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// The report has no underlying data.
    pub fn no_data(message: impl Into<String>) -> Self {
        Self(AppError::NoData(message.into()))
    }

    /// A request parameter is malformed.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<SimulationError> for ApiError {
    fn from(error: SimulationError) -> Self {
        match error {
            SimulationError::NoHistoricalData => Self::no_data(error.to_string()),
            SimulationError::InvalidProjectionHorizon
            | SimulationError::InvalidGrowthRate
            | SimulationError::InvalidScenarioChange { .. }
            | SimulationError::InvalidAdjustmentValue { .. }
            | SimulationError::Overflow => Self::validation(error.to_string()),
        }
    }
}

impl From<GoalError> for ApiError {
    fn from(error: GoalError) -> Self {
        Self::validation(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        let message = match &self.0 {
            AppError::NoData(m)
            | AppError::NotFound(m)
            | AppError::Validation(m)
            | AppError::Configuration(m)
            | AppError::DataSource(m)
            | AppError::Internal(m) => m.clone(),
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}
