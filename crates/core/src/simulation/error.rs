//! Simulation error types.

use thiserror::Error;

use crate::chart::Category;

/// Simulation-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Invalid forecast horizon (must be 1-60).
    #[error("Projection horizon must be between 1 and 60 periods")]
    InvalidProjectionHorizon,

    /// Invalid growth rate (must be -1.0 to 10.0).
    #[error("Growth rate must be between -1.0 and 10.0")]
    InvalidGrowthRate,

    /// A scenario change is outside -1.0 to 10.0.
    #[error("Scenario '{scenario}': {field} must be between -1.0 and 10.0")]
    InvalidScenarioChange {
        /// Scenario name.
        scenario: String,
        /// Offending field.
        field: &'static str,
    },

    /// A category adjustment value is out of range.
    #[error("Scenario '{scenario}': adjustment to {category} must not exceed 10^15 in magnitude")]
    InvalidAdjustmentValue {
        /// Scenario name.
        scenario: String,
        /// Adjusted category.
        category: Category,
    },

    /// No historical data to project from.
    #[error("No historical data found for the forecast")]
    NoHistoricalData,

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow while projecting")]
    Overflow,
}
