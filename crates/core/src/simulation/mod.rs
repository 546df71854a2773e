//! What-if scenarios and trend forecasts.

pub mod engine;
pub mod error;
pub mod forecast;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use engine::SimulationEngine;
pub use error::SimulationError;
pub use forecast::{DEFAULT_GROWTH_RATE, Forecast, ForecastStrategy, MAX_HORIZON, forecast};
pub use scenario::{AdjustmentType, CategoryAdjustment, MAX_ADJUSTMENT, Scenario, ScenarioOutcome};
