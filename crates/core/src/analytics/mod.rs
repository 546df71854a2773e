//! Dataset-backed analytics service.
//!
//! Binds the pure report, comparison and simulation logic to a loaded
//! [`Dataset`](crate::ledger::Dataset), turning missing row sources into
//! "no data" (`None`) and consulting an optional report cache.

pub mod cache;
pub mod goals;
pub mod service;


pub use cache::ReportCache;
pub use goals::{CompanyGoals, Goal, GoalError, GoalProgress, GoalStatus, GoalTracking, KpiMetric};
pub use service::{AnalyticsService, ReportCaches};
