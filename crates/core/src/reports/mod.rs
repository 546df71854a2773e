//! P&L report generation.
//!
//! This module provides pure business logic over ledger lines:
//! - Category aggregation (signed totals per chart category)
//! - Derived metrics (Net Revenue through Net Income)
//! - P&L summary with margins and the KPI set
//! - Cost-center spend ranking
//! - Monthly category trends

pub mod aggregate;
pub mod cost_center;
pub mod derived;
pub mod service;
pub mod trend;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::{CategoryTotal, CategoryTotals};
pub use derived::{DerivedMetric, DerivedMetrics};
pub use service::ReportService;
pub use types::*;
