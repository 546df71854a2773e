//! Core business logic for Ledgerlens.
//!
//! This crate contains pure business logic with ZERO web or file dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Ledger lines, scope filters and loaded datasets
//! - `chart` - Validated chart of accounts (category rules)
//! - `reports` - P&L aggregation, derived metrics, KPIs, cost centers, trends
//! - `comparison` - Actual vs budget and year-over-year variance
//! - `simulation` - Scenario arithmetic and trend forecasts
//! - `analytics` - Dataset-backed service with an injectable report cache

pub mod analytics;
pub mod chart;
pub mod comparison;
pub mod ledger;
pub mod percent;
pub mod reports;
pub mod simulation;
