//! Universal-journal ledger data.
//!
//! This module defines the read-only inputs of every report:
//! - Ledger lines (one journal row each)
//! - Scope filters (company codes, fiscal year, periods)
//! - Datasets holding optional actual and budget row sources

pub mod dataset;
pub mod line;
pub mod scope;

pub use dataset::Dataset;
pub use line::LedgerLine;
pub use scope::Scope;
