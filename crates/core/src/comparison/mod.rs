//! Actual vs budget and year-over-year comparison.
//!
//! Both comparisons run two independent aggregations (actual and budget, or
//! current and prior year) on the rayon pool and diff the results.

pub mod service;
pub mod types;


pub use service::Comparator;
pub use types::{VarianceRecord, VarianceStatus, YoyComparison, YoyRecord};
