//! Loaded row sources.

use std::sync::Arc;

use super::LedgerLine;

/// The actual and budget row sources a report can draw on.
///
/// `None` means the source was never loaded, which reports surface as
/// "no data". A loaded but empty source is a valid input that aggregates to
/// zero. Rows are shared read-only behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    actuals: Option<Arc<[LedgerLine]>>,
    budget: Option<Arc<[LedgerLine]>>,
}

impl Dataset {
    /// Creates a dataset from optional actual and budget rows.
    #[must_use]
    pub fn new(actuals: Option<Vec<LedgerLine>>, budget: Option<Vec<LedgerLine>>) -> Self {
        Self {
            actuals: actuals.map(Arc::from),
            budget: budget.map(Arc::from),
        }
    }

    /// Creates a dataset holding only actual rows.
    #[must_use]
    pub fn with_actuals(actuals: Vec<LedgerLine>) -> Self {
        Self::new(Some(actuals), None)
    }

    /// Creates a dataset with no loaded sources.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the actual rows, if loaded.
    #[must_use]
    pub fn actuals(&self) -> Option<&[LedgerLine]> {
        self.actuals.as_deref()
    }

    /// Returns the budget rows, if loaded.
    #[must_use]
    pub fn budget(&self) -> Option<&[LedgerLine]> {
        self.budget.as_deref()
    }

    /// Returns the number of actual rows (0 when not loaded).
    #[must_use]
    pub fn actual_count(&self) -> usize {
        self.actuals.as_ref().map_or(0, |rows| rows.len())
    }

    /// Returns the number of budget rows (0 when not loaded).
    #[must_use]
    pub fn budget_count(&self) -> usize {
        self.budget.as_ref().map_or(0, |rows| rows.len())
    }
}
