//! Comparison service.

use ledgerlens_shared::types::AmountField;

use super::types::{VarianceRecord, YoyComparison, YoyRecord};
use crate::ledger::{LedgerLine, Scope};
use crate::reports::ReportService;

/// Diffs two aggregations of the same chart.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    reports: ReportService,
}

impl Comparator {
    /// Creates a comparator over a report service.
    #[must_use]
    pub const fn new(reports: ReportService) -> Self {
        Self { reports }
    }

    /// Compares actual and budget category totals under the same scope.
    ///
    /// Both sides aggregate the reporting currency amount.
    #[must_use]
    pub fn actual_vs_budget(
        &self,
        actuals: &[LedgerLine],
        budget: &[LedgerLine],
        scope: &Scope,
    ) -> Vec<VarianceRecord> {
        let (actual_totals, budget_totals) = rayon::join(
            || self.reports.category_totals(actuals, scope, AmountField::Reporting),
            || self.reports.category_totals(budget, scope, AmountField::Reporting),
        );

        actual_totals
            .iter()
            .map(|total| {
                VarianceRecord::new(total.category, total.amount, budget_totals.get(total.category))
            })
            .collect()
    }

    /// Compares `year` against `year - 1`.
    ///
    /// The year filter of `scope` is replaced; company and period filters apply
    /// to both years. Every category and derived line is diffed. `None` when
    /// `year` has no predecessor.
    #[must_use]
    pub fn yoy_comparison(
        &self,
        lines: &[LedgerLine],
        year: i32,
        scope: &Scope,
        currency: AmountField,
    ) -> Option<YoyComparison> {
        let prior_year = year.checked_sub(1)?;
        let current_scope = scope.clone().with_year(year);
        let prior_scope = scope.clone().with_year(prior_year);

        let (current, prior) = rayon::join(
            || self.reports.pl_summary(lines, &current_scope, currency),
            || self.reports.pl_summary(lines, &prior_scope, currency),
        );

        let records = current
            .lines
            .iter()
            .map(|line| YoyRecord::new(line.category, line.amount, prior.amount(line.category)))
            .collect();

        tracing::debug!(year, prior_year, "Computed year-over-year comparison");

        Some(YoyComparison {
            year,
            prior_year,
            lines: records,
        })
    }
}
