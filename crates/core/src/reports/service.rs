//! Report generation service.

use std::sync::Arc;

use ledgerlens_shared::types::AmountField;
use rust_decimal::Decimal;

use super::aggregate::{CategoryTotals, aggregate};
use super::cost_center::cost_center_report;
use super::derived::{DerivedMetric, DerivedMetrics};
use super::trend::monthly_trend;
use super::types::{CostCenterSpend, KpiSet, LineItem, MonthlyTrend, PlLine, PlSummary};
use crate::chart::{Category, ChartOfAccounts};
use crate::ledger::{LedgerLine, Scope};
use crate::percent::{checked_percent_of, percent_of};

/// Service for generating P&L reports from ledger lines.
///
/// Holds only the shared, read-only chart of accounts. Every operation is a
/// function of its inputs.
#[derive(Debug, Clone)]
pub struct ReportService {
    chart: Arc<ChartOfAccounts>,
}

impl ReportService {
    /// Creates a service over a chart of accounts.
    #[must_use]
    pub const fn new(chart: Arc<ChartOfAccounts>) -> Self {
        Self { chart }
    }

    /// Returns the chart of accounts.
    #[must_use]
    pub fn chart(&self) -> &ChartOfAccounts {
        &self.chart
    }

    /// Aggregates lines into signed category totals.
    #[must_use]
    pub fn category_totals(
        &self,
        lines: &[LedgerLine],
        scope: &Scope,
        currency: AmountField,
    ) -> CategoryTotals {
        aggregate(&self.chart, lines, scope, currency)
    }

    /// Generates the P&L summary: category lines and derived metrics with margins.
    #[must_use]
    pub fn pl_summary(&self, lines: &[LedgerLine], scope: &Scope, currency: AmountField) -> PlSummary {
        let totals = self.category_totals(lines, scope, currency);
        Self::summarize(&totals, scope.clone(), currency)
    }

    /// Builds a P&L summary from already aggregated totals.
    ///
    /// Derived metrics are recomputed from the totals and interleaved by their
    /// fractional order. Margins are relative to Net Revenue.
    #[must_use]
    pub fn summarize(totals: &CategoryTotals, scope: Scope, currency: AmountField) -> PlSummary {
        let derived = DerivedMetrics::compute(totals);
        let lines = Self::ordered_lines(totals, &derived)
            .map(|(category, amount, order)| PlLine {
                category,
                amount,
                margin_pct: percent_of(amount, derived.net_revenue),
                order,
            })
            .collect();

        PlSummary {
            scope,
            currency,
            lines,
        }
    }

    /// Like [`Self::summarize`], but returns `None` if a subtotal or margin
    /// overflows.
    #[must_use]
    pub fn try_summarize(
        totals: &CategoryTotals,
        scope: Scope,
        currency: AmountField,
    ) -> Option<PlSummary> {
        let derived = DerivedMetrics::checked_compute(totals)?;
        let lines = Self::ordered_lines(totals, &derived)
            .map(|(category, amount, order)| {
                Some(PlLine {
                    category,
                    amount,
                    margin_pct: checked_percent_of(amount, derived.net_revenue)?,
                    order,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(PlSummary {
            scope,
            currency,
            lines,
        })
    }

    fn ordered_lines(
        totals: &CategoryTotals,
        derived: &DerivedMetrics,
    ) -> impl Iterator<Item = (LineItem, Decimal, Decimal)> {
        let category_lines = totals.iter().map(|total| {
            (
                LineItem::Category(total.category),
                total.amount,
                Decimal::from(total.order),
            )
        });
        let derived_lines = DerivedMetric::ALL
            .into_iter()
            .map(|metric| (LineItem::Derived(metric), derived.get(metric), metric.order()));

        let mut lines: Vec<_> = category_lines.chain(derived_lines).collect();
        lines.sort_by(|a, b| a.2.cmp(&b.2));
        lines.into_iter()
    }

    /// Computes the headline KPIs in reporting currency.
    #[must_use]
    pub fn kpis(&self, lines: &[LedgerLine], scope: &Scope) -> KpiSet {
        Self::kpis_from(&self.pl_summary(lines, scope, AmountField::Reporting))
    }

    /// Extracts the headline KPIs from a P&L summary.
    #[must_use]
    pub fn kpis_from(summary: &PlSummary) -> KpiSet {
        let revenue = summary.amount(DerivedMetric::NetRevenue);
        let kpi = |metric: DerivedMetric| (summary.amount(metric), summary.margin(metric));

        let (gross_profit, gross_margin_pct) = kpi(DerivedMetric::GrossProfit);
        let (ebitda, ebitda_margin_pct) = kpi(DerivedMetric::Ebitda);
        let (ebit, ebit_margin_pct) = kpi(DerivedMetric::Ebit);
        let (net_income, net_margin_pct) = kpi(DerivedMetric::NetIncome);

        KpiSet {
            revenue,
            gross_profit,
            gross_margin_pct,
            ebitda,
            ebitda_margin_pct,
            ebit,
            ebit_margin_pct,
            net_income,
            net_margin_pct,
        }
    }

    /// Ranks cost centers by expense spend.
    #[must_use]
    pub fn cost_center_report(
        &self,
        lines: &[LedgerLine],
        scope: &Scope,
        top_n: usize,
    ) -> Vec<CostCenterSpend> {
        cost_center_report(lines, scope, top_n)
    }

    /// Builds a monthly trend of one category.
    ///
    /// Returns `None` if the chart does not define the category.
    #[must_use]
    pub fn monthly_trend(
        &self,
        lines: &[LedgerLine],
        category: Category,
        scope: &Scope,
        currency: AmountField,
    ) -> Option<MonthlyTrend> {
        let rule = self.chart.rule(category)?;
        Some(monthly_trend(rule, lines, scope, currency))
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new(Arc::new(ChartOfAccounts::standard()))
    }
}
