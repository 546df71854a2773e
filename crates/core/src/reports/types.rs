//! Report data types.

use ledgerlens_shared::types::{AmountField, CostCenter, FiscalPeriod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DerivedMetric;
use crate::chart::Category;
use crate::ledger::Scope;

/// A P&L line: either a chart category or a derived metric.
///
/// Serializes as the plain display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    /// A chart category.
    Category(Category),
    /// A derived subtotal.
    Derived(DerivedMetric),
}

impl LineItem {
    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Category(category) => category.name(),
            Self::Derived(metric) => metric.name(),
        }
    }
}

impl std::fmt::Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Category> for LineItem {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl From<DerivedMetric> for LineItem {
    fn from(metric: DerivedMetric) -> Self {
        Self::Derived(metric)
    }
}

/// One line of a P&L summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlLine {
    /// Category or derived metric name.
    pub category: LineItem,
    /// Signed amount.
    pub amount: Decimal,
    /// Amount as a percentage of Net Revenue, one decimal.
    pub margin_pct: Decimal,
    /// Display order (fractional for derived metrics).
    #[serde(skip)]
    pub order: Decimal,
}

/// P&L summary: category lines interleaved with derived metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlSummary {
    /// Scope the summary was computed for.
    pub scope: Scope,
    /// Amount column that was aggregated.
    pub currency: AmountField,
    /// Lines in display order.
    pub lines: Vec<PlLine>,
}

impl PlSummary {
    /// Returns the line for a category or metric.
    #[must_use]
    pub fn line(&self, item: impl Into<LineItem>) -> Option<&PlLine> {
        let item = item.into();
        self.lines.iter().find(|line| line.category == item)
    }

    /// Returns the amount of a line, zero if absent.
    #[must_use]
    pub fn amount(&self, item: impl Into<LineItem>) -> Decimal {
        self.line(item).map_or(Decimal::ZERO, |line| line.amount)
    }

    /// Returns the margin of a line, zero if absent.
    #[must_use]
    pub fn margin(&self, item: impl Into<LineItem>) -> Decimal {
        self.line(item).map_or(Decimal::ZERO, |line| line.margin_pct)
    }
}

/// Headline KPIs of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiSet {
    /// Net Revenue.
    #[serde(rename = "Revenue")]
    pub revenue: Decimal,
    /// Gross Profit.
    #[serde(rename = "Gross Profit")]
    pub gross_profit: Decimal,
    /// Gross Profit as % of revenue.
    #[serde(rename = "Gross Margin %")]
    pub gross_margin_pct: Decimal,
    /// EBITDA.
    #[serde(rename = "EBITDA")]
    pub ebitda: Decimal,
    /// EBITDA as % of revenue.
    #[serde(rename = "EBITDA Margin %")]
    pub ebitda_margin_pct: Decimal,
    /// EBIT.
    #[serde(rename = "EBIT")]
    pub ebit: Decimal,
    /// EBIT as % of revenue.
    #[serde(rename = "EBIT Margin %")]
    pub ebit_margin_pct: Decimal,
    /// Net Income.
    #[serde(rename = "Net Income")]
    pub net_income: Decimal,
    /// Net Income as % of revenue.
    #[serde(rename = "Net Margin %")]
    pub net_margin_pct: Decimal,
}

/// Spend of one cost center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostCenterSpend {
    /// Cost center code.
    pub cost_center: CostCenter,
    /// Summed reporting-currency amount of expense lines.
    pub total_spend: Decimal,
    /// Number of distinct documents posted.
    pub doc_count: usize,
    /// Share of the total spend across all cost centers, one decimal.
    pub pct_of_total: Decimal,
}

/// One point of a monthly trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// `YYYY-PP` label.
    pub period_label: String,
    /// Fiscal year.
    pub year: i32,
    /// Fiscal period.
    pub period: u32,
    /// Signed category amount of the period.
    pub amount: Decimal,
}

impl TrendPoint {
    /// Creates a point for a fiscal period.
    #[must_use]
    pub fn new(period: FiscalPeriod, amount: Decimal) -> Self {
        Self {
            period_label: period.label(),
            year: period.year,
            period: period.period,
            amount,
        }
    }

    /// Returns the fiscal period of the point.
    #[must_use]
    pub const fn fiscal_period(&self) -> FiscalPeriod {
        FiscalPeriod::new(self.year, self.period)
    }
}

/// Chronological series of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    /// The category.
    pub category: Category,
    /// Points in chronological order. Periods without postings are absent.
    pub points: Vec<TrendPoint>,
}
