//! Comparison data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::Category;
use crate::percent::percent_of;
use crate::reports::LineItem;

/// Whether a variance helps or hurts the bottom line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Income above plan or cost below plan.
    Favorable,
    /// Income below plan or cost above plan.
    Unfavorable,
    /// Actual equals budget.
    OnBudget,
}

/// Actual vs budget of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceRecord {
    /// The category.
    pub category: Category,
    /// Actual signed total.
    pub actual: Decimal,
    /// Budget signed total.
    pub budget: Decimal,
    /// Actual less budget.
    pub variance: Decimal,
    /// Variance as % of budget, one decimal. Zero when the budget is zero.
    pub variance_pct: Decimal,
    /// Direction of the variance.
    pub status: VarianceStatus,
}

impl VarianceRecord {
    /// Computes the variance of one category.
    #[must_use]
    pub fn new(category: Category, actual: Decimal, budget: Decimal) -> Self {
        let variance = actual - budget;

        let status = if variance.is_zero() {
            VarianceStatus::OnBudget
        } else if variance.is_sign_positive() == category.is_income() {
            VarianceStatus::Favorable
        } else {
            VarianceStatus::Unfavorable
        };

        Self {
            category,
            actual,
            budget,
            variance,
            variance_pct: percent_of(variance, budget),
            status,
        }
    }
}

/// Current vs prior year of one P&L line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YoyRecord {
    /// Category or derived metric.
    pub category: LineItem,
    /// Current year amount.
    pub amount_cy: Decimal,
    /// Prior year amount.
    pub amount_py: Decimal,
    /// Current less prior year.
    pub change: Decimal,
    /// Change as % of prior year, one decimal. Zero when the prior year is zero.
    pub change_pct: Decimal,
}

impl YoyRecord {
    /// Computes the change of one line.
    #[must_use]
    pub fn new(category: LineItem, amount_cy: Decimal, amount_py: Decimal) -> Self {
        let change = amount_cy - amount_py;
        Self {
            category,
            amount_cy,
            amount_py,
            change,
            change_pct: percent_of(change, amount_py),
        }
    }
}

/// Year-over-year comparison of every P&L line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YoyComparison {
    /// Current fiscal year.
    pub year: i32,
    /// Prior fiscal year.
    pub prior_year: i32,
    /// Lines in P&L display order.
    pub lines: Vec<YoyRecord>,
}

impl YoyComparison {
    /// Returns the record of a line.
    #[must_use]
    pub fn line(&self, item: impl Into<LineItem>) -> Option<&YoyRecord> {
        let item = item.into();
        self.lines.iter().find(|record| record.category == item)
    }
}
