//! Derived P&L metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CategoryTotals;
use crate::chart::Category;

/// A subtotal computed from category totals by a fixed formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedMetric {
    /// Revenue less contra revenue.
    #[serde(rename = "Net Revenue")]
    NetRevenue,
    /// Net revenue less COGS.
    #[serde(rename = "Gross Profit")]
    GrossProfit,
    /// Sum of the operating expense categories.
    #[serde(rename = "Total OpEx")]
    TotalOpex,
    /// Gross profit less operating expenses before D&A.
    #[serde(rename = "EBITDA")]
    Ebitda,
    /// Gross profit less total operating expenses.
    #[serde(rename = "EBIT")]
    Ebit,
    /// EBIT after net interest and FX.
    #[serde(rename = "EBT")]
    Ebt,
    /// EBT less tax expense.
    #[serde(rename = "Net Income")]
    NetIncome,
}

impl DerivedMetric {
    /// Every derived metric in display order.
    pub const ALL: [Self; 7] = [
        Self::NetRevenue,
        Self::GrossProfit,
        Self::TotalOpex,
        Self::Ebitda,
        Self::Ebit,
        Self::Ebt,
        Self::NetIncome,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NetRevenue => "Net Revenue",
            Self::GrossProfit => "Gross Profit",
            Self::TotalOpex => "Total OpEx",
            Self::Ebitda => "EBITDA",
            Self::Ebit => "EBIT",
            Self::Ebt => "EBT",
            Self::NetIncome => "Net Income",
        }
    }

    /// Returns the fractional display order placing the metric between categories.
    #[must_use]
    pub const fn order(&self) -> Decimal {
        match self {
            Self::NetRevenue => Decimal::from_parts(25, 0, 0, false, 1),
            Self::GrossProfit => Decimal::from_parts(35, 0, 0, false, 1),
            Self::TotalOpex => Decimal::from_parts(95, 0, 0, false, 1),
            Self::Ebitda => Decimal::from_parts(96, 0, 0, false, 1),
            Self::Ebit => Decimal::from_parts(97, 0, 0, false, 1),
            Self::Ebt => Decimal::from_parts(125, 0, 0, false, 1),
            Self::NetIncome => Decimal::from_parts(14, 0, 0, false, 0),
        }
    }
}

impl std::fmt::Display for DerivedMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived metrics of one scope, always recomputed from category totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    /// Net Revenue.
    pub net_revenue: Decimal,
    /// Gross Profit.
    pub gross_profit: Decimal,
    /// Total OpEx.
    pub total_opex: Decimal,
    /// EBITDA.
    pub ebitda: Decimal,
    /// EBIT.
    pub ebit: Decimal,
    /// EBT.
    pub ebt: Decimal,
    /// Net Income.
    pub net_income: Decimal,
}

impl DerivedMetrics {
    /// Computes every metric from category totals.
    #[must_use]
    pub fn compute(totals: &CategoryTotals) -> Self {
        let net_revenue = totals.get(Category::Revenue) - totals.get(Category::ContraRevenue);
        let gross_profit = net_revenue - totals.get(Category::Cogs);
        let total_opex: Decimal = Category::OPERATING_EXPENSES
            .iter()
            .map(|&category| totals.get(category))
            .sum();
        let ebitda = gross_profit - (total_opex - totals.get(Category::DepreciationAmortization));
        let ebit = gross_profit - total_opex;
        let net_interest =
            totals.get(Category::InterestExpense) - totals.get(Category::InterestIncome);
        let ebt = ebit - net_interest - totals.get(Category::FxGainLoss);
        let net_income = ebt - totals.get(Category::TaxExpense);

        Self {
            net_revenue,
            gross_profit,
            total_opex,
            ebitda,
            ebit,
            ebt,
            net_income,
        }
    }

    /// Computes every metric with checked arithmetic.
    ///
    /// Returns `None` if any subtotal overflows. Used for scenario totals,
    /// which are not bounded by ledger sums.
    #[must_use]
    pub fn checked_compute(totals: &CategoryTotals) -> Option<Self> {
        let net_revenue = totals
            .get(Category::Revenue)
            .checked_sub(totals.get(Category::ContraRevenue))?;
        let gross_profit = net_revenue.checked_sub(totals.get(Category::Cogs))?;
        let total_opex = Category::OPERATING_EXPENSES
            .iter()
            .try_fold(Decimal::ZERO, |sum, &category| {
                sum.checked_add(totals.get(category))
            })?;
        let ebitda = gross_profit.checked_sub(
            total_opex.checked_sub(totals.get(Category::DepreciationAmortization))?,
        )?;
        let ebit = gross_profit.checked_sub(total_opex)?;
        let net_interest = totals
            .get(Category::InterestExpense)
            .checked_sub(totals.get(Category::InterestIncome))?;
        let ebt = ebit
            .checked_sub(net_interest)?
            .checked_sub(totals.get(Category::FxGainLoss))?;
        let net_income = ebt.checked_sub(totals.get(Category::TaxExpense))?;

        Some(Self {
            net_revenue,
            gross_profit,
            total_opex,
            ebitda,
            ebit,
            ebt,
            net_income,
        })
    }

    /// Returns the value of one metric.
    #[must_use]
    pub const fn get(&self, metric: DerivedMetric) -> Decimal {
        match metric {
            DerivedMetric::NetRevenue => self.net_revenue,
            DerivedMetric::GrossProfit => self.gross_profit,
            DerivedMetric::TotalOpex => self.total_opex,
            DerivedMetric::Ebitda => self.ebitda,
            DerivedMetric::Ebit => self.ebit,
            DerivedMetric::Ebt => self.ebt,
            DerivedMetric::NetIncome => self.net_income,
        }
    }
}
