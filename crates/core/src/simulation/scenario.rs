//! Simulation scenario types.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::SimulationError;
use crate::chart::Category;
use crate::reports::{KpiSet, PlSummary};

/// Smallest accepted change fraction (-100%).
pub const MIN_CHANGE: Decimal = Decimal::NEGATIVE_ONE;

/// Largest accepted change fraction (+1000%).
pub const MAX_CHANGE: Decimal = Decimal::TEN;

/// Largest accepted magnitude of a category adjustment value.
pub const MAX_ADJUSTMENT: Decimal = dec!(1000000000000000);

/// A what-if scenario applied to a P&L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Scenario description.
    #[serde(default)]
    pub description: Option<String>,
    /// Fractional change applied to revenue categories (0.15 = +15%).
    #[serde(default)]
    pub revenue_change: Decimal,
    /// Fractional change applied to cost of sales and operating expenses.
    #[serde(default)]
    pub cost_change: Decimal,
    /// Category-level adjustments applied after the broad changes.
    #[serde(default)]
    pub adjustments: Vec<CategoryAdjustment>,
}

/// An adjustment of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAdjustment {
    /// Category to adjust.
    pub category: Category,
    /// Type of adjustment.
    pub adjustment_type: AdjustmentType,
    /// Adjustment value (percent points for percentage types).
    pub value: Decimal,
}

/// Type of scenario adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// Increase by a percentage.
    PercentageIncrease,
    /// Decrease by a percentage.
    PercentageDecrease,
    /// Set to a fixed amount.
    FixedAmount,
    /// Add a fixed amount.
    FixedIncrease,
    /// Subtract a fixed amount.
    FixedDecrease,
}

impl Scenario {
    /// Creates a scenario with broad revenue and cost changes.
    #[must_use]
    pub fn new(name: impl Into<String>, revenue_change: Decimal, cost_change: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            revenue_change,
            cost_change,
            adjustments: Vec::new(),
        }
    }

    /// Adds a category adjustment.
    #[must_use]
    pub fn with_adjustment(
        mut self,
        category: Category,
        adjustment_type: AdjustmentType,
        value: Decimal,
    ) -> Self {
        self.adjustments.push(CategoryAdjustment {
            category,
            adjustment_type,
            value,
        });
        self
    }

    /// The standard scenario set.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Base Case", Decimal::ZERO, Decimal::ZERO),
            Self::new("Optimistic", dec!(0.15), dec!(-0.05)),
            Self::new("Pessimistic", dec!(-0.10), dec!(0.10)),
            Self::new("Cost Reduction", Decimal::ZERO, dec!(-0.15)),
            Self::new("Growth Investment", dec!(0.20), dec!(0.10)),
        ]
    }

    /// Checks that both changes lie within -1.0 to 10.0 and that no
    /// adjustment value exceeds [`MAX_ADJUSTMENT`] in magnitude.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (field, value) in [
            ("revenue_change", self.revenue_change),
            ("cost_change", self.cost_change),
        ] {
            if !(MIN_CHANGE..=MAX_CHANGE).contains(&value) {
                return Err(SimulationError::InvalidScenarioChange {
                    scenario: self.name.clone(),
                    field,
                });
            }
        }
        if let Some(adjustment) = self
            .adjustments
            .iter()
            .find(|adjustment| adjustment.value.abs() > MAX_ADJUSTMENT)
        {
            return Err(SimulationError::InvalidAdjustmentValue {
                scenario: self.name.clone(),
                category: adjustment.category,
            });
        }
        Ok(())
    }
}

/// Result of running one scenario against a base P&L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Revenue change in percent.
    pub revenue_change_pct: Decimal,
    /// Cost change in percent.
    pub cost_change_pct: Decimal,
    /// Adjusted P&L with recomputed derived metrics.
    pub summary: PlSummary,
    /// KPIs of the adjusted P&L.
    pub kpis: KpiSet,
    /// Net income change against the base.
    pub net_income_change: Decimal,
    /// Net income change in percent of the base, one decimal.
    pub net_income_change_pct: Decimal,
}
