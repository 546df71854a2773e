//! Simulation engine for running scenarios.

use ledgerlens_shared::types::AmountField;
use rust_decimal::Decimal;

use super::SimulationError;
use super::scenario::{AdjustmentType, Scenario, ScenarioOutcome};
use crate::chart::CategoryGroup;
use crate::ledger::Scope;
use crate::percent::checked_percent_of;
use crate::reports::{CategoryTotals, DerivedMetric, ReportService};

/// Engine for running what-if scenarios over aggregated category totals.
pub struct SimulationEngine;

impl SimulationEngine {
    /// Creates a new simulation engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies an adjustment to a value.
    pub fn apply_adjustment(
        value: Decimal,
        adjustment_type: AdjustmentType,
        adjustment_value: Decimal,
    ) -> Result<Decimal, SimulationError> {
        let delta = || {
            value
                .checked_mul(adjustment_value)
                .map(|product| product / Decimal::ONE_HUNDRED)
                .ok_or(SimulationError::Overflow)
        };

        match adjustment_type {
            AdjustmentType::PercentageIncrease => value.checked_add(delta()?),
            AdjustmentType::PercentageDecrease => value.checked_sub(delta()?),
            AdjustmentType::FixedAmount => Some(adjustment_value),
            AdjustmentType::FixedIncrease => value.checked_add(adjustment_value),
            AdjustmentType::FixedDecrease => value.checked_sub(adjustment_value),
        }
        .ok_or(SimulationError::Overflow)
    }

    /// Scales category totals by a scenario.
    ///
    /// Revenue categories move by `1 + revenue_change`, cost of sales and
    /// operating expenses by `1 + cost_change`. Financial and tax lines are
    /// left alone unless a category adjustment names them.
    pub fn apply(
        totals: &CategoryTotals,
        scenario: &Scenario,
    ) -> Result<CategoryTotals, SimulationError> {
        scenario.validate()?;

        let revenue_factor = Decimal::ONE + scenario.revenue_change;
        let cost_factor = Decimal::ONE + scenario.cost_change;
        let mut overflow = false;

        let scaled = totals.map_amounts(|category, amount| {
            let factor = match category.group() {
                CategoryGroup::Revenue => revenue_factor,
                CategoryGroup::CostOfSales | CategoryGroup::OperatingExpense => cost_factor,
                CategoryGroup::Financial | CategoryGroup::Tax => Decimal::ONE,
            };
            let mut value = amount.checked_mul(factor).unwrap_or_else(|| {
                overflow = true;
                Decimal::ZERO
            });

            for adjustment in scenario.adjustments.iter().filter(|a| a.category == category) {
                match Self::apply_adjustment(value, adjustment.adjustment_type, adjustment.value) {
                    Ok(adjusted) => value = adjusted,
                    Err(_) => overflow = true,
                }
            }
            value
        });

        if overflow {
            return Err(SimulationError::Overflow);
        }
        Ok(scaled)
    }

    /// Runs one scenario against base totals and recomputes the P&L.
    pub fn run(
        &self,
        base: &CategoryTotals,
        scope: &Scope,
        currency: AmountField,
        scenario: &Scenario,
    ) -> Result<ScenarioOutcome, SimulationError> {
        let base_net_income = ReportService::try_summarize(base, scope.clone(), currency)
            .ok_or(SimulationError::Overflow)?
            .amount(DerivedMetric::NetIncome);

        let adjusted = Self::apply(base, scenario)?;
        let summary = ReportService::try_summarize(&adjusted, scope.clone(), currency)
            .ok_or(SimulationError::Overflow)?;
        let kpis = ReportService::kpis_from(&summary);
        let net_income_change = kpis
            .net_income
            .checked_sub(base_net_income)
            .ok_or(SimulationError::Overflow)?;
        let net_income_change_pct = checked_percent_of(net_income_change, base_net_income.abs())
            .ok_or(SimulationError::Overflow)?;

        tracing::debug!(
            scenario = %scenario.name,
            net_income = %kpis.net_income,
            "Ran scenario"
        );

        Ok(ScenarioOutcome {
            name: scenario.name.clone(),
            revenue_change_pct: scenario.revenue_change * Decimal::ONE_HUNDRED,
            cost_change_pct: scenario.cost_change * Decimal::ONE_HUNDRED,
            summary,
            kpis,
            net_income_change,
            net_income_change_pct,
        })
    }

    /// Runs every scenario, failing on the first invalid one.
    pub fn run_all(
        &self,
        base: &CategoryTotals,
        scope: &Scope,
        currency: AmountField,
        scenarios: &[Scenario],
    ) -> Result<Vec<ScenarioOutcome>, SimulationError> {
        scenarios
            .iter()
            .map(|scenario| self.run(base, scope, currency, scenario))
            .collect()
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
