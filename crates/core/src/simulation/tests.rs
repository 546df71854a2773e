//! Property-based tests for the simulation module.

use ledgerlens_shared::types::{AmountField, FiscalPeriod};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::SimulationEngine;
use super::forecast::{ForecastStrategy, forecast};
use super::SimulationError;
use super::scenario::{AdjustmentType, MAX_ADJUSTMENT, Scenario};
use crate::chart::Category;
use crate::ledger::{LedgerLine, Scope};
use crate::reports::{DerivedMetric, MonthlyTrend, ReportService, TrendPoint};

fn ledger() -> impl Strategy<Value = Vec<LedgerLine>> {
    prop::collection::vec(
        (
            prop::sample::select(vec![
                "400000", "410000", "500000", "600000", "620000", "640000", "700000", "710000",
                "721000", "800000",
            ]),
            -1_000_000i64..1_000_000,
        )
            .prop_map(|(account, cents)| {
                LedgerLine::new("1000", 2025, 1, account, Decimal::new(cents, 2))
            }),
        0..30,
    )
}

fn series() -> impl Strategy<Value = MonthlyTrend> {
    prop::collection::vec(100_000i64..110_000, 1..24).prop_map(|amounts| {
        let mut period = FiscalPeriod::new(2024, 1);
        let points = amounts
            .into_iter()
            .map(|cents| {
                let point = TrendPoint::new(period, Decimal::new(cents, 2));
                period = period.next().unwrap();
                point
            })
            .collect();
        MonthlyTrend {
            category: Category::Revenue,
            points,
        }
    })
}

proptest! {
    /// The base case reproduces the unadjusted P&L.
    #[test]
    fn test_base_case_is_identity(lines in ledger()) {
        let reports = ReportService::default();
        let totals = reports.category_totals(&lines, &Scope::all(), AmountField::Reporting);
        let base = ReportService::summarize(&totals, Scope::all(), AmountField::Reporting);

        let outcome = SimulationEngine::new()
            .run(&totals, &Scope::all(), AmountField::Reporting, &Scenario::new("Base Case", Decimal::ZERO, Decimal::ZERO))
            .unwrap();

        prop_assert_eq!(outcome.summary, base);
        prop_assert_eq!(outcome.net_income_change, Decimal::ZERO);
    }

    /// Derived identities survive scenario adjustment.
    #[test]
    fn test_scenarios_keep_derived_identities(lines in ledger()) {
        let totals = ReportService::default().category_totals(&lines, &Scope::all(), AmountField::Reporting);
        let outcomes = SimulationEngine::new()
            .run_all(&totals, &Scope::all(), AmountField::Reporting, &Scenario::defaults())
            .unwrap();

        for outcome in outcomes {
            let s = &outcome.summary;
            prop_assert_eq!(
                s.amount(DerivedMetric::GrossProfit),
                s.amount(DerivedMetric::NetRevenue) - s.amount(Category::Cogs)
            );
            prop_assert_eq!(
                s.amount(DerivedMetric::NetIncome),
                s.amount(DerivedMetric::Ebt) - s.amount(Category::TaxExpense)
            );
        }
    }

    /// Extreme adjustments are rejected with an error, never a panic.
    #[test]
    fn test_extreme_adjustments_are_errors(
        lines in ledger(),
        revenue in prop::sample::select(vec![Decimal::MAX, Decimal::MIN, MAX_ADJUSTMENT, Decimal::new(1, 28)]),
        cogs in -1_000_000i64..1_000_000,
        revenue_change in prop::sample::select(vec![Decimal::ZERO, Decimal::TEN]),
    ) {
        let totals = ReportService::default().category_totals(&lines, &Scope::all(), AmountField::Reporting);
        let scenario = Scenario::new("extreme", revenue_change, Decimal::ZERO)
            .with_adjustment(Category::Revenue, AdjustmentType::FixedAmount, revenue)
            .with_adjustment(Category::Cogs, AdjustmentType::FixedAmount, Decimal::new(cogs, 2));

        match SimulationEngine::new().run(&totals, &Scope::all(), AmountField::Reporting, &scenario) {
            Ok(outcome) => prop_assert_eq!(
                outcome.summary.amount(DerivedMetric::GrossProfit),
                outcome.summary.amount(DerivedMetric::NetRevenue) - outcome.summary.amount(Category::Cogs)
            ),
            Err(error) => prop_assert!(matches!(
                error,
                SimulationError::Overflow | SimulationError::InvalidAdjustmentValue { .. }
            ), "unexpected simulation error: {:?}", error),
        }
    }

    /// A forecast has exactly `horizon` consecutive points after the history.
    #[test]
    fn test_forecast_length_and_continuity(trend in series(), horizon in 1u32..=60) {
        let result = forecast(&trend, ForecastStrategy::Historical, horizon).unwrap();

        prop_assert_eq!(result.projections.len(), horizon as usize);
        let mut expected = trend.points.last().unwrap().fiscal_period();
        for point in &result.projections {
            expected = expected.next().unwrap();
            prop_assert_eq!(point.fiscal_period(), expected);
            prop_assert!(point.period >= 1 && point.period <= 12);
        }
    }

    /// Zero growth projects the last observation unchanged.
    #[test]
    fn test_zero_growth_is_flat(trend in series(), horizon in 1u32..=12) {
        let last = trend.points.last().unwrap().amount;
        let result = forecast(&trend, ForecastStrategy::FixedRate(Decimal::ZERO), horizon).unwrap();

        for point in &result.projections {
            prop_assert_eq!(point.amount, last);
        }
    }
}
