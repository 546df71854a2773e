//! KPI goal tracking.
//!
//! A goal names a KPI and a target value. Progress is the current value as a
//! percentage of the target, capped at 100 once reported.

use ledgerlens_shared::types::CompanyCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reports::KpiSet;

/// Progress at or above which a goal counts as on track.
pub const ON_TRACK_PROGRESS: Decimal = dec!(75);

/// Goal-tracking errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// The goal list is empty.
    #[error("At least one goal is required")]
    NoGoals,

    /// Progress or gap of a goal does not fit a decimal.
    #[error("Goal '{goal}': arithmetic overflow")]
    Overflow {
        /// Goal name.
        goal: String,
    },
}

/// A KPI a goal can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KpiMetric {
    /// Net revenue.
    Revenue,
    /// Gross profit.
    GrossProfit,
    /// Gross margin in percent.
    GrossMargin,
    /// EBITDA.
    Ebitda,
    /// EBITDA margin in percent.
    EbitdaMargin,
    /// EBIT.
    Ebit,
    /// EBIT margin in percent.
    EbitMargin,
    /// Net income.
    NetIncome,
    /// Net margin in percent.
    NetMargin,
}

impl KpiMetric {
    /// Reads the metric from a KPI set.
    #[must_use]
    pub const fn value(self, kpis: &KpiSet) -> Decimal {
        match self {
            Self::Revenue => kpis.revenue,
            Self::GrossProfit => kpis.gross_profit,
            Self::GrossMargin => kpis.gross_margin_pct,
            Self::Ebitda => kpis.ebitda,
            Self::EbitdaMargin => kpis.ebitda_margin_pct,
            Self::Ebit => kpis.ebit,
            Self::EbitMargin => kpis.ebit_margin_pct,
            Self::NetIncome => kpis.net_income,
            Self::NetMargin => kpis.net_margin_pct,
        }
    }
}

/// A target for one KPI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Display name.
    pub name: String,
    /// Tracked KPI.
    pub metric: KpiMetric,
    /// Target value, in percent for margin metrics.
    pub target: Decimal,
}

impl Goal {
    /// Creates a goal.
    #[must_use]
    pub fn new(name: impl Into<String>, metric: KpiMetric, target: Decimal) -> Self {
        Self {
            name: name.into(),
            metric,
            target,
        }
    }

    /// The standard goal set.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Gross Margin Target", KpiMetric::GrossMargin, dec!(40)),
            Self::new("EBITDA Margin Target", KpiMetric::EbitdaMargin, dec!(25)),
        ]
    }
}

/// Where a goal stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Progress of 100% or more.
    Achieved,
    /// Progress of at least 75%.
    OnTrack,
    /// Anything below.
    Behind,
}

impl GoalStatus {
    /// Classifies uncapped progress.
    #[must_use]
    pub fn from_progress(progress: Decimal) -> Self {
        if progress >= Decimal::ONE_HUNDRED {
            Self::Achieved
        } else if progress >= ON_TRACK_PROGRESS {
            Self::OnTrack
        } else {
            Self::Behind
        }
    }
}

/// Progress of one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    /// Goal name.
    pub name: String,
    /// Tracked KPI.
    pub metric: KpiMetric,
    /// Current KPI value.
    pub current: Decimal,
    /// Target value.
    pub target: Decimal,
    /// Progress in percent, capped at 100, one decimal.
    pub progress: Decimal,
    /// Status from the uncapped progress.
    pub status: GoalStatus,
    /// Target minus current.
    pub gap: Decimal,
}

impl GoalProgress {
    /// Measures a goal against a KPI set. A zero target yields zero progress.
    pub fn measure(goal: &Goal, kpis: &KpiSet) -> Result<Self, GoalError> {
        let overflow = || GoalError::Overflow {
            goal: goal.name.clone(),
        };
        let current = goal.metric.value(kpis);
        let progress = if goal.target.is_zero() {
            Decimal::ZERO
        } else {
            current
                .checked_div(goal.target)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(overflow)?
        };

        Ok(Self {
            name: goal.name.clone(),
            metric: goal.metric,
            current,
            target: goal.target,
            progress: progress.min(Decimal::ONE_HUNDRED).round_dp(1),
            status: GoalStatus::from_progress(progress),
            gap: goal.target.checked_sub(current).ok_or_else(overflow)?,
        })
    }
}

/// Goal progress of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyGoals {
    /// Company code.
    pub company_code: CompanyCode,
    /// One entry per goal, in goal order.
    pub goals: Vec<GoalProgress>,
    /// Mean of the reported progress values, one decimal.
    pub overall_progress: Decimal,
}

impl CompanyGoals {
    /// Measures every goal against a company's KPIs.
    pub fn track(
        company_code: CompanyCode,
        kpis: &KpiSet,
        goals: &[Goal],
    ) -> Result<Self, GoalError> {
        if goals.is_empty() {
            return Err(GoalError::NoGoals);
        }
        let goals = goals
            .iter()
            .map(|goal| GoalProgress::measure(goal, kpis))
            .collect::<Result<Vec<_>, _>>()?;

        let total = goals
            .iter()
            .try_fold(Decimal::ZERO, |sum, goal| sum.checked_add(goal.progress))
            .ok_or_else(|| GoalError::Overflow {
                goal: "overall".to_string(),
            })?;
        let overall_progress = (total / Decimal::from(goals.len())).round_dp(1);

        Ok(Self {
            company_code,
            goals,
            overall_progress,
        })
    }
}

/// Goal progress per company, with the goals that were tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalTracking {
    /// One entry per company in scope, by company code.
    pub companies: Vec<CompanyGoals>,
    /// The goals measured.
    pub goal_definitions: Vec<Goal>,
}
