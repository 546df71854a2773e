//! Compound-growth trend forecasts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::SimulationError;
use super::scenario::{MAX_CHANGE, MIN_CHANGE};
use crate::chart::Category;
use crate::reports::{MonthlyTrend, TrendPoint};

/// Growth rate used when none is given or history is too short (5%).
pub const DEFAULT_GROWTH_RATE: Decimal = dec!(0.05);

/// Longest accepted forecast horizon in periods.
pub const MAX_HORIZON: u32 = 60;

/// Where the forecast growth rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "rate", rename_all = "snake_case")]
pub enum ForecastStrategy {
    /// A fixed period-over-period rate.
    FixedRate(Decimal),
    /// Mean period-over-period growth of the series itself.
    Historical,
}

impl Default for ForecastStrategy {
    fn default() -> Self {
        Self::FixedRate(DEFAULT_GROWTH_RATE)
    }
}

impl ForecastStrategy {
    /// Resolves the growth rate for a series.
    ///
    /// `Historical` averages `(cur - prev) / prev` over consecutive points,
    /// skipping pairs whose previous value is zero. With fewer than two usable
    /// points it falls back to [`DEFAULT_GROWTH_RATE`]. The result is clamped
    /// to the accepted rate range.
    pub fn growth_rate(&self, points: &[TrendPoint]) -> Result<Decimal, SimulationError> {
        match *self {
            Self::FixedRate(rate) => {
                if (MIN_CHANGE..=MAX_CHANGE).contains(&rate) {
                    Ok(rate)
                } else {
                    Err(SimulationError::InvalidGrowthRate)
                }
            }
            Self::Historical => {
                let rates: Vec<Decimal> = points
                    .windows(2)
                    .filter(|pair| !pair[0].amount.is_zero())
                    .map(|pair| {
                        pair[1]
                            .amount
                            .checked_sub(pair[0].amount)
                            .and_then(|change| change.checked_div(pair[0].amount))
                            .ok_or(SimulationError::Overflow)
                    })
                    .collect::<Result<_, _>>()?;

                if rates.is_empty() {
                    return Ok(DEFAULT_GROWTH_RATE);
                }
                let sum = rates
                    .iter()
                    .try_fold(Decimal::ZERO, |acc, rate| acc.checked_add(*rate))
                    .ok_or(SimulationError::Overflow)?;
                let mean = (sum / Decimal::from(rates.len())).round_dp(6);
                Ok(mean.clamp(MIN_CHANGE, MAX_CHANGE))
            }
        }
    }
}

/// A trend extended into future periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Forecast {
    /// The category.
    pub category: Category,
    /// Strategy that produced the growth rate.
    pub strategy: ForecastStrategy,
    /// Period-over-period growth rate applied.
    pub growth_rate: Decimal,
    /// Observed series.
    pub history: Vec<TrendPoint>,
    /// Projected points continuing the period sequence.
    pub projections: Vec<TrendPoint>,
}

/// Projects a monthly trend `horizon` periods ahead with compound growth.
///
/// Point `k` after the last observation is `last * (1 + g)^k`, rounded to
/// cents.
pub fn forecast(
    trend: &MonthlyTrend,
    strategy: ForecastStrategy,
    horizon: u32,
) -> Result<Forecast, SimulationError> {
    if !(1..=MAX_HORIZON).contains(&horizon) {
        return Err(SimulationError::InvalidProjectionHorizon);
    }
    let last = trend.points.last().ok_or(SimulationError::NoHistoricalData)?;

    let growth_rate = strategy.growth_rate(&trend.points)?;
    let step = Decimal::ONE + growth_rate;

    let mut factor = Decimal::ONE;
    let mut period = last.fiscal_period();
    let mut projections = Vec::with_capacity(horizon as usize);

    for _ in 0..horizon {
        factor = factor.checked_mul(step).ok_or(SimulationError::Overflow)?;
        period = period.next().ok_or(SimulationError::Overflow)?;
        let amount = last
            .amount
            .checked_mul(factor)
            .ok_or(SimulationError::Overflow)?
            .round_dp(2);
        projections.push(TrendPoint::new(period, amount));
    }

    Ok(Forecast {
        category: trend.category,
        strategy,
        growth_rate,
        history: trend.points.clone(),
        projections,
    })
}
