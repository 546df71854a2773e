//! Monthly category trends.

use std::collections::BTreeMap;

use ledgerlens_shared::types::{AmountField, FiscalPeriod};
use rust_decimal::Decimal;

use super::{MonthlyTrend, TrendPoint};
use crate::chart::CategoryRule;
use crate::ledger::{LedgerLine, Scope};

/// Builds the chronological series of one category within scope.
///
/// Amounts are signed with the category's convention. Periods without
/// postings are left out rather than filled with zero.
#[must_use]
pub fn monthly_trend(
    rule: &CategoryRule,
    lines: &[LedgerLine],
    scope: &Scope,
    field: AmountField,
) -> MonthlyTrend {
    let mut by_period: BTreeMap<FiscalPeriod, Decimal> = BTreeMap::new();

    for line in scope
        .filter(lines)
        .filter(|line| rule.accounts.contains(&line.account))
    {
        *by_period.entry(line.period()).or_default() += line.amount(field);
    }

    MonthlyTrend {
        category: rule.category,
        points: by_period
            .into_iter()
            .map(|(period, amount)| TrendPoint::new(period, rule.sign.apply(amount)))
            .collect(),
    }
}
