//! Category aggregation.

use std::collections::HashMap;

use ledgerlens_shared::types::{AccountCode, AmountField};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::chart::{Category, ChartOfAccounts};
use crate::ledger::{LedgerLine, Scope};

/// Signed total of one category for a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// Sum of the category's account amounts with the sign applied.
    pub amount: Decimal,
    /// Display order index of the category.
    pub order: u32,
}

/// Totals of every chart category, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    /// Returns the total of a category, zero if the chart does not define it.
    #[must_use]
    pub fn get(&self, category: Category) -> Decimal {
        self.0
            .iter()
            .find(|total| total.category == category)
            .map_or(Decimal::ZERO, |total| total.amount)
    }

    /// Iterates over the totals in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a copy with every amount passed through `f`.
    #[must_use]
    pub fn map_amounts(&self, mut f: impl FnMut(Category, Decimal) -> Decimal) -> Self {
        Self(
            self.0
                .iter()
                .map(|total| CategoryTotal {
                    amount: f(total.category, total.amount),
                    ..*total
                })
                .collect(),
        )
    }
}

/// Sums the selected amount column per account code.
pub fn account_totals<'a>(
    lines: impl Iterator<Item = &'a LedgerLine>,
    field: AmountField,
) -> HashMap<&'a AccountCode, Decimal> {
    let mut totals: HashMap<&AccountCode, Decimal> = HashMap::new();
    for line in lines {
        *totals.entry(&line.account).or_default() += line.amount(field);
    }
    totals
}

/// Aggregates the lines within scope into signed category totals.
///
/// Accounts absent from the data contribute zero, so an empty row set yields
/// a zero total for every category of the chart.
#[must_use]
pub fn aggregate(
    chart: &ChartOfAccounts,
    lines: &[LedgerLine],
    scope: &Scope,
    field: AmountField,
) -> CategoryTotals {
    let by_account = account_totals(scope.filter(lines), field);

    CategoryTotals(
        chart
            .rules()
            .iter()
            .map(|rule| {
                let raw: Decimal = rule
                    .accounts
                    .iter()
                    .filter_map(|account| by_account.get(account))
                    .copied()
                    .sum();
                CategoryTotal {
                    category: rule.category,
                    amount: rule.sign.apply(raw),
                    order: rule.order,
                }
            })
            .collect(),
    )
}
