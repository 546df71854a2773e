//! Report scope filters.

use std::collections::BTreeSet;

use ledgerlens_shared::types::CompanyCode;
use serde::{Deserialize, Serialize};

use super::LedgerLine;

/// Restricts which ledger lines a report sees.
///
/// Each dimension is optional: an absent year or an empty set means "no filter"
/// on that dimension. Sets are ordered so that equal scopes hash equally, which
/// lets a scope serve as a cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    /// Company codes to include.
    #[serde(default)]
    pub company_codes: BTreeSet<CompanyCode>,
    /// Fiscal year to include.
    #[serde(default)]
    pub year: Option<i32>,
    /// Fiscal periods to include.
    #[serde(default)]
    pub periods: BTreeSet<u32>,
}

impl Scope {
    /// Creates a scope that matches every line.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds a company code to the filter.
    #[must_use]
    pub fn with_company(mut self, company_code: impl Into<CompanyCode>) -> Self {
        self.company_codes.insert(company_code.into());
        self
    }

    /// Restricts the scope to one fiscal year.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Adds fiscal periods to the filter.
    #[must_use]
    pub fn with_periods(mut self, periods: impl IntoIterator<Item = u32>) -> Self {
        self.periods.extend(periods);
        self
    }

    /// Returns true if the scope has no filter at all.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.company_codes.is_empty() && self.year.is_none() && self.periods.is_empty()
    }

    /// Returns true if the line passes every active filter.
    #[must_use]
    pub fn matches(&self, line: &LedgerLine) -> bool {
        (self.company_codes.is_empty() || self.company_codes.contains(&line.company_code))
            && self.year.is_none_or(|year| line.fiscal_year == year)
            && (self.periods.is_empty() || self.periods.contains(&line.fiscal_period))
    }

    /// Filters a row source down to the lines within scope.
    pub fn filter<'a>(
        &'a self,
        lines: &'a [LedgerLine],
    ) -> impl Iterator<Item = &'a LedgerLine> + 'a {
        lines.iter().filter(move |line| self.matches(line))
    }
}
