//! Scope query parameters.

use std::str::FromStr;

use ledgerlens_core::ledger::Scope;
use ledgerlens_shared::types::{AmountField, CompanyCode, MAX_YEAR, MIN_YEAR};
use serde::Deserialize;

use crate::ApiError;

/// Query parameters shared by every report endpoint.
///
/// Lists are comma separated: `?company_codes=1000,2000&year=2025&periods=1,2,3`.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    /// Company codes to include.
    pub company_codes: Option<String>,
    /// Fiscal year.
    pub year: Option<String>,
    /// Fiscal periods to include.
    pub periods: Option<String>,
    /// Amount column: `reporting` (default) or `local`.
    pub currency: Option<String>,
}

impl ScopeQuery {
    /// Builds the report scope.
    ///
    /// Empty lists mean "no filter". Numbers that parse but match no data (such
    /// as period 13) are accepted and produce empty reports.
    pub fn scope(&self) -> Result<Scope, ApiError> {
        let mut scope = Scope::all();

        if let Some(codes) = &self.company_codes {
            scope.company_codes = split_list(codes).map(CompanyCode::new).collect();
        }
        if let Some(year) = self.year() {
            scope.year = Some(year?);
        }
        if let Some(periods) = &self.periods {
            scope.periods = split_list(periods)
                .map(|p| parse_number::<u32>("periods", p))
                .collect::<Result<_, _>>()?;
        }

        Ok(scope)
    }

    /// Returns the parsed `year`, if given. Years outside 1-9999 are rejected.
    pub fn year(&self) -> Option<Result<i32, ApiError>> {
        self.year
            .as_deref()
            .map(str::trim)
            .filter(|year| !year.is_empty())
            .map(|year| {
                let parsed = parse_number("year", year)?;
                if (MIN_YEAR..=MAX_YEAR).contains(&parsed) {
                    Ok(parsed)
                } else {
                    Err(ApiError::validation(format!(
                        "year must be between {MIN_YEAR} and {MAX_YEAR}: {year}"
                    )))
                }
            })
    }

    /// Returns the selected amount column.
    pub fn currency(&self) -> Result<AmountField, ApiError> {
        match self.currency.as_deref().map(str::trim) {
            None | Some("") => Ok(AmountField::default()),
            Some(value) => AmountField::from_str(value).map_err(ApiError::validation),
        }
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Parses a numeric parameter, naming it in the error.
pub fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid {name}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(company_codes: Option<&str>, year: Option<&str>, periods: Option<&str>) -> ScopeQuery {
        ScopeQuery {
            company_codes: company_codes.map(ToString::to_string),
            year: year.map(ToString::to_string),
            periods: periods.map(ToString::to_string),
            currency: None,
        }
    }

    #[test]
    fn test_empty_query_is_unfiltered() {
        assert!(ScopeQuery::default().scope().unwrap().is_unfiltered());
        assert!(query(Some(""), Some(""), Some(" , ")).scope().unwrap().is_unfiltered());
    }

    #[test]
    fn test_lists_are_parsed() {
        let scope = query(Some("1000, 2000"), Some("2025"), Some("1,2,3"))
            .scope()
            .unwrap();

        assert_eq!(scope.company_codes.len(), 2);
        assert_eq!(scope.year, Some(2025));
        assert_eq!(scope.periods.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        assert!(query(None, Some("twenty"), None).scope().is_err());
        assert!(query(None, None, Some("1,x")).scope().is_err());
    }

    #[test]
    fn test_out_of_range_year_rejected() {
        assert!(query(None, Some("-2147483648"), None).scope().is_err());
        assert!(query(None, Some("10000"), None).scope().is_err());
        assert!(query(None, Some("0"), None).scope().is_err());
        assert_eq!(query(None, Some("9999"), None).scope().unwrap().year, Some(9999));
    }

    #[test]
    fn test_out_of_range_period_accepted() {
        let scope = query(None, None, Some("13")).scope().unwrap();
        assert!(scope.periods.contains(&13));
    }

    #[test]
    fn test_currency() {
        let mut q = ScopeQuery::default();
        assert_eq!(q.currency().unwrap(), AmountField::Reporting);

        q.currency = Some("local".to_string());
        assert_eq!(q.currency().unwrap(), AmountField::Local);

        q.currency = Some("EUR".to_string());
        assert!(q.currency().is_err());
    }
}
