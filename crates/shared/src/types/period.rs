//! Fiscal period (year + posting period) keys.

use serde::{Deserialize, Serialize};

/// Number of posting periods in a fiscal year.
pub const PERIODS_PER_YEAR: u32 = 12;

/// Earliest fiscal year accepted from user input.
pub const MIN_YEAR: i32 = 1;

/// Latest fiscal year accepted from user input.
pub const MAX_YEAR: i32 = 9999;

/// A posting period within a fiscal year (`GJAHR` + `POPER`).
///
/// Ordering is chronological: by year, then by period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalPeriod {
    /// Fiscal year.
    pub year: i32,
    /// Period number within the year (1-12).
    pub period: u32,
}

impl FiscalPeriod {
    /// Creates a fiscal period.
    #[must_use]
    pub const fn new(year: i32, period: u32) -> Self {
        Self { year, period }
    }

    /// Returns true if the period number is within 1-12.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.period >= 1 && self.period <= PERIODS_PER_YEAR
    }

    /// Returns the following period, rolling over into the next year after
    /// period 12. `None` past the last representable year.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        if self.period < PERIODS_PER_YEAR {
            return Some(Self::new(self.year, self.period + 1));
        }
        match self.year.checked_add(1) {
            Some(year) => Some(Self::new(year, 1)),
            None => None,
        }
    }

    /// Returns the preceding period, rolling back into the prior year before
    /// period 1. `None` before the first representable year.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        if self.period > 1 {
            return Some(Self::new(self.year, self.period - 1));
        }
        match self.year.checked_sub(1) {
            Some(year) => Some(Self::new(year, PERIODS_PER_YEAR)),
            None => None,
        }
    }

    /// Returns the `YYYY-PP` label used in trend charts.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.period)
    }
}

impl std::fmt::Display for FiscalPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.period)
    }
}

impl std::str::FromStr for FiscalPeriod {
    type Err = String;

    /// Parses a `YYYY-PP` label (`2025-03`, `2025-3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid fiscal period: {s} (expected YYYY-PP)");
        let (year, period) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse().map_err(|_| invalid())?;
        let period = period.parse().map_err(|_| invalid())?;

        let parsed = Self::new(year, period);
        if parsed.is_valid() && (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(parsed)
        } else {
            Err(invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_zero_pads_period() {
        assert_eq!(FiscalPeriod::new(2025, 3).label(), "2025-03");
        assert_eq!(FiscalPeriod::new(2025, 12).to_string(), "2025-12");
    }

    #[test]
    fn test_next_rolls_over_year() {
        assert_eq!(FiscalPeriod::new(2025, 11).next(), Some(FiscalPeriod::new(2025, 12)));
        assert_eq!(FiscalPeriod::new(2025, 12).next(), Some(FiscalPeriod::new(2026, 1)));
    }

    #[test]
    fn test_previous_rolls_back_year() {
        assert_eq!(FiscalPeriod::new(2025, 2).previous(), Some(FiscalPeriod::new(2025, 1)));
        assert_eq!(FiscalPeriod::new(2025, 1).previous(), Some(FiscalPeriod::new(2024, 12)));
    }

    #[test]
    fn test_year_extremes_do_not_wrap() {
        assert_eq!(FiscalPeriod::new(i32::MAX, 12).next(), None);
        assert_eq!(FiscalPeriod::new(i32::MIN, 1).previous(), None);
        assert_eq!(
            FiscalPeriod::new(i32::MAX, 11).next(),
            Some(FiscalPeriod::new(i32::MAX, 12))
        );
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("2025-03".parse(), Ok(FiscalPeriod::new(2025, 3)));
        assert_eq!(" 2024-12 ".parse(), Ok(FiscalPeriod::new(2024, 12)));
        assert!("2025-13".parse::<FiscalPeriod>().is_err());
        assert!("2025".parse::<FiscalPeriod>().is_err());
        assert!("abcd-01".parse::<FiscalPeriod>().is_err());
        assert!("10000-01".parse::<FiscalPeriod>().is_err());
        assert!("0-01".parse::<FiscalPeriod>().is_err());
    }

    #[test]
    fn test_chronological_ordering() {
        let mut periods = vec![
            FiscalPeriod::new(2025, 2),
            FiscalPeriod::new(2024, 12),
            FiscalPeriod::new(2025, 1),
        ];
        periods.sort();
        assert_eq!(
            periods,
            vec![
                FiscalPeriod::new(2024, 12),
                FiscalPeriod::new(2025, 1),
                FiscalPeriod::new(2025, 2),
            ]
        );
    }

    #[test]
    fn test_validity() {
        assert!(FiscalPeriod::new(2025, 1).is_valid());
        assert!(FiscalPeriod::new(2025, 12).is_valid());
        assert!(!FiscalPeriod::new(2025, 0).is_valid());
        assert!(!FiscalPeriod::new(2025, 13).is_valid());
    }
}
