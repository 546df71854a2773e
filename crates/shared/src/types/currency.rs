//! Amount column selection.
//!
//! Ledger lines carry two amounts: the company's local currency (`HSL`) and
//! the normalized group reporting currency (`KSL`). Reports pick one of them.

use serde::{Deserialize, Serialize};

/// Which amount column of a ledger line to aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountField {
    /// Normalized reporting currency amount (`KSL`, USD in the sample data).
    #[default]
    Reporting,
    /// Company code currency amount (`HSL`).
    Local,
}

impl std::fmt::Display for AmountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reporting => write!(f, "reporting"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for AmountField {
    type Err = String;

    /// Accepts `reporting`/`local` as well as the legacy `USD`/`LOCAL` selectors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "REPORTING" | "USD" | "KSL" => Ok(Self::Reporting),
            "LOCAL" | "HSL" => Ok(Self::Local),
            _ => Err(format!("Unknown currency selector: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_amount_field_display() {
        assert_eq!(AmountField::Reporting.to_string(), "reporting");
        assert_eq!(AmountField::Local.to_string(), "local");
    }

    #[test]
    fn test_amount_field_from_str() {
        assert_eq!(AmountField::from_str("USD").unwrap(), AmountField::Reporting);
        assert_eq!(AmountField::from_str("reporting").unwrap(), AmountField::Reporting);
        assert_eq!(AmountField::from_str("LOCAL").unwrap(), AmountField::Local);
        assert_eq!(AmountField::from_str("hsl").unwrap(), AmountField::Local);
        assert!(AmountField::from_str("EUR").is_err());
        assert!(AmountField::from_str("").is_err());
    }

    #[test]
    fn test_amount_field_default_is_reporting() {
        assert_eq!(AmountField::default(), AmountField::Reporting);
    }
}
