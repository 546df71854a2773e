//! P&L categories and sign conventions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A P&L line grouping a set of account codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Product and service revenue.
    #[serde(rename = "Revenue")]
    Revenue,
    /// Returns, discounts and allowances.
    #[serde(rename = "Contra Revenue")]
    ContraRevenue,
    /// Cost of goods sold.
    #[serde(rename = "COGS")]
    Cogs,
    /// Salaries, benefits and payroll taxes.
    #[serde(rename = "Personnel")]
    Personnel,
    /// Rent, utilities and maintenance.
    #[serde(rename = "Facilities")]
    Facilities,
    /// Advertising, events and commissions.
    #[serde(rename = "Sales & Marketing")]
    SalesMarketing,
    /// Research and development.
    #[serde(rename = "R&D")]
    ResearchDevelopment,
    /// Depreciation and amortization.
    #[serde(rename = "D&A")]
    DepreciationAmortization,
    /// General and administrative.
    #[serde(rename = "G&A")]
    GeneralAdministrative,
    /// Interest earned.
    #[serde(rename = "Interest Income")]
    InterestIncome,
    /// Interest paid.
    #[serde(rename = "Interest Expense")]
    InterestExpense,
    /// Foreign exchange revaluation result.
    #[serde(rename = "FX Gain/Loss")]
    FxGainLoss,
    /// Income tax.
    #[serde(rename = "Tax Expense")]
    TaxExpense,
}

/// Coarse grouping of categories used by scenario adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    /// Revenue and contra revenue.
    Revenue,
    /// Cost of goods sold.
    CostOfSales,
    /// Operating expenses.
    OperatingExpense,
    /// Interest and FX.
    Financial,
    /// Income tax.
    Tax,
}

impl Category {
    /// Every category in standard display order.
    pub const ALL: [Self; 13] = [
        Self::Revenue,
        Self::ContraRevenue,
        Self::Cogs,
        Self::Personnel,
        Self::Facilities,
        Self::SalesMarketing,
        Self::ResearchDevelopment,
        Self::DepreciationAmortization,
        Self::GeneralAdministrative,
        Self::InterestIncome,
        Self::InterestExpense,
        Self::FxGainLoss,
        Self::TaxExpense,
    ];

    /// Operating expense categories summed into Total OpEx.
    pub const OPERATING_EXPENSES: [Self; 6] = [
        Self::Personnel,
        Self::Facilities,
        Self::SalesMarketing,
        Self::ResearchDevelopment,
        Self::DepreciationAmortization,
        Self::GeneralAdministrative,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::ContraRevenue => "Contra Revenue",
            Self::Cogs => "COGS",
            Self::Personnel => "Personnel",
            Self::Facilities => "Facilities",
            Self::SalesMarketing => "Sales & Marketing",
            Self::ResearchDevelopment => "R&D",
            Self::DepreciationAmortization => "D&A",
            Self::GeneralAdministrative => "G&A",
            Self::InterestIncome => "Interest Income",
            Self::InterestExpense => "Interest Expense",
            Self::FxGainLoss => "FX Gain/Loss",
            Self::TaxExpense => "Tax Expense",
        }
    }

    /// Returns the snake_case identifier, usable in URLs.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::ContraRevenue => "contra_revenue",
            Self::Cogs => "cogs",
            Self::Personnel => "personnel",
            Self::Facilities => "facilities",
            Self::SalesMarketing => "sales_marketing",
            Self::ResearchDevelopment => "r_and_d",
            Self::DepreciationAmortization => "d_and_a",
            Self::GeneralAdministrative => "g_and_a",
            Self::InterestIncome => "interest_income",
            Self::InterestExpense => "interest_expense",
            Self::FxGainLoss => "fx_gain_loss",
            Self::TaxExpense => "tax_expense",
        }
    }

    /// Returns the group this category belongs to.
    #[must_use]
    pub const fn group(&self) -> CategoryGroup {
        match self {
            Self::Revenue | Self::ContraRevenue => CategoryGroup::Revenue,
            Self::Cogs => CategoryGroup::CostOfSales,
            Self::Personnel
            | Self::Facilities
            | Self::SalesMarketing
            | Self::ResearchDevelopment
            | Self::DepreciationAmortization
            | Self::GeneralAdministrative => CategoryGroup::OperatingExpense,
            Self::InterestIncome | Self::InterestExpense | Self::FxGainLoss => {
                CategoryGroup::Financial
            }
            Self::TaxExpense => CategoryGroup::Tax,
        }
    }

    /// Returns true for income categories, where actuals above plan are favorable.
    #[must_use]
    pub const fn is_income(&self) -> bool {
        matches!(self, Self::Revenue | Self::InterestIncome)
    }

    /// Returns true for categories scaled by a cost change in scenarios.
    #[must_use]
    pub const fn is_cost(&self) -> bool {
        matches!(
            self.group(),
            CategoryGroup::CostOfSales | CategoryGroup::OperatingExpense
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Accepts either the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// Sign multiplier normalizing debit/credit polarity.
///
/// Revenue and income accounts carry credits (negative amounts) in the
/// journal, so their totals are negated for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// Multiply by +1.
    Positive,
    /// Multiply by -1.
    Negative,
}

impl Sign {
    /// Applies the sign to an amount.
    #[must_use]
    pub fn apply(self, amount: Decimal) -> Decimal {
        match self {
            Self::Positive => amount,
            Self::Negative if amount.is_zero() => Decimal::ZERO,
            Self::Negative => -amount,
        }
    }

    /// Returns the multiplier as an integer.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

impl TryFrom<i8> for Sign {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Positive),
            -1 => Ok(Self::Negative),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Revenue", Category::Revenue)]
    #[case("revenue", Category::Revenue)]
    #[case("Sales & Marketing", Category::SalesMarketing)]
    #[case("sales_marketing", Category::SalesMarketing)]
    #[case("FX Gain/Loss", Category::FxGainLoss)]
    #[case("r_and_d", Category::ResearchDevelopment)]
    #[case(" COGS ", Category::Cogs)]
    fn test_category_from_str(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_category() {
        assert!("Goodwill".parse::<Category>().is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::SalesMarketing).unwrap();
        assert_eq!(json, "\"Sales & Marketing\"");

        let parsed: Category = serde_json::from_str("\"D&A\"").unwrap();
        assert_eq!(parsed, Category::DepreciationAmortization);
    }

    #[test]
    fn test_groups() {
        assert_eq!(Category::ContraRevenue.group(), CategoryGroup::Revenue);
        assert_eq!(Category::FxGainLoss.group(), CategoryGroup::Financial);
        assert!(Category::Cogs.is_cost());
        assert!(Category::GeneralAdministrative.is_cost());
        assert!(!Category::InterestExpense.is_cost());
        assert!(!Category::TaxExpense.is_cost());
        assert!(Category::InterestIncome.is_income());
        assert!(!Category::ContraRevenue.is_income());
    }

    #[test]
    fn test_sign() {
        assert_eq!(Sign::Negative.apply(dec!(-1000)), dec!(1000));
        assert_eq!(Sign::Positive.apply(dec!(-1000)), dec!(-1000));
        assert_eq!(Sign::try_from(-1), Ok(Sign::Negative));
        assert_eq!(Sign::try_from(1), Ok(Sign::Positive));
        assert_eq!(Sign::try_from(0), Err(0));
        assert_eq!(Sign::Negative.as_i8(), -1);
    }
}
