//! Validated account classification table.

use std::collections::HashMap;

use ledgerlens_shared::ChartRuleConfig;
use ledgerlens_shared::types::AccountCode;
use serde::Serialize;

use super::{Category, ChartError, Sign};

/// One category of the chart with its accounts, sign and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    /// The P&L category.
    pub category: Category,
    /// Accounts rolling up into the category.
    pub accounts: Vec<AccountCode>,
    /// Sign applied to the summed journal amounts.
    pub sign: Sign,
    /// Display order index.
    pub order: u32,
}

impl CategoryRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(category: Category, accounts: &[&str], sign: Sign, order: u32) -> Self {
        Self {
            category,
            accounts: accounts.iter().copied().map(AccountCode::from).collect(),
            sign,
            order,
        }
    }
}

/// The standard chart used when configuration does not override it.
#[must_use]
pub fn standard_rules() -> Vec<CategoryRule> {
    use Category::{
        Cogs, ContraRevenue, DepreciationAmortization, Facilities, FxGainLoss,
        GeneralAdministrative, InterestExpense, InterestIncome, Personnel, ResearchDevelopment,
        Revenue, SalesMarketing, TaxExpense,
    };
    use Sign::{Negative, Positive};

    vec![
        CategoryRule::new(Revenue, &["400000", "401000", "402000", "403000"], Negative, 1),
        CategoryRule::new(ContraRevenue, &["410000"], Positive, 2),
        CategoryRule::new(Cogs, &["500000", "501000", "502000", "503000", "504000"], Positive, 3),
        CategoryRule::new(Personnel, &["600000", "601000", "602000"], Positive, 4),
        CategoryRule::new(Facilities, &["610000", "611000", "612000"], Positive, 5),
        CategoryRule::new(SalesMarketing, &["620000", "621000", "622000"], Positive, 6),
        CategoryRule::new(ResearchDevelopment, &["630000", "631000"], Positive, 7),
        CategoryRule::new(DepreciationAmortization, &["640000", "641000"], Positive, 8),
        CategoryRule::new(
            GeneralAdministrative,
            &["650000", "651000", "652000", "653000", "654000"],
            Positive,
            9,
        ),
        CategoryRule::new(InterestIncome, &["700000", "701000"], Negative, 10),
        CategoryRule::new(InterestExpense, &["710000"], Positive, 11),
        CategoryRule::new(FxGainLoss, &["720000", "721000"], Positive, 12),
        CategoryRule::new(TaxExpense, &["800000", "801000"], Positive, 13),
    ]
}

/// Immutable account classification table.
///
/// Rules are kept sorted by display order. Account lookup goes through a
/// reverse map built at construction.
#[derive(Debug, Clone)]
pub struct ChartOfAccounts {
    rules: Vec<CategoryRule>,
    by_account: HashMap<AccountCode, usize>,
    by_category: HashMap<Category, usize>,
}

impl ChartOfAccounts {
    /// Builds and validates a chart from category rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule list is empty, a category or display order
    /// appears twice, or two categories claim the same account.
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self, ChartError> {
        if rules.is_empty() {
            return Err(ChartError::EmptyChart);
        }

        let mut orders: HashMap<u32, Category> = HashMap::new();
        let mut accounts: HashMap<&AccountCode, Category> = HashMap::new();
        let mut categories = Vec::with_capacity(rules.len());

        for rule in &rules {
            if categories.contains(&rule.category) {
                return Err(ChartError::DuplicateCategory(rule.category));
            }
            categories.push(rule.category);

            if let Some(first) = orders.insert(rule.order, rule.category) {
                return Err(ChartError::DuplicateOrder {
                    order: rule.order,
                    first,
                    second: rule.category,
                });
            }

            for account in &rule.accounts {
                if let Some(first) = accounts.insert(account, rule.category) {
                    return Err(ChartError::DuplicateAccount {
                        account: account.to_string(),
                        first,
                        second: rule.category,
                    });
                }
            }
        }

        Ok(Self::build(rules))
    }

    /// Builds a chart from configured rules.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown category names, signs other than 1/-1, or
    /// any error of [`ChartOfAccounts::new`].
    pub fn from_config(rules: &[ChartRuleConfig]) -> Result<Self, ChartError> {
        let rules = rules
            .iter()
            .map(|rule| {
                let category = rule
                    .category
                    .parse::<Category>()
                    .map_err(|_| ChartError::UnknownCategory(rule.category.clone()))?;
                let sign = Sign::try_from(rule.sign).map_err(|sign| ChartError::InvalidSign {
                    category: rule.category.clone(),
                    sign,
                })?;
                Ok(CategoryRule {
                    category,
                    accounts: rule.accounts.iter().map(AccountCode::new).collect(),
                    sign,
                    order: rule.order,
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        Self::new(rules)
    }

    /// Returns the standard chart.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(standard_rules())
    }

    fn build(mut rules: Vec<CategoryRule>) -> Self {
        rules.sort_by_key(|rule| rule.order);

        let mut by_account = HashMap::new();
        let mut by_category = HashMap::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            by_category.insert(rule.category, index);
            for account in &rule.accounts {
                by_account.insert(account.clone(), index);
            }
        }

        Self {
            rules,
            by_account,
            by_category,
        }
    }

    /// Returns the rules in display order.
    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Returns the rule of a category, if the chart defines it.
    #[must_use]
    pub fn rule(&self, category: Category) -> Option<&CategoryRule> {
        self.by_category.get(&category).map(|&index| &self.rules[index])
    }

    /// Returns the rule an account rolls up into, if any.
    #[must_use]
    pub fn rule_for_account(&self, account: &AccountCode) -> Option<&CategoryRule> {
        self.by_account.get(account).map(|&index| &self.rules[index])
    }

    /// Returns the category an account rolls up into, if any.
    #[must_use]
    pub fn category_of(&self, account: &AccountCode) -> Option<Category> {
        self.rule_for_account(account).map(|rule| rule.category)
    }

    /// Returns the number of mapped accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.by_account.len()
    }
}

impl Default for ChartOfAccounts {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_rule(category: &str, accounts: &[&str], sign: i8, order: u32) -> ChartRuleConfig {
        ChartRuleConfig {
            category: category.to_string(),
            accounts: accounts.iter().map(ToString::to_string).collect(),
            sign,
            order,
        }
    }

    #[test]
    fn test_standard_rules_are_valid() {
        let chart = ChartOfAccounts::new(standard_rules()).unwrap();
        assert_eq!(chart.rules().len(), 13);
        assert_eq!(chart.account_count(), 35);
    }

    #[test]
    fn test_every_covered_account_maps_to_exactly_one_category() {
        let chart = ChartOfAccounts::standard();
        for rule in chart.rules() {
            for account in &rule.accounts {
                assert_eq!(chart.category_of(account), Some(rule.category));
                let owners = chart
                    .rules()
                    .iter()
                    .filter(|r| r.accounts.contains(account))
                    .count();
                assert_eq!(owners, 1, "{account} has {owners} owners");
            }
        }
    }

    #[test]
    fn test_rules_sorted_by_order() {
        let mut rules = standard_rules();
        rules.reverse();
        let chart = ChartOfAccounts::new(rules).unwrap();

        let orders: Vec<u32> = chart.rules().iter().map(|r| r.order).collect();
        assert_eq!(orders, (1..=13).collect::<Vec<_>>());
        assert_eq!(chart.rules()[0].category, Category::Revenue);
    }

    #[test]
    fn test_unmapped_account() {
        let chart = ChartOfAccounts::standard();
        assert_eq!(chart.category_of(&AccountCode::from("110000")), None);
        assert_eq!(
            chart.category_of(&AccountCode::from("721000")),
            Some(Category::FxGainLoss)
        );
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let rules = vec![
            CategoryRule::new(Category::Revenue, &["400000"], Sign::Negative, 1),
            CategoryRule::new(Category::ContraRevenue, &["400000"], Sign::Positive, 2),
        ];

        let err = ChartOfAccounts::new(rules).unwrap_err();
        assert_eq!(
            err,
            ChartError::DuplicateAccount {
                account: "400000".to_string(),
                first: Category::Revenue,
                second: Category::ContraRevenue,
            }
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let rules = vec![
            CategoryRule::new(Category::Revenue, &["400000"], Sign::Negative, 1),
            CategoryRule::new(Category::Revenue, &["401000"], Sign::Negative, 2),
        ];

        assert_eq!(
            ChartOfAccounts::new(rules).unwrap_err(),
            ChartError::DuplicateCategory(Category::Revenue)
        );
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let rules = vec![
            CategoryRule::new(Category::Revenue, &["400000"], Sign::Negative, 1),
            CategoryRule::new(Category::Cogs, &["500000"], Sign::Positive, 1),
        ];

        assert!(matches!(
            ChartOfAccounts::new(rules),
            Err(ChartError::DuplicateOrder { order: 1, .. })
        ));
    }

    #[test]
    fn test_empty_chart_rejected() {
        assert_eq!(
            ChartOfAccounts::new(Vec::new()).unwrap_err(),
            ChartError::EmptyChart
        );
    }

    #[test]
    fn test_from_config() {
        let chart = ChartOfAccounts::from_config(&[
            config_rule("Revenue", &["400000"], -1, 1),
            config_rule("FX Gain/Loss", &["720000", "721000"], -1, 12),
        ])
        .unwrap();

        let fx = chart.rule(Category::FxGainLoss).unwrap();
        assert_eq!(fx.sign, Sign::Negative);
        assert!(chart.rule(Category::Cogs).is_none());
    }

    #[test]
    fn test_from_config_rejects_unknown_category() {
        let err = ChartOfAccounts::from_config(&[config_rule("Goodwill", &["190000"], 1, 1)])
            .unwrap_err();
        assert_eq!(err, ChartError::UnknownCategory("Goodwill".to_string()));
    }

    #[test]
    fn test_from_config_rejects_invalid_sign() {
        let err =
            ChartOfAccounts::from_config(&[config_rule("Revenue", &["400000"], 0, 1)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidSign { sign: 0, .. }));
    }
}
