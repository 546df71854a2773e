//! Ledger line type.

use ledgerlens_shared::types::{
    AccountCode, AmountField, CompanyCode, CostCenter, DocumentNumber, FiscalPeriod,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of journal data.
///
/// Field names follow the universal journal (ACDOCA) column convention so that
/// extracts can be read without a mapping layer. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Company code.
    #[serde(rename = "RBUKRS")]
    pub company_code: CompanyCode,
    /// Fiscal year.
    #[serde(rename = "GJAHR")]
    pub fiscal_year: i32,
    /// Fiscal period (1-12).
    #[serde(rename = "POPER")]
    pub fiscal_period: u32,
    /// General ledger account.
    #[serde(rename = "RACCT")]
    pub account: AccountCode,
    /// Cost center. Balance sheet legs usually carry none.
    #[serde(rename = "RCNTR", default)]
    pub cost_center: Option<CostCenter>,
    /// Accounting document number. Plan (budget) rows carry none.
    #[serde(rename = "BELNR", default)]
    pub document_number: Option<DocumentNumber>,
    /// Amount in company code currency.
    #[serde(rename = "HSL", with = "rust_decimal::serde::str")]
    pub amount_local: Decimal,
    /// Amount in the normalized reporting currency.
    #[serde(rename = "KSL", with = "rust_decimal::serde::str")]
    pub amount_reporting: Decimal,
}

impl LedgerLine {
    /// Creates a line whose local and reporting amounts are equal.
    #[must_use]
    pub fn new(
        company_code: impl Into<CompanyCode>,
        fiscal_year: i32,
        fiscal_period: u32,
        account: impl Into<AccountCode>,
        amount: Decimal,
    ) -> Self {
        Self {
            company_code: company_code.into(),
            fiscal_year,
            fiscal_period,
            account: account.into(),
            cost_center: None,
            document_number: None,
            amount_local: amount,
            amount_reporting: amount,
        }
    }

    /// Sets the cost center.
    #[must_use]
    pub fn with_cost_center(mut self, cost_center: impl Into<CostCenter>) -> Self {
        self.cost_center = Some(cost_center.into());
        self
    }

    /// Sets the document number.
    #[must_use]
    pub fn with_document(mut self, document_number: impl Into<DocumentNumber>) -> Self {
        self.document_number = Some(document_number.into());
        self
    }

    /// Overrides the local currency amount.
    #[must_use]
    pub const fn with_local_amount(mut self, amount: Decimal) -> Self {
        self.amount_local = amount;
        self
    }

    /// Returns the amount of the selected column.
    #[must_use]
    pub const fn amount(&self, field: AmountField) -> Decimal {
        match field {
            AmountField::Reporting => self.amount_reporting,
            AmountField::Local => self.amount_local,
        }
    }

    /// Returns the (year, period) key of the line.
    #[must_use]
    pub const fn period(&self) -> FiscalPeriod {
        FiscalPeriod::new(self.fiscal_year, self.fiscal_period)
    }
}
