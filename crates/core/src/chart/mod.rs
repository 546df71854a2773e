//! Chart of accounts: the account classification table.
//!
//! Maps general ledger accounts into P&L categories, each with a sign
//! convention and a display order. The table is validated once at
//! construction and is read-only afterwards.

mod category;
mod error;
mod table;

pub use category::{Category, CategoryGroup, Sign};
pub use error::ChartError;
pub use table::{CategoryRule, ChartOfAccounts, standard_rules};
