//! Chart of accounts error types.

use ledgerlens_shared::AppError;
use thiserror::Error;

use super::Category;

/// Errors raised while building a chart of accounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// The chart has no category rules.
    #[error("Chart of accounts has no categories")]
    EmptyChart,

    /// Two categories claim the same account code.
    #[error("Account {account} is mapped to both {first} and {second}")]
    DuplicateAccount {
        /// The contested account code.
        account: String,
        /// Category that claimed the account first.
        first: Category,
        /// Category that claimed it again.
        second: Category,
    },

    /// A category appears more than once.
    #[error("Category {0} is defined more than once")]
    DuplicateCategory(Category),

    /// Two categories share a display order index.
    #[error("Display order {order} is used by both {first} and {second}")]
    DuplicateOrder {
        /// The shared order index.
        order: u32,
        /// First category with the index.
        first: Category,
        /// Second category with the index.
        second: Category,
    },

    /// A configured category name is not a known P&L category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A configured sign is neither 1 nor -1.
    #[error("Invalid sign {sign} for category {category}: expected 1 or -1")]
    InvalidSign {
        /// Category the sign was configured for.
        category: String,
        /// The rejected sign value.
        sign: i8,
    },
}

impl From<ChartError> for AppError {
    fn from(error: ChartError) -> Self {
        Self::Configuration(error.to_string())
    }
}
