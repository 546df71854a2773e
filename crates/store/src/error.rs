//! Store error types.

use std::path::PathBuf;

use ledgerlens_shared::AppError;

/// Errors raised while reading or writing ledger files.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be opened or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A row could not be parsed or serialized.
    #[error("CSV error in {source_name}: {source}")]
    Csv {
        /// File path or other source label.
        source_name: String,
        /// Underlying error.
        source: csv::Error,
    },

    /// A row carries a posting period outside 1-12.
    #[error("Invalid fiscal period {period} in {source_name} at row {row}")]
    InvalidPeriod {
        /// File path or other source label.
        source_name: String,
        /// 1-based data row number.
        row: usize,
        /// The rejected period.
        period: u32,
    },
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        Self::DataSource(error.to_string())
    }
}
