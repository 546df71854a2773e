//! File-backed ledger store.
//!
//! This crate provides:
//! - CSV reading and writing of ledger lines (ACDOCA column names)
//! - Loading the configured actual and budget files into a `Dataset`

pub mod csv_file;
pub mod error;
pub mod store;

pub use csv_file::{read_ledger, read_ledger_file, write_ledger, write_ledger_file};
pub use error::StoreError;
pub use store::LedgerStore;
