//! Common types used across the application.

pub mod code;
pub mod currency;
pub mod period;

pub use code::*;
pub use currency::AmountField;
pub use period::{FiscalPeriod, MAX_YEAR, MIN_YEAR};
