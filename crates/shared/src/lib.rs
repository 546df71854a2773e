//! Shared types, errors, and configuration for Ledgerlens.
//!
//! This crate provides common types used across all other crates:
//! - Typed ledger codes (company, account, cost center, document)
//! - Amount column selection and fiscal period labels
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CacheConfig, ChartRuleConfig, DataConfig, ServerConfig};
pub use error::{AppError, AppResult};
