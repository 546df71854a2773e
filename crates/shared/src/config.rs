//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Ledger data sources.
    pub data: DataConfig,
    /// Report cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Optional chart of accounts override. The standard table is used when absent.
    #[serde(default)]
    pub chart: Option<Vec<ChartRuleConfig>>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Ledger data sources (ACDOCA-column CSV files).
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the actuals file.
    pub actuals_path: String,
    /// Path to the budget file. Budget comparisons report "no data" without it.
    #[serde(default)]
    pub budget_path: Option<String>,
}

/// Report cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Whether report results are cached.
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    /// Maximum number of cached reports per report kind.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    /// Time-to-live of a cached report in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_capacity() -> u64 {
    1000
}

fn default_cache_ttl() -> u64 {
    60 // 1 minute
}

/// One category rule of a configured chart of accounts.
///
/// Validated into a classification table by the core crate.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRuleConfig {
    /// Category name (e.g. "Revenue", "FX Gain/Loss").
    pub category: String,
    /// Account codes that roll up into the category.
    pub accounts: Vec<String>,
    /// Sign multiplier, 1 or -1.
    pub sign: i8,
    /// Display order index.
    pub order: u32,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERLENS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
