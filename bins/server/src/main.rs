//! Ledgerlens API Server
//!
//! Main entry point for the P&L reporting service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerlens_api::{AppState, create_router};
use ledgerlens_core::analytics::{AnalyticsService, ReportCaches};
use ledgerlens_core::chart::ChartOfAccounts;
use ledgerlens_shared::{AppConfig, AppResult};
use ledgerlens_store::LedgerStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let analytics = build_analytics(&config)?;

    // Create router
    let app = create_router(AppState::new(analytics));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the analytics service from the configured chart, ledger files and cache.
fn build_analytics(config: &AppConfig) -> AppResult<AnalyticsService> {
    // Chart of accounts: configured override or the standard table
    let chart = match &config.chart {
        Some(rules) => ChartOfAccounts::from_config(rules)?,
        None => ChartOfAccounts::standard(),
    };
    info!(
        categories = chart.rules().len(),
        accounts = chart.account_count(),
        custom = config.chart.is_some(),
        "Chart of accounts ready"
    );

    // Load ledger files
    let dataset = LedgerStore::load(&config.data)?;
    info!(
        actual_rows = dataset.actual_count(),
        budget_rows = dataset.budget_count(),
        "Ledger loaded"
    );

    let analytics = AnalyticsService::new(Arc::new(chart), dataset);
    if !config.cache.enabled {
        return Ok(analytics);
    }
    info!(
        max_capacity = config.cache.max_capacity,
        ttl_secs = config.cache.ttl_secs,
        "Report cache enabled"
    );
    Ok(analytics.with_caches(ReportCaches::from_config(&config.cache)))
}
