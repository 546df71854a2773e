//! Synthetic ledger seeder for Ledgerlens development and testing.
//!
//! Generates balanced ACDOCA journal entries for three company codes (USD, EUR,
//! SGD) with seasonality, year-over-year growth and FX revaluation, plus a
//! budget slightly above plan, and writes them as CSV files the server reads.
//!
//! Usage: cargo run --bin seeder -- --months 24 --end 2025-12 --seed 42

mod generator;
mod master;

use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use ledgerlens_core::ledger::Scope;
use ledgerlens_core::reports::ReportService;
use ledgerlens_shared::types::FiscalPeriod;
use ledgerlens_store::write_ledger_file;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::generator::Generator;
use crate::master::{COMPANIES, Company};

/// File name of the generated actuals.
const ACTUALS_FILE: &str = "acdoca_actuals.csv";

/// File name of the generated budget.
const BUDGET_FILE: &str = "acdoca_budget.csv";

/// Generate synthetic ACDOCA actual and budget files.
#[derive(Debug, Parser)]
#[command(name = "seeder", version, about)]
struct Args {
    /// Number of months of actuals to generate.
    #[arg(long, default_value_t = 24)]
    months: u32,

    /// Last period to generate (YYYY-MM). Defaults to the current month.
    #[arg(long)]
    end: Option<FiscalPeriod>,

    /// Directory receiving the CSV files.
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Company codes to generate (comma separated). Defaults to all.
    #[arg(long, value_delimiter = ',')]
    companies: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seeder=info,ledgerlens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.months > 0, "--months must be at least 1");

    let end = args.end.unwrap_or_else(|| {
        let today = chrono::Utc::now().date_naive();
        FiscalPeriod::new(today.year(), today.month())
    });

    let companies: Vec<Company> = COMPANIES
        .into_iter()
        .filter(|c| args.companies.is_empty() || args.companies.iter().any(|code| code == c.code))
        .collect();
    anyhow::ensure!(
        !companies.is_empty(),
        "No known company codes in {:?}",
        args.companies
    );

    info!(months = args.months, end = %end, seed = ?args.seed, "Generating ledger");
    let ledger = Generator::new(args.seed)
        .with_companies(&companies)
        .generate(args.months, end);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create {}", args.output_dir.display()))?;

    let actuals_path = args.output_dir.join(ACTUALS_FILE);
    let budget_path = args.output_dir.join(BUDGET_FILE);
    write_ledger_file(&actuals_path, &ledger.actuals)?;
    write_ledger_file(&budget_path, &ledger.budget)?;

    info!(rows = ledger.actuals.len(), path = %actuals_path.display(), "Saved actuals");
    info!(rows = ledger.budget.len(), path = %budget_path.display(), "Saved budget");

    let reports = ReportService::default();
    for company in &companies {
        let scope = Scope::all().with_company(company.code).with_year(end.year);
        let kpis = reports.kpis(&ledger.actuals, &scope);
        info!(
            company = company.code,
            year = end.year,
            revenue = %kpis.revenue,
            gross_margin_pct = %kpis.gross_margin_pct,
            net_income = %kpis.net_income,
            "Summary (USD)"
        );
    }

    Ok(())
}
