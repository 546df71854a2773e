//! Integration tests for loading datasets from disk.

use std::io::Write;

use ledgerlens_core::ledger::LedgerLine;
use ledgerlens_shared::DataConfig;
use ledgerlens_store::{LedgerStore, StoreError, read_ledger_file, write_ledger_file};
use rust_decimal_macros::dec;
use tempfile::{NamedTempFile, TempDir};

const HEADER: &str = "RBUKRS,GJAHR,POPER,RACCT,RCNTR,BELNR,HSL,KSL";

fn csv_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn config(actuals: &str, budget: Option<&str>) -> DataConfig {
    DataConfig {
        actuals_path: actuals.to_string(),
        budget_path: budget.map(ToString::to_string),
    }
}

#[test]
fn test_load_actuals_and_budget() {
    let actuals = csv_file(&[
        "1000,2025,1,400000,CC1000,1000000001,-1000,-1000",
        "1000,2025,1,600000,CC5000,1000000002,400,400",
    ]);
    let budget = csv_file(&["1000,2025,1,600000,CC5000,,420,420"]);

    let dataset = LedgerStore::load(&config(
        actuals.path().to_str().unwrap(),
        Some(budget.path().to_str().unwrap()),
    ))
    .unwrap();

    assert_eq!(dataset.actual_count(), 2);
    assert_eq!(dataset.budget_count(), 1);
    assert_eq!(dataset.budget().unwrap()[0].amount_reporting, dec!(420));
}

#[test]
fn test_missing_files_are_unloaded_sources() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");

    let dataset = LedgerStore::load(&config(missing.to_str().unwrap(), None)).unwrap();

    assert!(dataset.actuals().is_none());
    assert!(dataset.budget().is_none());
}

#[test]
fn test_header_only_file_is_empty_source() {
    let actuals = csv_file(&[]);

    let dataset = LedgerStore::load(&config(actuals.path().to_str().unwrap(), None)).unwrap();

    assert_eq!(dataset.actuals().map(<[LedgerLine]>::len), Some(0));
}

#[test]
fn test_malformed_file_is_error() {
    let actuals = csv_file(&["1000,2025,1,400000,,,not-a-number,1"]);

    let result = LedgerStore::load(&config(actuals.path().to_str().unwrap(), None));

    assert!(matches!(result, Err(StoreError::Csv { .. })));
}

#[test]
fn test_write_file_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("acdoca_actuals.csv");
    let lines = vec![
        LedgerLine::new("3000", 2024, 12, "720000", dec!(-12.34))
            .with_local_amount(dec!(-16.68))
            .with_document("1000000042"),
        LedgerLine::new("3000", 2024, 12, "600000", dec!(100)).with_cost_center("CC2000"),
    ];

    write_ledger_file(&path, &lines).unwrap();

    assert_eq!(read_ledger_file(&path).unwrap(), lines);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_ledger_file(&dir.path().join("absent.csv")).unwrap_err();

    assert!(matches!(err, StoreError::Io { .. }));
}
