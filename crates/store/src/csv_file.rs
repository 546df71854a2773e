//! CSV codec for ledger lines.
//!
//! Files use the universal journal column names (`RBUKRS, GJAHR, POPER,
//! RACCT, RCNTR, BELNR, HSL, KSL`). Extra columns are ignored and empty
//! `RCNTR`/`BELNR` cells read as absent.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ledgerlens_core::ledger::LedgerLine;

use crate::StoreError;

/// Reads ledger lines from any CSV source with a header row.
///
/// `source_name` labels errors.
pub fn read_ledger<R: Read>(reader: R, source_name: &str) -> Result<Vec<LedgerLine>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut lines = Vec::new();
    for (index, result) in reader.deserialize::<LedgerLine>().enumerate() {
        let line = result.map_err(|source| StoreError::Csv {
            source_name: source_name.to_string(),
            source,
        })?;

        if !line.period().is_valid() {
            return Err(StoreError::InvalidPeriod {
                source_name: source_name.to_string(),
                row: index + 1,
                period: line.fiscal_period,
            });
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Reads ledger lines from a CSV file.
pub fn read_ledger_file(path: &Path) -> Result<Vec<LedgerLine>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = read_ledger(file, &path.display().to_string())?;

    tracing::debug!(path = %path.display(), rows = lines.len(), "Read ledger file");
    Ok(lines)
}

/// Writes ledger lines as CSV with a header row.
pub fn write_ledger<W: Write>(
    writer: W,
    lines: &[LedgerLine],
    source_name: &str,
) -> Result<(), StoreError> {
    let csv_error = |source| StoreError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let mut writer = csv::Writer::from_writer(writer);
    for line in lines {
        writer.serialize(line).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| csv_error(source.into()))?;
    Ok(())
}

/// Writes ledger lines to a CSV file, replacing it if it exists.
pub fn write_ledger_file(path: &Path, lines: &[LedgerLine]) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_ledger(file, lines, &path.display().to_string())?;

    tracing::info!(path = %path.display(), rows = lines.len(), "Wrote ledger file");
    Ok(())
}
