//! Dataset loading from configured files.

use std::path::Path;

use ledgerlens_core::ledger::{Dataset, LedgerLine};
use ledgerlens_shared::DataConfig;

use crate::{StoreError, read_ledger_file};

/// Loads ledger datasets from the paths in [`DataConfig`].
pub struct LedgerStore;

impl LedgerStore {
    /// Loads the actual and budget files.
    ///
    /// A file that does not exist leaves its source unloaded, which reports
    /// surface as "no data". A file that exists but cannot be parsed is an
    /// error.
    pub fn load(config: &DataConfig) -> Result<Dataset, StoreError> {
        let actuals = Self::load_optional(Path::new(&config.actuals_path), "actuals")?;
        let budget = match &config.budget_path {
            Some(path) => Self::load_optional(Path::new(path), "budget")?,
            None => {
                tracing::info!("No budget file configured");
                None
            }
        };

        let dataset = Dataset::new(actuals, budget);
        tracing::info!(
            actuals = dataset.actual_count(),
            budget = dataset.budget_count(),
            "Loaded ledger dataset"
        );
        Ok(dataset)
    }

    fn load_optional(path: &Path, kind: &str) -> Result<Option<Vec<LedgerLine>>, StoreError> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), kind, "Ledger file not found, source left unloaded");
            return Ok(None);
        }
        read_ledger_file(path).map(Some)
    }
}
