//! Conversion service
//!
//! Runs a whole batch from export rows to ledger text. Either the complete
//! ledger is produced or nothing is.

use log::info;

use crate::error::LedgerResult;
use crate::export::ledger::render;
use crate::models::{AccountTypes, Culture, RawRow, Warning};

use super::grouping::group;

/// Options for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Render the cleared marker (`*`/`!`) in transaction headers
    pub use_clear: bool,
    /// Culture amounts are written in
    pub culture: Culture,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            use_clear: true,
            culture: Culture::en_us(),
        }
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rendered ledger document
    pub ledger: String,
    /// Non-fatal diagnostics found along the way
    pub warnings: Vec<Warning>,
    /// Number of transactions written to the ledger
    pub transaction_count: usize,
}

/// Convert export rows to ledger text
pub fn convert(
    rows: impl IntoIterator<Item = RawRow>,
    account_types: &AccountTypes,
    options: &ConvertOptions,
) -> LedgerResult<Conversion> {
    let grouping = group(rows, account_types, options.use_clear, options.culture)?;
    let ledger = render(&grouping.transactions)?;

    info!(
        "Converted {} transactions with {} warnings",
        grouping.transactions.len(),
        grouping.warnings.len()
    );

    Ok(Conversion {
        ledger,
        warnings: grouping.warnings,
        transaction_count: grouping.transactions.len(),
    })
}
