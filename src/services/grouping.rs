//! Grouping of export rows into transactions
//!
//! The export writes a split purchase as consecutive rows tagged
//! `(Split i/n)`, in any order, and several split groups may follow each
//! other directly (`1/2, 2/2, 1/3, 2/3, 3/3`). A [`SplitAccumulator`]
//! collects the parts of the current group; seeing an index that is already
//! buffered, or a row without a marker, completes the group.

use log::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    AccountTypes, Culture, RawRow, SplitMarker, Transaction, TransactionContext, Warning,
};

/// Buffered parts of the split group currently being read
#[derive(Debug, Default)]
pub struct SplitAccumulator {
    /// Declared size of the buffered group
    expected: usize,
    /// Buffered rows by split index, in arrival order
    parts: Vec<(usize, RawRow)>,
}

impl SplitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of buffered parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Buffer a split row
    ///
    /// When the row's index is already buffered, a new group has started:
    /// the previous group is returned completed, ordered by memo.
    pub fn push(&mut self, marker: SplitMarker, row: RawRow) -> LedgerResult<Option<Vec<RawRow>>> {
        if self.parts.is_empty() {
            self.expected = marker.total;
        }

        let mut completed = None;
        if self.parts.iter().any(|(index, _)| *index == marker.index) {
            debug!(
                "Split {}/{} starts a new group after {} buffered parts",
                marker.index,
                marker.total,
                self.parts.len()
            );
            let mut rows = self.finish()?.unwrap_or_default();
            rows.sort_by(|a, b| a.memo.cmp(&b.memo));
            completed = Some(rows);
            self.expected = marker.total;
        }

        self.parts.push((marker.index, row));
        Ok(completed)
    }

    /// Take the buffered group, if any, checking that no part is missing
    pub fn finish(&mut self) -> LedgerResult<Option<Vec<RawRow>>> {
        if self.parts.is_empty() {
            return Ok(None);
        }
        if self.parts.len() != self.expected {
            return Err(LedgerError::IncompleteSplit {
                expected: self.expected,
                found: self.parts.len(),
            });
        }

        let rows = std::mem::take(&mut self.parts)
            .into_iter()
            .map(|(_, row)| row)
            .collect();
        Ok(Some(rows))
    }
}

/// Result of grouping a batch of rows
#[derive(Debug, Clone)]
pub struct Grouping {
    /// Transactions in input order, inbound transfer copies removed
    pub transactions: Vec<Transaction>,
    /// Money-state warnings of every transaction built, including dropped ones
    pub warnings: Vec<Warning>,
}

/// Group export rows into transactions
///
/// Rows without a split marker become one transaction each; split groups
/// become one transaction with one line item per part. Of the two rows the
/// export writes for a transfer only the paying side is kept.
pub fn group(
    rows: impl IntoIterator<Item = RawRow>,
    account_types: &AccountTypes,
    use_clear: bool,
    culture: Culture,
) -> LedgerResult<Grouping> {
    let context = TransactionContext::new(account_types.clone(), use_clear, culture);
    group_with_context(rows, &context)
}

/// Group export rows using an existing transaction context
pub fn group_with_context(
    rows: impl IntoIterator<Item = RawRow>,
    context: &TransactionContext,
) -> LedgerResult<Grouping> {
    let mut accumulator = SplitAccumulator::new();
    let mut transactions = Vec::new();

    for row in rows {
        match SplitMarker::parse(&row.memo)? {
            Some(marker) => {
                if let Some(group) = accumulator.push(marker, row)? {
                    transactions.push(Transaction::from_rows(&group, context)?);
                }
            }
            None => {
                if let Some(group) = accumulator.finish()? {
                    transactions.push(Transaction::from_rows(&group, context)?);
                }
                transactions.push(Transaction::from_row(&row, context)?);
            }
        }
    }

    if let Some(group) = accumulator.finish()? {
        transactions.push(Transaction::from_rows(&group, context)?);
    }

    let warnings: Vec<Warning> = transactions
        .iter()
        .flat_map(|txn| txn.warnings().iter().cloned())
        .collect();
    for warning in &warnings {
        warn!("{}", warning);
    }

    let built = transactions.len();
    transactions.retain(|txn| !txn.is_inbound_transfer_copy());
    debug!(
        "Grouped {} transactions, dropped {} inbound transfer copies",
        built,
        built - transactions.len()
    );

    Ok(Grouping {
        transactions,
        warnings,
    })
}
