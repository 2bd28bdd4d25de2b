//! Service layer for ynab-ledger
//!
//! The service layer turns imported rows into transactions and drives a
//! complete conversion from rows to ledger text.

pub mod conversion;
pub mod grouping;

pub use conversion::{convert, Conversion, ConvertOptions};
pub use grouping::{group, group_with_context, Grouping, SplitAccumulator};
