//! Core data models for ynab-ledger
//!
//! This module contains the data structures of the conversion: raw export
//! rows, cultures and money, account classification, line items and the
//! logical transactions assembled from them.

pub mod account;
pub mod culture;
pub mod line_item;
pub mod money;
pub mod row;
pub mod transaction;
pub mod warning;

pub use account::{AccountType, AccountTypes};
pub use culture::{Culture, SymbolPlacement};
pub use line_item::{LineItem, SplitMarker, SPLIT_KEYWORD, TRANSFER_PREFIX};
pub use money::Money;
pub use row::RawRow;
pub use transaction::{GroupingKey, Transaction, TransactionContext};
pub use warning::{Warning, WarningKind};
