//! Export module for ynab-ledger
//!
//! Renders grouped transactions as plain-text double-entry ledger entries.

pub mod ledger;

pub use ledger::{export_ledger, render, render_transaction, MULTIPLE_PAYEES};
