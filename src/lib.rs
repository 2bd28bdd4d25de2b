//! ynab-ledger - convert YNAB register exports to ledger files
//!
//! This library reads the register CSV exported by YNAB 4 and renders it as
//! a plain-text double-entry ledger, culture-aware and deterministic.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (rows, cultures, money, transactions)
//! - `import`: CSV import of the register export
//! - `services`: Grouping of rows into transactions and whole conversions
//! - `export`: Ledger text rendering
//! - `cli`: Command handler and interactive prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_ledger::import::read_rows;
//! use ynab_ledger::services::{convert, ConvertOptions};
//!
//! let rows = read_rows(file, ',', &options.culture)?;
//! let conversion = convert(rows, &account_types, &ConvertOptions::default())?;
//! std::fs::write("register.dat", conversion.ledger)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod services;

pub use error::{LedgerError, LedgerResult};
