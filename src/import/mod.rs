//! Import of YNAB exports

pub mod csv;

pub use self::csv::{account_names, read_rows, required_account_names};
