//! Raw export rows
//!
//! One row of a YNAB register export. Amounts stay as the export wrote them;
//! they are only interpreted once a culture is known.

use chrono::NaiveDate;

/// A single row of a YNAB register export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// The account that the money is coming into or going out of
    pub account: String,

    /// Flag color, e.g. Red, Orange, Blue
    pub flag: String,

    /// Check number, if any
    pub check_number: String,

    /// Date the transaction occurred
    pub date: NaiveDate,

    /// Who received or paid the money; `Transfer : NAME` for transfers
    pub payee: String,

    /// Full category, `MASTER:SUB`
    pub category: String,

    /// Top-level category
    pub master_category: String,

    /// Specific category
    pub sub_category: String,

    /// Free-text memo, possibly starting with `(Split i/n)`
    pub memo: String,

    /// Outflow amount as formatted by the export
    pub outflow: String,

    /// Inflow amount as formatted by the export
    pub inflow: String,

    /// Cleared status: `C` or `U`
    pub cleared: String,

    /// Running balance of the account after this row
    pub running_balance: String,
}
