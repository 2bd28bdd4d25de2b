//! Conversion warnings
//!
//! Suspicious but recoverable input is reported as a list of warnings on the
//! conversion result, leaving it to the caller how to surface them.

use std::fmt;

use chrono::NaiveDate;

/// What is suspicious about a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Neither inflow nor outflow
    NoMoneyMoved,
    /// Inflow and outflow on the same row
    BothInflowAndOutflow,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMoneyMoved => write!(f, "record doesn't transfer any money"),
            Self::BothInflowAndOutflow => write!(f, "record has both inflow and outflow"),
        }
    }
}

/// A non-fatal diagnostic about one line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub date: NaiveDate,
    pub account: String,
    pub payee: String,
}

impl Warning {
    pub fn new(
        kind: WarningKind,
        date: NaiveDate,
        account: impl Into<String>,
        payee: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            account: account.into(),
            payee: payee.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}): {}",
            self.date.format("%Y-%m-%d"),
            self.account,
            self.payee,
            self.kind
        )
    }
}
