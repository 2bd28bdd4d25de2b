//! Line items and split markers
//!
//! A line item is one export row with its amounts interpreted in the active
//! culture. Split rows carry a `(Split i/n)` marker at the start of their
//! memo which ties them to the other parts of the same purchase.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::culture::Culture;
use super::money::{strip_abbreviation, Money};
use super::row::RawRow;
use super::warning::{Warning, WarningKind};
use crate::error::{LedgerError, LedgerResult};

/// Memo text that announces a split row
pub const SPLIT_KEYWORD: &str = "(Split";

/// Payee prefix YNAB uses for transfers between tracked accounts
pub const TRANSFER_PREFIX: &str = "Transfer : ";

static SPLIT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(Split (\d+)/(\d+)\)(.*)").expect("split marker pattern is valid")
});

/// A parsed `(Split i/n)` memo marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMarker {
    /// 1-based position of the row within its split group
    pub index: usize,
    /// Number of rows in the split group
    pub total: usize,
}

impl SplitMarker {
    /// Parse the split marker of a memo
    ///
    /// Returns `Ok(None)` for memos that don't mention a split at all and
    /// `MalformedSplit` for memos that mention one in an unexpected form.
    pub fn parse(memo: &str) -> LedgerResult<Option<Self>> {
        if !memo.contains(SPLIT_KEYWORD) {
            return Ok(None);
        }

        let malformed = || LedgerError::MalformedSplit {
            memo: memo.to_string(),
        };
        let caps = SPLIT_MARKER.captures(memo).ok_or_else(malformed)?;
        let index: usize = caps[1].parse().map_err(|_| malformed())?;
        let total: usize = caps[2].parse().map_err(|_| malformed())?;
        // an index outside 1..=total could never complete its group
        if index == 0 || index > total {
            return Err(malformed());
        }

        Ok(Some(Self { index, total }))
    }
}

/// One posting source of a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub account: String,
    pub payee: String,
    pub category: String,
    pub master_category: String,
    pub sub_category: String,
    pub memo: String,

    /// Outflow text, trimmed and without abbreviation dot
    pub outflow: String,

    /// Inflow text, trimmed and without abbreviation dot
    pub inflow: String,

    /// Parsed outflow; zero when the export left it blank
    pub outflow_amount: Money,

    /// Parsed inflow; zero when the export left it blank
    pub inflow_amount: Money,
}

impl LineItem {
    /// Interpret an export row with the given culture
    pub fn from_row(row: &RawRow, culture: &Culture) -> LedgerResult<Self> {
        let inflow = strip_abbreviation(&row.inflow).to_string();
        let outflow = strip_abbreviation(&row.outflow).to_string();

        Ok(Self {
            account: row.account.clone(),
            payee: row.payee.clone(),
            category: row.category.clone(),
            master_category: row.master_category.clone(),
            sub_category: row.sub_category.clone(),
            memo: row.memo.clone(),
            inflow_amount: parse_optional(&inflow, culture)?,
            outflow_amount: parse_optional(&outflow, culture)?,
            inflow,
            outflow,
        })
    }

    /// Check if the item brings money into the account
    pub fn has_inflow(&self) -> bool {
        !self.inflow.is_empty() && self.inflow_amount.is_positive()
    }

    /// Check if the item takes money out of the account
    pub fn has_outflow(&self) -> bool {
        !self.outflow.is_empty() && self.outflow_amount.is_positive()
    }

    /// Signed effect on the account: inflow minus outflow
    pub fn net_amount(&self) -> Money {
        self.inflow_amount - self.outflow_amount
    }

    /// The memo without its leading `(Split i/n)` marker
    ///
    /// `None` when the memo is blank or holds nothing but the marker.
    pub fn memo_without_split(&self) -> Option<&str> {
        if self.memo.trim().is_empty() {
            return None;
        }

        if self.memo.contains(SPLIT_KEYWORD) {
            if let Some(caps) = SPLIT_MARKER.captures(&self.memo) {
                let rest = caps.get(3).map_or("", |m| m.as_str()).trim();
                return if rest.is_empty() { None } else { Some(rest) };
            }
        }

        Some(self.memo.trim())
    }

    /// Check if the payee marks this item as a transfer between accounts
    pub fn is_transfer(&self) -> bool {
        self.payee.contains(TRANSFER_PREFIX)
    }

    /// The account on the other side of a transfer
    pub fn transfer_target(&self) -> Option<String> {
        self.is_transfer()
            .then(|| self.payee.replace(TRANSFER_PREFIX, ""))
    }

    /// Diagnose items that move no money, or money in both directions
    pub fn money_warning(&self, date: NaiveDate) -> Option<Warning> {
        let kind = match (self.has_inflow(), self.has_outflow()) {
            (false, false) => WarningKind::NoMoneyMoved,
            (true, true) => WarningKind::BothInflowAndOutflow,
            _ => return None,
        };
        Some(Warning::new(kind, date, &self.account, &self.payee))
    }
}

fn parse_optional(text: &str, culture: &Culture) -> LedgerResult<Money> {
    if text.is_empty() {
        Ok(Money::zero())
    } else {
        Money::parse(text, culture)
    }
}
