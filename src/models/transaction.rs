//! Transaction model
//!
//! A transaction is one logical accounting event: either a single export row
//! or all parts of a split, reassembled. Transactions are validated once on
//! construction and never change afterwards.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use super::account::{AccountType, AccountTypes};
use super::culture::Culture;
use super::line_item::LineItem;
use super::money::Money;
use super::row::RawRow;
use super::warning::Warning;
use crate::error::{LedgerError, LedgerResult};

/// The fields every row of one transaction must agree on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupingKey {
    pub flag: String,
    pub check_number: String,
    pub date: NaiveDate,
    pub cleared: String,
    pub running_balance: String,
}

impl GroupingKey {
    /// The grouping key of a row
    pub fn of(row: &RawRow) -> Self {
        Self {
            flag: row.flag.clone(),
            check_number: row.check_number.clone(),
            date: row.date,
            cleared: row.cleared.clone(),
            running_balance: row.running_balance.clone(),
        }
    }
}

/// Settings shared by every transaction of one conversion
#[derive(Debug, Clone)]
pub struct TransactionContext {
    /// Classification of accounts and transfer targets
    pub account_types: Arc<AccountTypes>,
    /// Whether to render the cleared marker (`*`/`!`)
    pub use_clear: bool,
    /// Culture the amounts are written in
    pub culture: Culture,
}

impl TransactionContext {
    pub fn new(account_types: AccountTypes, use_clear: bool, culture: Culture) -> Self {
        Self {
            account_types: Arc::new(account_types),
            use_clear,
            culture,
        }
    }
}

/// A logical transaction, possibly assembled from several split rows
#[derive(Debug, Clone)]
pub struct Transaction {
    key: GroupingKey,
    context: TransactionContext,
    line_items: Vec<LineItem>,
    warnings: Vec<Warning>,
}

impl Transaction {
    /// Build a transaction from a single row
    pub fn from_row(row: &RawRow, context: &TransactionContext) -> LedgerResult<Self> {
        Self::from_rows(std::slice::from_ref(row), context)
    }

    /// Build a transaction from all rows of a split group
    ///
    /// Line items end up sorted by inflow, then outflow, then payee.
    pub fn from_rows(rows: &[RawRow], context: &TransactionContext) -> LedgerResult<Self> {
        let first = rows
            .first()
            .ok_or_else(|| LedgerError::Validation("No rows for transaction".into()))?;

        let key = GroupingKey::of(first);
        if rows.iter().any(|row| GroupingKey::of(row) != key) {
            return Err(LedgerError::InconsistentGrouping);
        }

        let mut line_items = rows
            .iter()
            .map(|row| LineItem::from_row(row, &context.culture))
            .collect::<LedgerResult<Vec<_>>>()?;
        line_items.sort_by(|a, b| {
            a.inflow_amount
                .cmp(&b.inflow_amount)
                .then_with(|| a.outflow_amount.cmp(&b.outflow_amount))
                .then_with(|| a.payee.cmp(&b.payee))
        });

        if line_items.len() > 1 {
            if let Some(transfer) = line_items.iter().find(|item| item.is_transfer()) {
                return Err(LedgerError::SplitTransfer {
                    payee: transfer.payee.clone(),
                });
            }
        }

        let warnings = line_items
            .iter()
            .filter_map(|item| item.money_warning(key.date))
            .collect();

        Ok(Self {
            key,
            context: context.clone(),
            line_items,
            warnings,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.key.date
    }

    pub fn check_number(&self) -> &str {
        &self.key.check_number
    }

    pub fn flag(&self) -> &str {
        &self.key.flag
    }

    pub fn culture(&self) -> &Culture {
        &self.context.culture
    }

    pub fn use_clear(&self) -> bool {
        self.context.use_clear
    }

    /// Line items in canonical order
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// The first line item in canonical order
    pub fn first_line_item(&self) -> &LineItem {
        // from_rows rejects empty input
        &self.line_items[0]
    }

    /// Money-state warnings found while building the transaction
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if the cleared marker says the transaction has settled
    pub fn is_cleared(&self) -> bool {
        self.key.cleared.trim() == "C"
    }

    /// Signed change to the primary account: sum of inflow minus outflow
    pub fn total_amount(&self) -> Money {
        self.line_items.iter().map(LineItem::net_amount).sum()
    }

    pub fn total_inflow(&self) -> Money {
        self.line_items.iter().map(|item| item.inflow_amount).sum()
    }

    pub fn total_outflow(&self) -> Money {
        self.line_items.iter().map(|item| item.outflow_amount).sum()
    }

    pub fn has_multiple_line_items(&self) -> bool {
        self.line_items.len() > 1
    }

    pub fn has_multiple_payees(&self) -> bool {
        distinct(self.line_items.iter().map(|item| item.payee.as_str())) > 1
    }

    pub fn has_multiple_accounts(&self) -> bool {
        distinct(self.line_items.iter().map(|item| item.account.as_str())) > 1
    }

    /// Check if any line item is a transfer between accounts
    pub fn is_transfer(&self) -> bool {
        self.line_items.iter().any(LineItem::is_transfer)
    }

    /// Check if this is the receiving side's copy of a transfer
    ///
    /// The export lists a transfer once per account. Only the paying side's
    /// row is kept; the single-item, outflow-free copy is redundant.
    pub fn is_inbound_transfer_copy(&self) -> bool {
        match self.line_items.as_slice() {
            [item] => item.is_transfer() && !item.has_outflow(),
            _ => false,
        }
    }

    /// Look up the type of an account in the conversion's classification
    pub fn account_type(&self, account: &str) -> LedgerResult<AccountType> {
        self.context.account_types.get(account)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WarningKind;

    fn context() -> TransactionContext {
        let mut types = AccountTypes::new();
        types.insert("Checking Account", AccountType::Assets);
        types.insert("Savings Account", AccountType::Assets);
        TransactionContext::new(types, true, Culture::en_us())
    }

    fn row(memo: &str, outflow: &str, payee: &str) -> RawRow {
        RawRow {
            account: "Checking Account".into(),
            check_number: "123456".into(),
            date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            payee: payee.into(),
            master_category: "Everyday Expenses".into(),
            sub_category: "Groceries".into(),
            memo: memo.into(),
            outflow: outflow.into(),
            inflow: "$0.00".into(),
            cleared: "C".into(),
            running_balance: "1,234.56".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_row() {
        let txn = Transaction::from_row(&row("Food", "$42.42", "Megacorp LLC"), &context()).unwrap();
        assert_eq!(txn.line_items().len(), 1);
        assert_eq!(txn.date(), NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert_eq!(txn.check_number(), "123456");
        assert!(txn.is_cleared());
        assert_eq!(txn.total_amount(), Money::from_minor(-4242, 2));
        assert!(!txn.is_transfer());
        assert!(txn.warnings().is_empty());
    }

    #[test]
    fn test_line_items_are_sorted() {
        let rows = vec![
            row("(Split 2/3) Meat", "$42.42", "Megacorp LLC"),
            row("(Split 1/3) Produce", "$12.42", "Megacorp LLC"),
            row("(Split 3/3) Bread", "$12.42", "Bakery"),
        ];
        let txn = Transaction::from_rows(&rows, &context()).unwrap();
        let memos: Vec<_> = txn.line_items().iter().map(|i| i.memo.as_str()).collect();
        assert_eq!(memos, vec!["(Split 3/3) Bread", "(Split 1/3) Produce", "(Split 2/3) Meat"]);
        assert_eq!(txn.total_outflow(), Money::from_minor(6726, 2));
        assert!(txn.has_multiple_payees());
        assert!(!txn.has_multiple_accounts());
    }

    #[test]
    fn test_empty_rows() {
        let err = Transaction::from_rows(&[], &context()).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn test_inconsistent_grouping() {
        let first = row("(Split 1/2)", "$1.00", "Megacorp LLC");
        let mut second = row("(Split 2/2)", "$2.00", "Megacorp LLC");
        second.running_balance = "999.00".into();

        let err = Transaction::from_rows(&[first, second], &context()).unwrap_err();
        assert!(matches!(err, LedgerError::InconsistentGrouping));
    }

    #[test]
    fn test_split_transfer_rejected() {
        let rows = vec![
            row("(Split 1/2)", "$1.00", "Megacorp LLC"),
            row("(Split 2/2)", "$2.00", "Transfer : Savings Account"),
        ];
        let err = Transaction::from_rows(&rows, &context()).unwrap_err();
        assert!(
            matches!(err, LedgerError::SplitTransfer { ref payee } if payee == "Transfer : Savings Account")
        );
    }

    #[test]
    fn test_inbound_transfer_copy() {
        let mut inbound = row("", "$0.00", "Transfer : Checking Account");
        inbound.inflow = "$42.42".into();
        let txn = Transaction::from_row(&inbound, &context()).unwrap();
        assert!(txn.is_transfer());
        assert!(txn.is_inbound_transfer_copy());

        let outbound = row("", "$42.42", "Transfer : Savings Account");
        let txn = Transaction::from_row(&outbound, &context()).unwrap();
        assert!(txn.is_transfer());
        assert!(!txn.is_inbound_transfer_copy());
    }

    #[test]
    fn test_warnings_are_collected() {
        let txn = Transaction::from_row(&row("", "$0.00", "Megacorp LLC"), &context()).unwrap();
        assert_eq!(txn.warnings().len(), 1);
        assert_eq!(txn.warnings()[0].kind, WarningKind::NoMoneyMoved);
    }

    #[test]
    fn test_account_type_lookup() {
        let txn = Transaction::from_row(&row("", "$1.00", "Megacorp LLC"), &context()).unwrap();
        assert_eq!(txn.account_type("Checking Account").unwrap(), AccountType::Assets);
        assert!(txn.account_type("Visa").unwrap_err().is_not_found());
    }
}
