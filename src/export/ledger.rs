//! Ledger text export
//!
//! Renders grouped transactions as a plain-text double-entry ledger:
//!
//! ```text
//! 2019-01-01 (123456) * Megacorp LLC
//!  ; :Blue:
//!  Assets:Checking Account  -$54.84
//!  Expenses:Everyday Expenses:Groceries  $12.42 ; Produce
//!  Expenses:Everyday Expenses:Groceries  $42.42 ; Meat
//! ```
//!
//! Transactions are separated by one blank line and the document ends with
//! exactly one newline.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Header payee of a transaction split between several payees
pub const MULTIPLE_PAYEES: &str = "Multiple Payees";

/// Render transactions as ledger text
///
/// Transactions are ordered by date, then total inflow, then total outflow,
/// then the payee of their first line item; ties keep the input order.
pub fn render(transactions: &[Transaction]) -> LedgerResult<String> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by(|a, b| {
        a.date()
            .cmp(&b.date())
            .then_with(|| a.total_inflow().cmp(&b.total_inflow()))
            .then_with(|| a.total_outflow().cmp(&b.total_outflow()))
            .then_with(|| a.first_line_item().payee.cmp(&b.first_line_item().payee))
    });

    let blocks = ordered
        .into_iter()
        .map(render_transaction)
        .collect::<LedgerResult<Vec<_>>>()?;

    let mut output = blocks.join("\n").trim_end().to_string();
    output.push('\n');
    Ok(output)
}

/// Render transactions and write the ledger to a writer
pub fn export_ledger<W: Write>(transactions: &[Transaction], writer: &mut W) -> LedgerResult<()> {
    let ledger = render(transactions)?;
    writer
        .write_all(ledger.as_bytes())
        .map_err(|e| LedgerError::Io(format!("Failed to write ledger: {}", e)))
}

/// Render one transaction block, each line terminated by a newline
pub fn render_transaction(txn: &Transaction) -> LedgerResult<String> {
    let culture = txn.culture();
    let first = txn.first_line_item();
    let multiple_items = txn.has_multiple_line_items();
    let multiple_payees = txn.has_multiple_payees();
    let multiple_accounts = txn.has_multiple_accounts();
    let is_transfer = txn.is_transfer();

    let mut out = String::new();

    let check_number = match txn.check_number().trim() {
        "" => String::new(),
        number => format!("({}) ", number),
    };
    let clear = match (txn.use_clear(), txn.is_cleared()) {
        (false, _) => "",
        (true, true) => "* ",
        (true, false) => "! ",
    };
    let payee = if multiple_payees {
        MULTIPLE_PAYEES
    } else if is_transfer {
        ""
    } else {
        first.payee.as_str()
    };
    let header = format!(
        "{} {}{}{}",
        txn.date().format("%Y-%m-%d"),
        check_number,
        clear,
        payee
    );
    out.push_str(header.trim_end());
    out.push('\n');

    if !multiple_items && !first.memo.trim().is_empty() {
        out.push_str(&format!(" ; {}\n", first.memo.trim()));
    }

    if !txn.flag().trim().is_empty() {
        out.push_str(&format!(" ; :{}:\n", txn.flag()));
    }

    let primary_type = txn.account_type(&first.account)?;
    out.push_str(&format!(
        " {}:{}  {}\n",
        primary_type,
        first.account,
        txn.total_amount().format(culture)
    ));

    for item in txn.line_items() {
        let account_type = txn.account_type(&item.account)?;

        if item.has_inflow() {
            let amount = item.inflow_amount.format(culture);
            out.push_str(&format!(" Income:{}  -{}\n", item.payee, amount));
            if multiple_accounts {
                out.push_str(&format!(" {}:{}  {}\n", account_type, item.account, amount));
            }
        } else if let Some(target) = item.transfer_target() {
            let target_type = txn.account_type(&target)?;
            out.push_str(&format!(
                " {}:{}  {}\n",
                target_type,
                target,
                item.outflow_amount.format(culture)
            ));
        } else {
            let memo = item.memo_without_split().filter(|_| multiple_items);
            let mut comment = String::new();
            if multiple_payees || memo.is_some() {
                comment.push_str(" ;");
            }
            if multiple_payees {
                comment.push_str(&format!("Payee: {}", item.payee));
            }
            if let Some(memo) = memo {
                let separator = if multiple_payees { "," } else { "" };
                comment.push_str(&format!("{} {}", separator, memo));
            }
            out.push_str(&format!(
                " Expenses:{}:{}  {}{}\n",
                item.master_category, item.sub_category, item.outflow, comment
            ));
        }
    }

    Ok(out)
}
