//! YNAB register CSV import
//!
//! Reads the register export of YNAB 4 into [`RawRow`]s. Columns are matched
//! by header name, so column order does not matter and unknown columns are
//! ignored. Amounts are kept as text; dates are parsed with the culture's
//! short date pattern.

use std::collections::HashSet;
use std::io::Read;

use log::debug;
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Culture, RawRow, TRANSFER_PREFIX};

/// One CSV record, as named by the export's header row
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRecord {
    #[serde(rename = "Account")]
    account: String,
    #[serde(rename = "Flag")]
    flag: String,
    #[serde(rename = "Check Number")]
    check_number: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Payee")]
    payee: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Master Category")]
    master_category: String,
    #[serde(rename = "Sub Category")]
    sub_category: String,
    #[serde(rename = "Memo")]
    memo: String,
    #[serde(rename = "Outflow")]
    outflow: String,
    #[serde(rename = "Inflow")]
    inflow: String,
    #[serde(rename = "Cleared")]
    cleared: String,
    #[serde(rename = "Running Balance")]
    running_balance: String,
}

impl CsvRecord {
    fn into_row(self, row_number: usize, culture: &Culture) -> LedgerResult<RawRow> {
        let date = culture.parse_date(&self.date).ok_or_else(|| {
            LedgerError::Import(format!(
                "Row {}: could not parse date '{}' as {}",
                row_number,
                self.date.trim(),
                culture
            ))
        })?;

        Ok(RawRow {
            account: self.account,
            flag: self.flag,
            check_number: self.check_number,
            date,
            payee: self.payee,
            category: self.category,
            master_category: self.master_category,
            sub_category: self.sub_category,
            memo: self.memo,
            outflow: self.outflow,
            inflow: self.inflow,
            cleared: self.cleared,
            running_balance: self.running_balance,
        })
    }
}

/// Read all rows of a register export
///
/// `delimiter` must be a single-byte character.
pub fn read_rows<R: Read>(reader: R, delimiter: char, culture: &Culture) -> LedgerResult<Vec<RawRow>> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            LedgerError::Import(format!("Unsupported delimiter '{}': must be ASCII", delimiter))
        })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let row_number = idx + 1;
        let record = result
            .map_err(|e| LedgerError::Import(format!("Row {}: {}", row_number, e)))?;
        rows.push(record.into_row(row_number, culture)?);
    }

    debug!("Read {} rows", rows.len());
    Ok(rows)
}

/// Distinct account names, in order of first appearance
pub fn account_names(rows: &[RawRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.account.as_str()))
        .map(|row| row.account.clone())
        .collect()
}

/// Every account name a conversion must classify: the accounts themselves
/// plus the targets of transfers, in order of first appearance
pub fn required_account_names(rows: &[RawRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for row in rows {
        let mut candidates = vec![row.account.clone()];
        if row.payee.contains(TRANSFER_PREFIX) {
            candidates.push(row.payee.replace(TRANSFER_PREFIX, ""));
        }
        for name in candidates {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const EXPORT: &str = r#""Account","Flag","Check Number","Date","Payee","Category","Master Category","Sub Category","Memo","Outflow","Inflow","Cleared","Running Balance"
"Checking Account","","","01/01/2019","Megacorp LLC","Income:Available this month","Income","Available this month","January Bonus","$0.00","$1,234.56","C","$1,234.56"
"Checking Account","Blue","123456","01/02/2019","Transfer : Savings Account","","","","Saving up","$42.42","$0.00","U","$1,192.14"
"#;

    #[test]
    fn test_read_rows() {
        let rows = read_rows(EXPORT.as_bytes(), ',', &Culture::en_us()).unwrap();
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.account, "Checking Account");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert_eq!(first.master_category, "Income");
        assert_eq!(first.sub_category, "Available this month");
        assert_eq!(first.inflow, "$1,234.56");
        assert_eq!(first.outflow, "$0.00");
        assert_eq!(first.cleared, "C");

        let second = &rows[1];
        assert_eq!(second.flag, "Blue");
        assert_eq!(second.check_number, "123456");
        assert_eq!(second.payee, "Transfer : Savings Account");
        assert_eq!(second.running_balance, "$1,192.14");
    }

    #[test]
    fn test_read_rows_with_tab_delimiter_and_missing_columns() {
        let data = "Account\tDate\tPayee\tMemo\tOutflow\n\
                    Compte Chèque\t31/01/2019\tMegacorp LLC\tFaire des achats\t€1 304,16\n";
        let fr = Culture::lookup("fr-FR").unwrap();
        let rows = read_rows(data.as_bytes(), '\t', &fr).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2019, 1, 31).unwrap());
        assert_eq!(rows[0].outflow, "€1 304,16");
        assert_eq!(rows[0].inflow, "");
        assert_eq!(rows[0].flag, "");
    }

    #[test]
    fn test_read_rows_bad_date() {
        let data = "Account,Date,Payee\nChecking Account,not a date,Megacorp LLC\n";
        let err = read_rows(data.as_bytes(), ',', &Culture::en_us()).unwrap_err();
        match err {
            LedgerError::Import(msg) => assert!(msg.starts_with("Row 1:"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_rows_unsupported_delimiter() {
        let err = read_rows(EXPORT.as_bytes(), '→', &Culture::en_us()).unwrap_err();
        assert!(matches!(err, LedgerError::Import(_)));
    }

    #[test]
    fn test_account_names() {
        let rows = read_rows(EXPORT.as_bytes(), ',', &Culture::en_us()).unwrap();
        assert_eq!(account_names(&rows), vec!["Checking Account"]);
        assert_eq!(
            required_account_names(&rows),
            vec!["Checking Account", "Savings Account"]
        );
    }
}
