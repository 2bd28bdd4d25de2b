//! Account classification
//!
//! Every account in the export, and every account named as a transfer
//! target, must be classified as an asset or a liability before a ledger
//! can be rendered.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Top-level ledger account type of a tracked account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Checking, savings, cash and similar accounts
    Assets,
    /// Credit cards, loans and lines of credit
    Liabilities,
}

impl AccountType {
    /// Parse account type from user input
    ///
    /// Accepts `a`, `asset`, `assets`, `l`, `liability`, `liabilities`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" | "asset" | "assets" => Some(Self::Assets),
            "l" | "liability" | "liabilities" => Some(Self::Liabilities),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assets => write!(f, "Assets"),
            Self::Liabilities => write!(f, "Liabilities"),
        }
    }
}

/// Mapping of account name to its type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountTypes(BTreeMap<String, AccountType>);

impl AccountTypes {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify an account, replacing any previous classification
    pub fn insert(&mut self, account: impl Into<String>, account_type: AccountType) {
        self.0.insert(account.into(), account_type);
    }

    /// Look up an account's type
    pub fn get(&self, account: &str) -> LedgerResult<AccountType> {
        self.0
            .get(account)
            .copied()
            .ok_or_else(|| LedgerError::missing_account_type(account))
    }

    /// Check whether an account is classified
    pub fn contains(&self, account: &str) -> bool {
        self.0.contains_key(account)
    }

    /// Names from `required` that have no classification yet, in the given order
    pub fn missing<'a>(&self, required: &'a [String]) -> Vec<&'a str> {
        required
            .iter()
            .map(String::as_str)
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Number of classified accounts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no account is classified
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Load a mapping from a YAML file
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!("Failed to read accounts file {}: {}", path.display(), e))
        })?;
        let types: AccountTypes = serde_yaml::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!("Failed to parse accounts file {}: {}", path.display(), e))
        })?;
        Ok(types)
    }

    /// Save the mapping as YAML, creating parent directories as needed
    pub fn save(&self, path: &Path) -> LedgerResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write accounts file {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

impl FromIterator<(String, AccountType)> for AccountTypes {
    fn from_iter<I: IntoIterator<Item = (String, AccountType)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_account_type() {
        assert_eq!(AccountType::parse("a"), Some(AccountType::Assets));
        assert_eq!(AccountType::parse("Asset"), Some(AccountType::Assets));
        assert_eq!(AccountType::parse(" ASSETS "), Some(AccountType::Assets));
        assert_eq!(AccountType::parse("l"), Some(AccountType::Liabilities));
        assert_eq!(AccountType::parse("Liability"), Some(AccountType::Liabilities));
        assert_eq!(AccountType::parse("liabilities"), Some(AccountType::Liabilities));
        assert_eq!(AccountType::parse("equity"), None);
        assert_eq!(AccountType::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountType::Assets.to_string(), "Assets");
        assert_eq!(AccountType::Liabilities.to_string(), "Liabilities");
    }

    #[test]
    fn test_lookup() {
        let mut types = AccountTypes::new();
        types.insert("Checking Account", AccountType::Assets);

        assert_eq!(types.get("Checking Account").unwrap(), AccountType::Assets);
        let err = types.get("Visa").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing() {
        let types: AccountTypes = [("Checking".to_string(), AccountType::Assets)]
            .into_iter()
            .collect();
        let required = vec!["Visa".to_string(), "Checking".to_string(), "Savings".to_string()];
        assert_eq!(types.missing(&required), vec!["Visa", "Savings"]);
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("accounts.yaml");

        let mut types = AccountTypes::new();
        types.insert("Checking Account", AccountType::Assets);
        types.insert("Visa", AccountType::Liabilities);
        types.save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Visa: Liabilities"));

        let loaded = AccountTypes::load(&path).unwrap();
        assert_eq!(loaded, types);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_load_rejects_unknown_type() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.yaml");
        std::fs::write(&path, "Checking: Equity\n").unwrap();

        let err = AccountTypes::load(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
