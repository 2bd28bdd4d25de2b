//! Culture (locale) descriptors
//!
//! A culture carries everything needed to read and write amounts and dates
//! the way a regional YNAB export does: currency symbol, separators, currency
//! digits, where the symbol goes on positive amounts, and the short date
//! pattern. Cultures come from a fixed built-in table.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use self::SymbolPlacement::{After, AfterWithSpace, Before, BeforeWithSpace};
use crate::error::{LedgerError, LedgerResult};

const NBSP: char = '\u{a0}';

/// Date patterns tried after the culture's own short date pattern
const FALLBACK_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y", "%Y/%m/%d", "%d-%m-%Y",
];

/// Layout of a positive currency amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Before,
    /// `€ 1,00`
    BeforeWithSpace,
    /// `1,00€`
    After,
    /// `1,00 €`
    AfterWithSpace,
}

impl SymbolPlacement {
    /// Place the symbol around an already formatted number
    pub fn apply(&self, symbol: &str, number: &str) -> String {
        match self {
            Self::Before => format!("{}{}", symbol, number),
            Self::BeforeWithSpace => format!("{} {}", symbol, number),
            Self::After => format!("{}{}", number, symbol),
            Self::AfterWithSpace => format!("{} {}", number, symbol),
        }
    }
}

/// A locale descriptor used for amount and date handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    /// Culture name, e.g. `en-US`
    pub name: &'static str,
    /// Currency symbol as it appears in the export
    pub currency_symbol: &'static str,
    /// Decimal separator for currency amounts
    pub decimal_separator: char,
    /// Digit group separator for currency amounts
    pub group_separator: char,
    /// Number of fractional currency digits
    pub currency_digits: u32,
    /// Layout of positive currency amounts
    pub positive_pattern: SymbolPlacement,
    /// Short date pattern (strftime format)
    pub date_format: &'static str,
}

const fn culture(
    name: &'static str,
    currency_symbol: &'static str,
    decimal_separator: char,
    group_separator: char,
    currency_digits: u32,
    positive_pattern: SymbolPlacement,
    date_format: &'static str,
) -> Culture {
    Culture {
        name,
        currency_symbol,
        decimal_separator,
        group_separator,
        currency_digits,
        positive_pattern,
        date_format,
    }
}

/// Built-in culture table
pub static CULTURES: &[Culture] = &[
    culture("en-US", "$", '.', ',', 2, Before, "%m/%d/%Y"),
    culture("en-GB", "£", '.', ',', 2, Before, "%d/%m/%Y"),
    culture("en-CA", "$", '.', ',', 2, Before, "%Y-%m-%d"),
    culture("en-AU", "$", '.', ',', 2, Before, "%d/%m/%Y"),
    culture("fr-FR", "€", ',', NBSP, 2, AfterWithSpace, "%d/%m/%Y"),
    culture("fr-CA", "$", ',', NBSP, 2, AfterWithSpace, "%Y-%m-%d"),
    culture("de-DE", "€", ',', '.', 2, AfterWithSpace, "%d.%m.%Y"),
    culture("es-ES", "€", ',', '.', 2, AfterWithSpace, "%d/%m/%Y"),
    culture("it-IT", "€", ',', '.', 2, BeforeWithSpace, "%d/%m/%Y"),
    culture("nl-NL", "€", ',', '.', 2, BeforeWithSpace, "%d-%m-%Y"),
    culture("pt-BR", "R$", ',', '.', 2, BeforeWithSpace, "%d/%m/%Y"),
    culture("sv-SE", "kr", ',', NBSP, 2, AfterWithSpace, "%Y-%m-%d"),
    culture("ja-JP", "¥", '.', ',', 0, Before, "%Y/%m/%d"),
    culture("mk", "ден", ',', '.', 2, After, "%d.%m.%Y"),
];

impl Culture {
    /// The `en-US` culture
    pub fn en_us() -> Self {
        CULTURES[0]
    }

    /// Find a culture by name (case-insensitive, `_` or `-` separated)
    pub fn lookup(name: &str) -> LedgerResult<Self> {
        let wanted = name.trim().replace('_', "-");
        CULTURES
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&wanted))
            .copied()
            .ok_or_else(|| LedgerError::UnknownCulture(name.trim().to_string()))
    }

    /// Whether `c` separates digit groups in this culture
    ///
    /// Cultures grouping with a no-break space also accept a plain space,
    /// which is what most exports actually contain.
    pub fn is_group_separator(&self, c: char) -> bool {
        c == self.group_separator || (self.group_separator.is_whitespace() && c.is_whitespace())
    }

    /// Parse a date using the culture's short date pattern, then common fallbacks
    pub fn parse_date(&self, s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        std::iter::once(self.date_format)
            .chain(FALLBACK_DATE_FORMATS)
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::en_us()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Culture {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
