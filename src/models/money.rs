//! Money type for representing currency amounts
//!
//! Amounts are exact decimals. This is the one place that knows how a culture
//! writes money: [`Money::parse`] reads export text and [`Money::format`]
//! writes ledger text, with negatives always normalized to `-{symbol}{number}`.

use std::ops::{Add, Neg, Sub};

use rust_decimal::{Decimal, RoundingStrategy};

use super::culture::Culture;
use crate::error::{LedgerError, LedgerResult};

/// A monetary amount in the culture's currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from minor units, e.g. `from_minor(1050, 2)` is 10.50
    pub fn from_minor(units: i64, digits: u32) -> Self {
        Self(Decimal::new(units, digits))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Parse an amount written in the culture's currency format
    ///
    /// Accepts `$1,234.56`, `-$5.00`, `($5.00)`, `€1 304,16`, `12,48ден.`.
    /// Blank text is an error; callers decide what a missing amount means.
    pub fn parse(text: &str, culture: &Culture) -> LedgerResult<Self> {
        let invalid = || LedgerError::invalid_amount(text, culture.name);

        let without_symbol = strip_abbreviation(text).replace(culture.currency_symbol, "");
        let s = without_symbol.trim();

        let (negative, s) = if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            (true, inner.trim())
        } else if let Some(rest) = s.strip_prefix('-') {
            (true, rest.trim())
        } else {
            (false, s)
        };

        let mut normalized = String::with_capacity(s.len());
        for c in s.chars() {
            if c.is_ascii_digit() {
                normalized.push(c);
            } else if c == culture.decimal_separator {
                normalized.push('.');
            } else if !culture.is_group_separator(c) {
                return Err(invalid());
            }
        }
        if !normalized.chars().any(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let amount = Decimal::from_str_exact(&normalized).map_err(|_| invalid())?;
        Ok(Self(if negative { -amount } else { amount }))
    }

    /// Format in the culture's currency layout
    ///
    /// Positive amounts follow the culture's own pattern; negative amounts
    /// always use a minus sign immediately before the symbol (`-€1 304,16`).
    pub fn format(&self, culture: &Culture) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(culture.currency_digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(culture.currency_digits);

        let number = group_digits(&rounded.abs().to_string(), culture);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{}", culture.currency_symbol, number)
        } else {
            culture.positive_pattern.apply(culture.currency_symbol, &number)
        }
    }
}

/// Trim the text and drop the abbreviation dot some exports put after the symbol
///
/// `12,48ден.` becomes `12,48ден`; `12.` is left alone.
pub fn strip_abbreviation(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_suffix('.') {
        Some(rest) if rest.chars().last().is_some_and(|c| !c.is_ascii_digit()) => rest.trim_end(),
        _ => trimmed,
    }
}

/// Insert group separators into a plain `1234.56` rendering
fn group_digits(plain: &str, culture: &Culture) -> String {
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(culture.group_separator);
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push(culture.decimal_separator);
        grouped.push_str(fraction);
    }
    grouped
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn culture(name: &str) -> Culture {
        Culture::lookup(name).unwrap()
    }

    #[rstest]
    #[case("en-US", "$1,234.56", 123456, 2)]
    #[case("en-US", "$0.00", 0, 2)]
    #[case("en-US", "-$42.42", -4242, 2)]
    #[case("en-US", "($42.42)", -4242, 2)]
    #[case("en-US", " $7 ", 7, 0)]
    #[case("en-GB", "£1,000.10", 100010, 2)]
    #[case("fr-FR", "€1 304,16", 130416, 2)]
    #[case("fr-FR", "1\u{a0}304,16 €", 130416, 2)]
    #[case("de-DE", "1.304,16 €", 130416, 2)]
    #[case("mk", "12,48ден.", 1248, 2)]
    #[case("mk", "-12,48ден.", -1248, 2)]
    #[case("ja-JP", "¥1,500", 1500, 0)]
    #[case("pt-BR", "R$ 9,99", 999, 2)]
    fn test_parse(
        #[case] culture_name: &str,
        #[case] text: &str,
        #[case] units: i64,
        #[case] digits: u32,
    ) {
        let parsed = Money::parse(text, &culture(culture_name)).unwrap();
        assert_eq!(parsed, Money::from_minor(units, digits));
    }

    #[rstest]
    #[case("en-US", "")]
    #[case("en-US", "$")]
    #[case("en-US", "12.34.56")]
    #[case("en-US", "€12.00")]
    #[case("en-US", "1 234.00")]
    #[case("de-DE", "abc")]
    fn test_parse_invalid(#[case] culture_name: &str, #[case] text: &str) {
        let err = Money::parse(text, &culture(culture_name)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount { .. }));
    }

    #[rstest]
    #[case("en-US", 123456, "$1,234.56")]
    #[case("en-US", -123456, "-$1,234.56")]
    #[case("en-US", 5, "$0.05")]
    #[case("en-US", 0, "$0.00")]
    #[case("en-US", 123456789, "$1,234,567.89")]
    #[case("fr-FR", -130416, "-€1\u{a0}304,16")]
    #[case("fr-FR", 130416, "1\u{a0}304,16 €")]
    #[case("de-DE", -130416, "-€1.304,16")]
    #[case("nl-NL", 4200, "€ 42,00")]
    #[case("mk", -1248, "-ден12,48")]
    #[case("mk", 1248, "12,48ден")]
    fn test_format(#[case] culture_name: &str, #[case] cents: i64, #[case] expected: &str) {
        assert_eq!(Money::from_minor(cents, 2).format(&culture(culture_name)), expected);
    }

    #[test]
    fn test_format_rounds_to_currency_digits() {
        let jp = culture("ja-JP");
        assert_eq!(Money::from_minor(150050, 2).format(&jp), "¥1,501");
        assert_eq!(Money::from_minor(-150050, 2).format(&jp), "-¥1,501");
        assert_eq!(Money::from_minor(12345, 3).format(&Culture::en_us()), "$12.35");
    }

    #[test]
    fn test_negative_zero_formats_without_sign() {
        let m = -Money::from_minor(0, 2);
        assert_eq!(m.format(&Culture::en_us()), "$0.00");
        assert_eq!(Money::from_minor(-1, 3).format(&Culture::en_us()), "$0.00");
    }

    #[test]
    fn test_round_trip_preserves_magnitude_and_sign() {
        let fr = culture("fr-FR");
        let outflow = Money::parse("€1 304,16", &fr).unwrap();
        let total = Money::zero() - outflow;
        let rendered = total.format(&fr);
        assert_eq!(rendered, "-€1\u{a0}304,16");
        assert_eq!(Money::parse(&rendered, &fr).unwrap(), total);
    }

    #[test]
    fn test_strip_abbreviation() {
        assert_eq!(strip_abbreviation(" 12,48ден. "), "12,48ден");
        assert_eq!(strip_abbreviation("12."), "12.");
        assert_eq!(strip_abbreviation("$1.00"), "$1.00");
        assert_eq!(strip_abbreviation(""), "");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000, 2);
        let b = Money::from_minor(500, 2);

        assert_eq!(a + b, Money::from_minor(1500, 2));
        assert_eq!(a - b, Money::from_minor(500, 2));
        assert_eq!(-a, Money::from_minor(-1000, 2));
        assert!(a > b);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100, 2),
            Money::from_minor(200, 2),
            Money::from_minor(300, 2),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_minor(600, 2));
    }
}
