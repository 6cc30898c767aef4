use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError};

/// An amount of money in integer cents.
///
/// Salary, item amounts and every derived total use this type, so
/// `debts + goals + remaining == salary` holds exactly. It is signed because
/// the remaining balance goes below zero when the month is over budget.
///
/// ```rust
/// use engine::{Currency, MoneyCents};
///
/// let amount: MoneyCents = "12,34".parse().unwrap();
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.format(Currency::Brl), "R$ 12.34");
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `from_major(800)` is 800.00.
    #[must_use]
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `None` when the sum does not fit.
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Currency symbol and amount, sign first: `-R$ 10.00`.
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = MoneyCents(self.0.saturating_abs());
        format!("{sign}{} {magnitude}", currency.symbol())
    }

    /// Parses an amount for a salary or an item; negatives are rejected.
    pub fn parse_non_negative(raw: &str) -> Result<Self, EngineError> {
        let amount: MoneyCents = raw.parse()?;
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(amount)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> MoneyCents {
        MoneyCents(self.0 + rhs.0)
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> MoneyCents {
        MoneyCents(self.0 - rhs.0)
    }
}

impl Sum for MoneyCents {
    fn sum<I: Iterator<Item = MoneyCents>>(iter: I) -> Self {
        iter.fold(MoneyCents::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MoneyCents> for MoneyCents {
    fn sum<I: Iterator<Item = &'a MoneyCents>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Reads `digits` as a non-empty run of ASCII digits.
fn digits(raw: &str) -> Option<&str> {
    (!raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())).then_some(raw)
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Decimal amount with `.` or `,` as separator, an optional sign and at
    /// most two fractional digits. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| EngineError::InvalidAmount(format!("{reason}: {s:?}"));

        let text = s.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            Some(_) => (false, text),
            None => return Err(invalid("empty amount")),
        };

        let (whole, fraction) = match unsigned.find(['.', ',']) {
            Some(at) => (&unsigned[..at], &unsigned[at + 1..]),
            None => (unsigned, ""),
        };

        let whole = digits(whole).ok_or_else(|| invalid("invalid amount"))?;
        if !fraction.is_empty() && digits(fraction).is_none() {
            return Err(invalid("invalid amount"));
        }
        if fraction.len() > 2 {
            return Err(invalid("too many decimals"));
        }

        let units: i64 = whole.parse().map_err(|_| invalid("amount too large"))?;
        let cents = match fraction.len() {
            0 => 0,
            1 => i64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction.parse::<i64>().map_err(|_| invalid("invalid amount"))?,
        };

        let magnitude = units
            .checked_mul(100)
            .and_then(|value| value.checked_add(cents))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(MoneyCents(if negative { -magnitude } else { magnitude }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(raw: &str) -> i64 {
        raw.parse::<MoneyCents>().unwrap().cents()
    }

    #[test]
    fn display_formats_plain_decimal() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01");
        assert_eq!(MoneyCents::new(10).to_string(), "0.10");
        assert_eq!(MoneyCents::new(245_000).to_string(), "2450.00");
        assert_eq!(MoneyCents::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn format_puts_sign_before_symbol() {
        assert_eq!(MoneyCents::new(80_000).format(Currency::Brl), "R$ 800.00");
        assert_eq!(MoneyCents::new(-1000).format(Currency::Brl), "-R$ 10.00");
        assert_eq!(MoneyCents::new(5).format(Currency::Eur), "€ 0.05");
    }

    #[test]
    fn parses_both_decimal_separators() {
        assert_eq!(cents("10"), 1000);
        assert_eq!(cents("10.5"), 1050);
        assert_eq!(cents("3200,50"), 320_050);
        assert_eq!(cents("10."), 1000);
        assert_eq!(cents("-0.01"), -1);
        assert_eq!(cents("+1.00"), 100);
        assert_eq!(cents("  2.30 "), 230);
    }

    #[test]
    fn rejects_malformed_amounts() {
        for raw in ["", "   ", "-", "abc", "1.2.3", "1,2.3", ".5", "12.345", "1e3", "99999999999999999999"] {
            assert!(raw.parse::<MoneyCents>().is_err(), "{raw:?}");
        }
    }

    #[test]
    fn parse_non_negative_rejects_negative() {
        assert!(matches!(
            MoneyCents::parse_non_negative("-5"),
            Err(EngineError::InvalidAmount(_))
        ));
        assert_eq!(
            MoneyCents::parse_non_negative("0").unwrap(),
            MoneyCents::ZERO
        );
    }

    #[test]
    fn sum_adds_all_amounts() {
        let total: MoneyCents = [MoneyCents::new(100), MoneyCents::new(250)]
            .iter()
            .sum();
        assert_eq!(total, MoneyCents::new(350));
    }
}
