//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums of many small farm expenses stay
//! exact. Arithmetic saturates at the decimal limits instead of panicking,
//! since amounts come straight from the API.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in the farm's currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use farm_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiply by a head count
    pub fn times(&self, count: i64) -> Self {
        Self(self.0.saturating_mul(Decimal::from(count)))
    }

    /// Divide by a head count, `None` when the count is zero
    pub fn per(&self, count: i64) -> Option<Self> {
        self.0.checked_div(Decimal::from(count)).map(Self)
    }

    /// Parse a money amount from user or API text
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "1,250" and exponent forms.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        parse_decimal(s)
            .map(Self)
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.0.round_dp(2).abs();
        let text = format!("{:.2}", rounded);
        let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let sign = if self.0.round_dp(2).is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), frac)
    }
}

/// Parse a decimal leniently, returning `None` for anything non-numeric
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let s = s.strip_prefix('$').unwrap_or(s).replace(',', "");
    if s.is_empty() {
        return None;
    }

    let value = Decimal::from_str(&s)
        .or_else(|_| Decimal::from_scientific(&s))
        .ok()?;
    Some(if negative { -value } else { value })
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
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

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.amount(), Decimal::new(105, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(123456789)), "$1,234,567.89");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(-a, Money::from_cents(-1000));
        assert_eq!(b.times(3), Money::from_cents(1500));
    }

    #[test]
    fn test_per_head() {
        let total = Money::from_cents(1000);
        assert_eq!(total.per(4), Some(Money::from_cents(250)));
        assert_eq!(total.per(0), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("1,250").unwrap(), Money::from_cents(125000));
        assert_eq!(Money::parse("1e3").unwrap(), Money::from_cents(100000));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_cents(600));
    }

    #[test]
    fn test_arithmetic_saturates_at_limits() {
        let max = Money::from_decimal(Decimal::MAX);
        let min = Money::from_decimal(Decimal::MIN);

        assert_eq!(max + Money::from_cents(100), max);
        assert_eq!(min - Money::from_cents(100), min);
        assert_eq!(max.times(2), max);
        assert_eq!(max.times(-2), min);

        let mut total = max;
        total += max;
        assert_eq!(total, max);
        total -= max;
        assert!(total.is_zero());

        let sum: Money = vec![max, Money::from_cents(1), Money::from_cents(1)].into_iter().sum();
        assert_eq!(sum, max);
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let total: Money = (0..10).map(|_| Money::parse("0.1").unwrap()).sum();
        assert_eq!(total, Money::from_cents(100));
    }
}
