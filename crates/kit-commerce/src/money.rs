//! Money type for representing monetary values.
//!
//! The store trades in a single currency (Bangladeshi taka) and every
//! price is a whole number of taka, so amounts are plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Currency symbol shown in front of every amount.
pub const CURRENCY_SYMBOL: &str = "\u{09f3}";

/// A monetary value in whole taka.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero taka.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Add, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Money::new)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, quantity: u32) -> Option<Money> {
        self.amount.checked_mul(i64::from(quantity)).map(Money::new)
    }

    /// Subtract, flooring at zero.
    pub fn saturating_sub_to_zero(&self, other: Money) -> Money {
        Money::new(self.amount.saturating_sub(other.amount).max(0))
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum(iter: impl IntoIterator<Item = Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Format with the currency symbol and thousands separators (e.g., "৳2,450").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without symbol (e.g., "2,450").
    pub fn display_amount(&self) -> String {
        let digits = self.amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.amount < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money::new(amount)
    }
}

// Operators saturate at the i64 bounds. Use the `checked_*` methods where
// overflow has to be reported.

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount.saturating_sub(other.amount))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money::new(self.amount.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::new(2000).display_amount(), "2,000");
        assert_eq!(Money::new(950).display_amount(), "950");
        assert_eq!(Money::new(1_234_567).display_amount(), "1,234,567");
        assert_eq!(Money::new(2450).display(), "\u{09f3}2,450");
    }

    #[test]
    fn test_money_negative_display() {
        assert_eq!(Money::new(-1500).display_amount(), "-1,500");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!(a + b, Money::new(1500));
        assert_eq!(a - b, Money::new(500));
        assert_eq!(a * 3, Money::new(3000));
    }

    #[test]
    fn test_money_checked_overflow() {
        let max = Money::new(i64::MAX);
        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(Money::try_sum([max, Money::new(1)]), None);
    }

    #[test]
    fn test_operators_saturate() {
        let max = Money::new(i64::MAX);
        assert_eq!(max + Money::new(1), max);
        assert_eq!(max * 3, max);
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
        assert_eq!([max, max].into_iter().sum::<Money>(), max);
        assert_eq!(
            Money::new(10).saturating_sub_to_zero(Money::new(i64::MIN)),
            max
        );
    }

    #[test]
    fn test_money_try_sum() {
        let total = Money::try_sum([Money::new(100), Money::new(250), Money::new(50)]);
        assert_eq!(total, Some(Money::new(400)));
        assert_eq!(Money::try_sum(Vec::new()), Some(Money::zero()));
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        assert_eq!(Money::new(100).saturating_sub_to_zero(Money::new(300)), Money::zero());
        assert_eq!(Money::new(300).saturating_sub_to_zero(Money::new(100)), Money::new(200));
    }

    #[test]
    fn test_money_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(1900)).unwrap();
        assert_eq!(json, "1900");
        let back: Money = serde_json::from_str("2000").unwrap();
        assert_eq!(back, Money::new(2000));
    }
}
