//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Bills are single-currency, so Money carries an amount only; formatting
//! and currency display belong to the presentation layer.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts keep their full precision through intermediate
/// calculations; rounding happens only where a caller asks for it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// A zero amount
    pub const ZERO: Money = Money {
        amount: Decimal::ZERO,
    };

    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self {
            amount: Decimal::new(minor_units, 2),
        }
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Rounds half-up to the given number of decimal places
    ///
    /// Midpoints round away from zero, matching `round(value * 100) / 100`
    /// as used for final per-participant shares.
    pub fn round_half_up(&self, dp: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Multiplies by a scalar (e.g., for rate or proportion calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self {
            amount: self.amount * factor,
        }
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self {
            amount: self.amount / divisor,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            amount: self.amount + other.amount,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.amount += other.amount;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            amount: self.amount - other.amount,
        }
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.amount -= other.amount;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            amount: -self.amount,
        }
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor).expect("Division by zero in Money::div")
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Represents a percentage rate (e.g., tax rate, discount rate)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// A zero rate
    pub const ZERO: Rate = Rate {
        value: Decimal::ZERO,
    };

    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns true if the rate is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_money_sum() {
        let parts = vec![
            Money::new(dec!(10)),
            Money::new(dec!(20.50)),
            Money::new(dec!(0.25)),
        ];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total.amount(), dec!(30.75));
    }

    #[test]
    fn test_money_divide_by_zero() {
        let m = Money::new(dec!(100));
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_money_round_half_up() {
        assert_eq!(Money::new(dec!(10.005)).round_half_up(2).amount(), dec!(10.01));
        assert_eq!(Money::new(dec!(10.004)).round_half_up(2).amount(), dec!(10.00));
        assert_eq!(
            Money::new(dec!(3.333333333333)).round_half_up(2).amount(),
            dec!(3.33)
        );
    }

    #[test]
    fn test_money_sign_tests() {
        assert!(Money::new(dec!(1)).is_positive());
        assert!(Money::new(dec!(-1)).is_negative());
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(5.0));
        let amount = Money::new(dec!(1000.00));

        let charge = rate.apply(&amount);
        assert_eq!(charge.amount(), dec!(50.00));
    }

    #[test]
    fn test_rate_round_trip() {
        let rate = Rate::from_percentage(dec!(12.5));
        assert_eq!(rate.as_percentage(), dec!(12.5));
        assert_eq!(rate.as_decimal(), dec!(0.125));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);
            let mc = Money::from_minor(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn rounding_never_moves_more_than_half_a_cent(
            amount in -1_000_000_000i64..1_000_000_000i64
        ) {
            // Amounts with 4 decimal places, so rounding to 2 is exercised.
            let m = Money::new(Decimal::new(amount, 4));
            let rounded = m.round_half_up(2);
            let diff = (rounded.amount() - m.amount()).abs();

            prop_assert!(diff <= Decimal::new(5, 3));
        }

        #[test]
        fn rate_applies_proportionally(
            amount in 0i64..1_000_000i64,
            percent in 0u32..200u32
        ) {
            let money = Money::from_minor(amount);
            let rate = Rate::from_percentage(Decimal::from(percent));

            let applied = rate.apply(&money);
            prop_assert_eq!(
                applied.amount(),
                money.amount() * Decimal::from(percent) / Decimal::from(100u32)
            );
        }
    }
}
