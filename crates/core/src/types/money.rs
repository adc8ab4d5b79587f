//! Exact monetary amounts backed by integer cents.
//!
//! Cart arithmetic must never drift: amounts accumulate as whole cents and
//! only touch `Decimal` at the input/display boundary, where two decimal
//! places are enforced.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when converting a [`Money`] from a decimal amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount has more than two decimal places.
    #[error("amount {0} has more than two decimal places")]
    TooPrecise(Decimal),
    /// The amount does not fit in the cents range.
    #[error("amount {0} is out of range")]
    OutOfRange(Decimal),
}

/// A monetary amount in whole cents.
///
/// Serializes transparently as the cent count. Display renders the standard
/// two-decimal dollar form, e.g. `$19.99`.
///
/// ## Examples
///
/// ```
/// use cartwheel_core::Money;
///
/// let unit = Money::from_cents(2550);
/// assert_eq!((unit * 2).to_string(), "$51.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in whole cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Convert a decimal amount (e.g. `19.99`) into whole cents.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::TooPrecise`] if the amount carries sub-cent
    /// precision and [`MoneyError::OutOfRange`] if it does not fit in `i64`
    /// cents.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyError> {
        let cents = amount * Decimal::ONE_HUNDRED;
        if cents.fract() != Decimal::ZERO {
            return Err(MoneyError::TooPrecise(amount));
        }
        cents
            .to_i64()
            .map(Self)
            .ok_or(MoneyError::OutOfRange(amount))
    }

    /// The amount as a two-decimal-place `Decimal`.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Add two amounts, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}
