//! # Money Module
//!
//! Integer money for sale totals and payment balances.
//!
//! The backend sends totals in the smallest currency unit. Keeping them as
//! `i64` cents end to end means `subtotal + tax - discount` is exact and
//! payment status comparisons never suffer from float drift.
//!
//! ## Usage
//! ```rust
//! use salesflow_core::money::Money;
//!
//! let subtotal = Money::from_cents(10_000);
//! let tax = Money::from_cents(2_100);
//! let discount = Money::from_cents(500);
//!
//! assert_eq!((subtotal + tax - discount).to_string(), "$116.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

/// A monetary value in the smallest currency unit.
///
/// Signed so that refunds and credit notes can be represented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Major unit portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Minor unit portion, always 0-99.
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `None` when the sum does not fit in an `i64`.
    ///
    /// ```rust
    /// use salesflow_core::money::Money;
    ///
    /// let one = Money::from_cents(1);
    /// assert_eq!(one.checked_add(one), Some(Money::from_cents(2)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(one), None);
    /// ```
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// `None` when the difference does not fit in an `i64`.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// What is still owed after `paid`; never negative.
    ///
    /// ```rust
    /// use salesflow_core::money::Money;
    ///
    /// let total = Money::from_cents(1_000);
    /// assert_eq!(total.remaining_after(Money::from_cents(300)).cents(), 700);
    /// assert_eq!(total.remaining_after(Money::from_cents(1_500)).cents(), 0);
    /// ```
    #[inline]
    pub fn remaining_after(&self, paid: Money) -> Money {
        Money(self.0.saturating_sub(paid.0).max(0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly formatting. The front end does localised display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);

        a += b;
        assert_eq!(a.cents(), 1250);
        a -= b;
        assert_eq!(a.cents(), 1000);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(min.checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            max.checked_sub(Money::from_cents(1)),
            Some(Money::from_cents(i64::MAX - 1))
        );
        assert_eq!(
            Money::from_cents(700).checked_add(Money::from_cents(300)),
            Some(Money::from_cents(1_000))
        );
    }

    #[test]
    fn test_remaining_after_never_negative() {
        let total = Money::from_cents(1_000);
        assert_eq!(total.remaining_after(Money::from_cents(400)), Money::from_cents(600));
        assert_eq!(total.remaining_after(Money::from_cents(i64::MAX)), Money::zero());
        assert_eq!(
            Money::from_cents(i64::MAX).remaining_after(Money::from_cents(-1)),
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1099)).unwrap(), "1099");
    }
}
