//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A rental charge computed in doubles:                                   │
//! │    3 days × $1.49 = $4.470000000000001  → Which cent do we floor to?   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 149 cents = 447 cents, exactly                                   │
//! │    Discount math runs in hundredths of a cent, so rounding and         │
//! │    flooring are exact integer operations                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolpos_core::money::Money;
//!
//! let daily_rate = Money::from_cents(149); // $1.49
//! let base = daily_rate.times_days(3);     // $4.47
//!
//! // 25% of $4.47 is $1.1175: displayed amount rounds to $1.12
//! assert_eq!(base.discount_amount(25).cents(), 112);
//!
//! // The final charge floors the exact remainder: $3.3525 → $3.35
//! assert_eq!(base.less_discount_floored(25).cents(), 335);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for adjustments and refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for serialization
///
/// ## Where Money is Used
/// ```text
/// ToolDescriptor.daily_rate ──► base_charge ──► discount_amount
///                                            └─► final_charge
///
/// EVERY monetary value in the system flows through this type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use toolpos_core::money::Money;
    ///
    /// let rate = Money::from_cents(299); // Represents $2.99
    /// assert_eq!(rate.cents(), 299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use toolpos_core::money::Money;
    ///
    /// let rate = Money::from_major_minor(1, 99); // $1.99
    /// assert_eq!(rate.cents(), 199);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a daily rate by a number of chargeable days.
    ///
    /// ## Example
    /// ```rust
    /// use toolpos_core::money::Money;
    ///
    /// let daily_rate = Money::from_cents(299); // $2.99
    /// let base = daily_rate.times_days(3);
    /// assert_eq!(base.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn times_days(&self, days: u32) -> Self {
        Money(self.0 * days as i64)
    }

    /// Returns `percent`% of this amount, rounded half-up to the cent.
    ///
    /// This is the DISPLAYED discount amount. The exact product
    /// `cents × percent` lives in hundredths of a cent; `+ 50` before the
    /// division rounds the half-cent boundary upward, matching how an
    /// exact dollar figure renders under two-decimal formatting.
    ///
    /// ## Example
    /// ```rust
    /// use toolpos_core::money::Money;
    ///
    /// let base = Money::from_cents(447);             // $4.47
    /// assert_eq!(base.discount_amount(25).cents(), 112); // $1.1175 → $1.12
    /// ```
    ///
    /// Assumes a non-negative amount (daily rates are non-negative, so every
    /// base charge is too).
    pub fn discount_amount(&self, percent: u8) -> Money {
        // i128 headroom: cents × percent cannot overflow even at i64 extremes
        let hundredths = self.0 as i128 * percent as i128;
        Money(((hundredths + 50) / 100) as i64)
    }

    /// Subtracts `percent`% of this amount and floors the remainder to the
    /// cent. The floor is on the EXACT difference, never on a pre-rounded
    /// discount, so the result is never a cent too high:
    ///
    /// `floor(cents - cents × percent / 100) = cents - ceil(cents × percent / 100)`
    ///
    /// ## Example
    /// ```rust
    /// use toolpos_core::money::Money;
    ///
    /// let base = Money::from_cents(299);                 // $2.99
    /// // 50% off: exact remainder $1.495 floors to $1.49
    /// assert_eq!(base.less_discount_floored(50).cents(), 149);
    /// ```
    pub fn less_discount_floored(&self, percent: u8) -> Money {
        let hundredths = self.0 as i128 * percent as i128;
        let discount_ceil = (hundredths + 99) / 100;
        Money((self.0 as i128 - discount_ceil) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is the canonical `$X.XX` rendering used on printed agreements.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(1, 99);
        assert_eq!(money.cents(), 199);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_times_days() {
        let daily_rate = Money::from_cents(149);
        assert_eq!(daily_rate.times_days(3).cents(), 447);
        assert_eq!(daily_rate.times_days(0).cents(), 0);
    }

    #[test]
    fn test_discount_amount_exact_cents() {
        // $9.95 at 10% = $0.995 → rounds up to $1.00
        let base = Money::from_cents(995);
        assert_eq!(base.discount_amount(10).cents(), 100);

        // $4.47 at 25% = $1.1175 → $1.12
        let base = Money::from_cents(447);
        assert_eq!(base.discount_amount(25).cents(), 112);
    }

    #[test]
    fn test_discount_amount_boundaries() {
        let base = Money::from_cents(897);
        assert_eq!(base.discount_amount(0).cents(), 0);
        assert_eq!(base.discount_amount(100).cents(), 897);
    }

    #[test]
    fn test_less_discount_floored() {
        // $9.95 less 10%: exact remainder $8.955 floors to $8.95
        let base = Money::from_cents(995);
        assert_eq!(base.less_discount_floored(10).cents(), 895);

        // $2.99 less 50%: $1.495 floors to $1.49
        let base = Money::from_cents(299);
        assert_eq!(base.less_discount_floored(50).cents(), 149);

        // $4.47 less 25%: $3.3525 floors to $3.35
        let base = Money::from_cents(447);
        assert_eq!(base.less_discount_floored(25).cents(), 335);
    }

    #[test]
    fn test_less_discount_floored_boundaries() {
        let base = Money::from_cents(897);
        assert_eq!(base.less_discount_floored(0), base);
        assert_eq!(base.less_discount_floored(100), Money::zero());
    }

    /// Critical test: the floor applies to the exact difference, so the
    /// final charge can sit one cent below `base - rounded_discount` when
    /// the fractional part of the discount lands strictly between 0 and a
    /// half cent.
    #[test]
    fn test_floor_uses_exact_difference_not_rounded_discount() {
        // $1.01 at 10%: discount $0.101 displays as $0.10,
        // but the remainder $0.909 floors to $0.90, not $0.91.
        let base = Money::from_cents(101);
        assert_eq!(base.discount_amount(10).cents(), 10);
        assert_eq!(base.less_discount_floored(10).cents(), 90);
    }
}
