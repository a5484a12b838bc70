//! # Money Module
//!
//! Provides the `Money` type for price/paid arithmetic at the register.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    20.00 - 17.90 = 2.0999999999999996  ❌ WRONG!                        │
//! │                                                                         │
//! │  The solver then asks for change on 209.99999 cents, which no set of   │
//! │  coins can ever hit exactly.                                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Base Units                                       │
//! │    2000 - 1790 = 210 cents, exactly                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::from_minor(1790);
//! let paid = Money::from_minor(2000);
//!
//! let change = paid - price;
//! assert_eq!(change.to_amount(), Some(210));
//! ```
//!
//! Money is signed so that `paid - price` can go negative and be reported
//! as an insufficient payment. The solver itself only ever sees the
//! non-negative `u64` returned by [`Money::to_amount`].
//!
//! Display formatting depends on the currency (symbol, decimal places) and
//! lives in [`crate::currency::Currency::format_amount`].

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the currency's base unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: `paid - price` may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from base units.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor_units(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from a non-negative solver amount.
    ///
    /// Returns `None` if the amount does not fit in an `i64`.
    pub fn from_amount(amount: u64) -> Option<Self> {
        i64::try_from(amount).ok().map(Money)
    }

    /// Returns the value in base units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
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

    /// Converts to a solver amount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(250).to_amount(), Some(250));
    /// assert_eq!(Money::from_minor(-1).to_amount(), None);
    /// ```
    #[inline]
    pub fn to_amount(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }

    /// Subtraction that reports overflow instead of wrapping.
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
