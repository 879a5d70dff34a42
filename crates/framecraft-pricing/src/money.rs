//! # Money Module
//!
//! Provides the `Money` type used at the checkout/display boundary.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICE PIPELINE                                                         │
//! │                                                                         │
//! │  Catalog $/ft, $/sq in ──► engine v2 (f64 dollars) ──► 46.99            │
//! │                                  │                                      │
//! │                       anchors, gross-up, ceil − 0.01                    │
//! │                                  │                                      │
//! │  PricingBreakdown (f64) ─────────┴──► Money::from_dollars ──► 4699¢     │
//! │                                                                         │
//! │  The engine works in f64 so every stage reproduces the anchor tables    │
//! │  bit for bit. Conversion to integer cents happens exactly once, when    │
//! │  a price leaves the engine for the cart or the screen.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use framecraft_pricing::money::Money;
//!
//! let price = Money::from_dollars(46.99);
//! assert_eq!(price.cents(), 4699);
//! assert_eq!(price.to_string(), "$46.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents (USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values appear for credits in cart glue
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an engine price in dollars to cents.
    ///
    /// Rounds half away from zero, so `15.99` (stored as 15.9900000000000002)
    /// and `2.1625` become 1599 and 216 cents.
    ///
    /// ## Example
    /// ```rust
    /// use framecraft_pricing::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(15.99).cents(), 1599);
    /// assert_eq!(Money::from_dollars(2.1625).cents(), 216);
    /// assert_eq!(Money::from_dollars(-5.5).cents(), -550);
    /// ```
    pub fn from_dollars(dollars: f64) -> Self {
        Money((dollars * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
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
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34` / `-$5.50`.
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(4699);
        assert_eq!(money.cents(), 4699);
        assert_eq!(money.dollars(), 46);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_dollars_rounds_once() {
        assert_eq!(Money::from_dollars(15.99).cents(), 1599);
        assert_eq!(Money::from_dollars(14.99).cents(), 1499);
        assert_eq!(Money::from_dollars(0.0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1599)), "$15.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Money::from_cents(4699);
        let b = Money::from_cents(216);

        assert_eq!((a + b).cents(), 4915);
        assert_eq!((a - b).cents(), 4483);
        a += b;
        assert_eq!(a.cents(), 4915);
        assert!(Money::default().is_zero());
    }
}
