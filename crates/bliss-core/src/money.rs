//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  The counter adds prices hundreds of times a day. Accumulating      │
//! │  floats and rounding at the end compounds the error.                │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    $4.50 = 450 cents. Sums are exact; the ONLY rounding point in    │
//! │    the whole engine is the tax computation, and it rounds once.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bliss_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(450); // $4.50
//!
//! // Or parse operator input
//! let same = Money::parse("4.50").unwrap();
//! assert_eq!(price, same);
//!
//! // Arithmetic operations
//! let doubled = price * 2; // $9.00
//! assert_eq!(doubled.cents(), 900);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::InvalidInput;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves headroom for adjustments even though the
///   engine only ever stores non-negative amounts today
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support so persisted records carry exact cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bliss_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents $4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses an operator-entered decimal amount into cents.
    ///
    /// This is the price-form entry path: `"4.5"` and `"4.50"` both mean
    /// 450 cents, and extra fractional digits round half-up to the cent
    /// (`"4.999"` → 500). Parsing is pure string/integer work - the value
    /// never passes through a float.
    ///
    /// ## Errors
    /// - [`InvalidInput::PriceUnparseable`] for anything that is not an
    ///   unsigned decimal number (including negatives - prices are entered,
    ///   not computed, so a minus sign is always a typo)
    ///
    /// ## Example
    /// ```rust
    /// use bliss_core::money::Money;
    ///
    /// assert_eq!(Money::parse("4.50").unwrap().cents(), 450);
    /// assert_eq!(Money::parse("5").unwrap().cents(), 500);
    /// assert_eq!(Money::parse(".75").unwrap().cents(), 75);
    /// assert_eq!(Money::parse("4.999").unwrap().cents(), 500);
    /// assert!(Money::parse("abc").is_err());
    /// assert!(Money::parse("-1.00").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Money, InvalidInput> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::PriceUnparseable(input.to_string()));
        }

        let (whole, frac) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };

        // At least one digit somewhere; both halves digit-only.
        if whole.is_empty() && frac.is_empty() {
            return Err(InvalidInput::PriceUnparseable(input.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(InvalidInput::PriceUnparseable(input.to_string()));
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| InvalidInput::PriceUnparseable(input.to_string()))?
        };

        let mut frac_digits = frac.chars();
        let tens = frac_digits.next().map_or(0, |c| c as i64 - '0' as i64);
        let units = frac_digits.next().map_or(0, |c| c as i64 - '0' as i64);
        // Round half-up on the third fractional digit.
        let round_up = frac_digits.next().is_some_and(|c| c >= '5');

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(tens * 10 + units))
            .and_then(|c| c.checked_add(i64::from(round_up)))
            .ok_or_else(|| InvalidInput::PriceUnparseable(input.to_string()))?;

        Ok(Money(cents))
    }

    /// Calculates tax, rounding half-up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount × bps + 5000) / 10000`. The +5000 provides
    /// the rounding (5000/10000 = 0.5). i128 intermediate prevents
    /// overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use bliss_core::money::Money;
    /// use bliss_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(900); // $9.00
    /// let rate = TaxRate::from_bps(800);     // 8%
    ///
    /// // $9.00 × 8% = $0.72
    /// assert_eq!(subtotal.calculate_tax(rate).cents(), 72);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bliss_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(450); // $4.50
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 900);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$d.cc`.
///
/// This is the exact form the receipt layout embeds, so it must stay
/// stable - receipts are a formatting contract, not a debug aid.
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
        let money = Money::from_cents(450);
        assert_eq!(money.cents(), 450);
        assert_eq!(money.dollars(), 4);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(450)), "$4.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(7)), "$0.07");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
        acc -= b;
        assert_eq!(acc.cents(), 1000);
    }

    #[test]
    fn test_parse_plain_amounts() {
        assert_eq!(Money::parse("4.50").unwrap().cents(), 450);
        assert_eq!(Money::parse("4.5").unwrap().cents(), 450);
        assert_eq!(Money::parse("4").unwrap().cents(), 400);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
        assert_eq!(Money::parse("  5.25  ").unwrap().cents(), 525);
    }

    #[test]
    fn test_parse_rounds_half_up_on_third_digit() {
        assert_eq!(Money::parse("4.999").unwrap().cents(), 500);
        assert_eq!(Money::parse("4.994").unwrap().cents(), 499);
        assert_eq!(Money::parse("4.995").unwrap().cents(), 500);
        assert_eq!(Money::parse("0.005").unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("4.5.0").is_err());
        assert!(Money::parse("4,50").is_err());
        assert!(Money::parse("-1.00").is_err());
        assert!(Money::parse("$4.50").is_err());
    }

    #[test]
    fn test_tax_calculation_exact() {
        // $9.00 at 8% = $0.72, no rounding needed
        let amount = Money::from_cents(900);
        let rate = TaxRate::from_bps(800);
        assert_eq!(amount.calculate_tax(rate).cents(), 72);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $4.75 at 8% = $0.38 exactly; $4.81 at 8% = $0.3848 → $0.38
        let rate = TaxRate::from_bps(800);
        assert_eq!(Money::from_cents(475).calculate_tax(rate).cents(), 38);
        assert_eq!(Money::from_cents(481).calculate_tax(rate).cents(), 38);
        // $4.69 at 8% = $0.3752 → $0.38 (half-up on the sub-cent)
        assert_eq!(Money::from_cents(469).calculate_tax(rate).cents(), 38);
    }

    #[test]
    fn test_empty_amount_zero_tax() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(Money::zero().calculate_tax(rate).cents(), 0);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(450);
        assert_eq!(unit_price.multiply_quantity(2).cents(), 900);
    }
}
