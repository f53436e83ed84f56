//! The arithmetic engine contract.
//!
//! The [`Calculator`] trait abstracts over the backend that performs
//! primitive operations on canonical digit strings, so that the value
//! types can run on the built-in [`NativeCalculator`](super::NativeCalculator)
//! or on any other backend that honours the same contract.
//!
//! | Method | Semantics |
//! |--------|-----------|
//! | `add` / `sub` / `mul` | exact signed arithmetic |
//! | `div_q` / `div_r` / `div_qr` | truncating division, remainder takes the dividend's sign |
//! | `pow` | non-negative integer exponent |
//! | `gcd` | always non-negative, `gcd(0, 0) = 0` |
//! | `cmp` | three-way comparison |
//! | `div_round` | division with an explicit [`RoundingMode`] |

use core::cmp::Ordering;
use core::fmt;

use crate::domain::RoundingMode;
use crate::error::Result;

use super::digits;

/// Largest exponent accepted by the `power` operations of the value types.
pub const MAX_POWER: u32 = 1_000_000;

/// Primitive operations over canonical digit strings.
///
/// # Contract
///
/// - Every argument is a canonical digit string: an optional `-`, then
///   decimal digits without a leading zero; zero is `"0"`. Behaviour on any
///   other input is unspecified.
/// - Every returned string is canonical.
/// - Divisors are never zero; the value types check before calling.
/// - Implementations must be thread-safe: one instance serves the whole
///   process once installed.
pub trait Calculator: Send + Sync + fmt::Debug {
    // -- Required primitives ------------------------------------------------

    /// Returns `left + right`.
    #[must_use]
    fn add(&self, left: &str, right: &str) -> String;

    /// Returns `left - right`.
    #[must_use]
    fn sub(&self, left: &str, right: &str) -> String;

    /// Returns `left × right`.
    #[must_use]
    fn mul(&self, left: &str, right: &str) -> String;

    /// Returns the truncated quotient and the remainder of `left / right`.
    ///
    /// The remainder carries the sign of `left` (or is zero).
    #[must_use]
    fn div_qr(&self, left: &str, right: &str) -> (String, String);

    /// Returns `base^exponent`.
    #[must_use]
    fn pow(&self, base: &str, exponent: u32) -> String;

    /// Compares two values.
    #[must_use]
    fn cmp(&self, left: &str, right: &str) -> Ordering;

    // -- Provided operations ------------------------------------------------

    /// Returns the truncated quotient of `left / right`.
    #[must_use]
    fn div_q(&self, left: &str, right: &str) -> String {
        self.div_qr(left, right).0
    }

    /// Returns the remainder of `left / right`, with the sign of `left`.
    #[must_use]
    fn div_r(&self, left: &str, right: &str) -> String {
        self.div_qr(left, right).1
    }

    /// Returns `-operand`.
    #[must_use]
    fn neg(&self, operand: &str) -> String {
        digits::negate(operand)
    }

    /// Returns `|operand|`.
    #[must_use]
    fn abs(&self, operand: &str) -> String {
        digits::magnitude(operand).to_owned()
    }

    /// Returns the greatest common divisor of the two values.
    ///
    /// Euclid's algorithm on `div_r`, run iteratively. The result is never
    /// negative, and `gcd(0, 0)` is `0`.
    #[must_use]
    fn gcd(&self, left: &str, right: &str) -> String {
        let mut a = self.abs(left);
        let mut b = self.abs(right);
        while b != digits::ZERO {
            let r = self.div_r(&a, &b);
            a = b;
            b = r;
        }
        a
    }

    /// Divides `left` by `right`, rounding the quotient with `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::RoundingNecessary`](crate::error::MathError::RoundingNecessary)
    /// if `mode` is [`RoundingMode::Unnecessary`] and the division leaves a
    /// remainder.
    fn div_round(&self, left: &str, right: &str, mode: RoundingMode) -> Result<String> {
        super::rounding::div_round(self, left, right, mode)
    }
}
