//! The behaviour shared by every exact number type.
//!
//! [`Numeric`] is implemented by [`BigInteger`], [`BigDecimal`],
//! [`BigRational`] and the [`Number`] enum that wraps them. It covers:
//!
//! 1. **Sign**: [`Numeric::signum`] and the `is_zero` / `is_negative` /
//!    `is_positive` family built on it.
//! 2. **Comparison**: [`Numeric::compare_to`] across all three kinds,
//!    widening to the broader representation first, plus the
//!    `is_equal_to` / `is_less_than` family built on it.
//! 3. **Conversion**: exact conversion to each kind, rounding to a
//!    decimal scale, and narrowing to `i64` / `f64`.
//!
//! # Conversion table
//!
//! | from \ to | Integer | Decimal | Rational |
//! |-----------|---------|---------|----------|
//! | Integer   | identity | scale 0 | `n/1` |
//! | Decimal   | exact or `RoundingNecessary` | identity | `unscaled/10^scale` |
//! | Rational  | exact or `Arithmetic` | exact or `Arithmetic` | identity |

use core::cmp::Ordering;

use crate::domain::{BigDecimal, BigInteger, BigRational, Number, RoundingMode};
use crate::error::Result;

/// Common sign, comparison and conversion operations.
///
/// Only the first eight methods are required; the predicates are
/// provided in terms of [`signum`](Numeric::signum) and
/// [`compare_to`](Numeric::compare_to).
///
/// # Examples
///
/// ```
/// use exact_math::domain::{BigDecimal, Number};
/// use exact_math::traits::Numeric;
///
/// let half = BigDecimal::of("0.50").unwrap();
/// assert!(half.is_positive());
/// assert!(half.is_equal_to(&Number::of("1/2").unwrap()));
/// assert!(half.is_less_than(&Number::from(1)));
/// ```
pub trait Numeric {
    /// Returns `-1`, `0` or `1` according to the sign.
    #[must_use]
    fn signum(&self) -> i32;

    /// Compares numerically with any number.
    #[must_use]
    fn compare_to(&self, that: &Number) -> Ordering;

    /// Converts to an integer without rounding.
    ///
    /// # Errors
    ///
    /// - [`MathError::RoundingNecessary`](crate::error::MathError::RoundingNecessary)
    ///   for a decimal with a nonzero fraction.
    /// - [`MathError::Arithmetic`](crate::error::MathError::Arithmetic)
    ///   for a rational that is not integral.
    fn to_big_integer(&self) -> Result<BigInteger>;

    /// Converts to a decimal without rounding.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arithmetic`](crate::error::MathError::Arithmetic)
    /// for a rational with a non-terminating decimal expansion.
    fn to_big_decimal(&self) -> Result<BigDecimal>;

    /// Converts to a rational. Never fails.
    #[must_use]
    fn to_big_rational(&self) -> BigRational;

    /// Converts to a decimal with the given scale, rounding with `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::RoundingNecessary`](crate::error::MathError::RoundingNecessary)
    /// if `mode` is [`RoundingMode::Unnecessary`] and digits would be lost.
    fn to_scale(&self, scale: u32, mode: RoundingMode) -> Result<BigDecimal>;

    /// Converts to an `i64` without rounding.
    ///
    /// # Errors
    ///
    /// Fails as [`to_big_integer`](Numeric::to_big_integer) does, or with
    /// [`MathError::Arithmetic`](crate::error::MathError::Arithmetic) if
    /// the value is out of range.
    fn to_i64(&self) -> Result<i64>;

    /// Converts to the nearest `f64`. Precision may be lost.
    #[must_use]
    fn to_f64(&self) -> f64;

    // -- Provided predicates ------------------------------------------------

    /// `self == 0`
    #[must_use]
    fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    /// `self < 0`
    #[must_use]
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// `self <= 0`
    #[must_use]
    fn is_negative_or_zero(&self) -> bool {
        self.signum() <= 0
    }

    /// `self > 0`
    #[must_use]
    fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// `self >= 0`
    #[must_use]
    fn is_positive_or_zero(&self) -> bool {
        self.signum() >= 0
    }

    /// Numeric equality, ignoring representation.
    #[must_use]
    fn is_equal_to(&self, that: &Number) -> bool {
        self.compare_to(that) == Ordering::Equal
    }

    /// `self < that`
    #[must_use]
    fn is_less_than(&self, that: &Number) -> bool {
        self.compare_to(that) == Ordering::Less
    }

    /// `self <= that`
    #[must_use]
    fn is_less_than_or_equal_to(&self, that: &Number) -> bool {
        self.compare_to(that) != Ordering::Greater
    }

    /// `self > that`
    #[must_use]
    fn is_greater_than(&self, that: &Number) -> bool {
        self.compare_to(that) == Ordering::Greater
    }

    /// `self >= that`
    #[must_use]
    fn is_greater_than_or_equal_to(&self, that: &Number) -> bool {
        self.compare_to(that) != Ordering::Less
    }
}
