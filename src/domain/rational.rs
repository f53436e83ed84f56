//! Arbitrary-precision fraction with a strictly positive denominator.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use super::{BigDecimal, BigInteger, Number, RoundingMode};
use crate::error::{MathError, Result};
use crate::math::{calculator, digits, MAX_POWER};
use crate::traits::Numeric;

/// An immutable fraction `numerator / denominator`.
///
/// The denominator is always positive; the sign lives on the numerator.
/// Results of arithmetic are not reduced automatically, call
/// [`simplified`](Self::simplified) when the lowest terms matter. Equality
/// is structural (`1/2` and `2/4` differ) while
/// [`compare`](Self::compare) is numeric.
///
/// # Examples
///
/// ```
/// use exact_math::domain::{BigRational, RoundingMode};
/// use exact_math::traits::Numeric;
///
/// let third = BigRational::nd(1, 3).unwrap();
/// let sum = third.plus(&third);
/// assert_eq!(sum.to_string(), "6/9");
/// assert_eq!(sum.simplified().to_string(), "2/3");
/// assert_eq!(third.to_scale(5, RoundingMode::HalfUp).unwrap().to_string(), "0.33333");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigRational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl BigRational {
    /// Wraps parts whose denominator is already known to be positive.
    pub(crate) fn from_parts(numerator: BigInteger, denominator: BigInteger) -> Self {
        debug_assert!(denominator.signum() > 0, "denominator must be positive");
        Self {
            numerator,
            denominator,
        }
    }

    /// Builds `numerator / denominator`, moving a negative sign to the
    /// numerator.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `denominator` is zero.
    pub fn nd(numerator: impl Into<BigInteger>, denominator: impl Into<BigInteger>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        match denominator.signum() {
            0 => Err(MathError::DivisionByZero("denominator")),
            s if s < 0 => Ok(Self::from_parts(numerator.negated(), denominator.negated())),
            _ => Ok(Self::from_parts(numerator, denominator)),
        }
    }

    /// Parses any numeric literal, including the `n/d` form.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if `text` is not a number.
    /// - [`MathError::DivisionByZero`] for a zero denominator.
    pub fn of(text: &str) -> Result<Self> {
        Ok(Number::of(text)?.to_big_rational())
    }

    /// `0/1`.
    pub fn zero() -> Self {
        Self::from_parts(BigInteger::zero(), BigInteger::one())
    }

    /// `1/1`.
    pub fn one() -> Self {
        Self::from_parts(BigInteger::one(), BigInteger::one())
    }

    /// `10/1`.
    pub fn ten() -> Self {
        Self::from_parts(BigInteger::ten(), BigInteger::one())
    }

    /// The signed numerator.
    #[must_use]
    pub const fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    /// The positive denominator.
    #[must_use]
    pub const fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    #[must_use]
    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    /// Truncated quotient of numerator by denominator.
    #[must_use]
    pub fn quotient(&self) -> BigInteger {
        self.quotient_and_remainder().0
    }

    /// Remainder of numerator by denominator, with the numerator's sign.
    #[must_use]
    pub fn remainder(&self) -> BigInteger {
        self.quotient_and_remainder().1
    }

    /// Both [`quotient`](Self::quotient) and [`remainder`](Self::remainder).
    #[must_use]
    pub fn quotient_and_remainder(&self) -> (BigInteger, BigInteger) {
        let (q, r) = calculator().div_qr(self.numerator.as_str(), self.denominator.as_str());
        (BigInteger::from_canonical(q), BigInteger::from_canonical(r))
    }

    // -- Arithmetic ---------------------------------------------------------

    /// Returns `self + that` over the product of the denominators.
    #[must_use]
    pub fn plus(&self, that: &Self) -> Self {
        let numerator = self
            .numerator
            .multiplied_by(&that.denominator)
            .plus(&that.numerator.multiplied_by(&self.denominator));
        Self::from_parts(numerator, self.denominator.multiplied_by(&that.denominator))
    }

    /// Returns `self - that` over the product of the denominators.
    #[must_use]
    pub fn minus(&self, that: &Self) -> Self {
        let numerator = self
            .numerator
            .multiplied_by(&that.denominator)
            .minus(&that.numerator.multiplied_by(&self.denominator));
        Self::from_parts(numerator, self.denominator.multiplied_by(&that.denominator))
    }

    /// Returns `self × that`.
    #[must_use]
    pub fn multiplied_by(&self, that: &Self) -> Self {
        Self::from_parts(
            self.numerator.multiplied_by(&that.numerator),
            self.denominator.multiplied_by(&that.denominator),
        )
    }

    /// Returns `self / that`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn divided_by(&self, that: &Self) -> Result<Self> {
        Self::nd(
            self.numerator.multiplied_by(&that.denominator),
            self.denominator.multiplied_by(&that.numerator),
        )
        .map_err(|_| MathError::DivisionByZero("divisor"))
    }

    /// Returns `self^exponent`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `exponent` exceeds
    /// [`MAX_POWER`].
    pub fn power(&self, exponent: u32) -> Result<Self> {
        match exponent {
            0 => Ok(Self::one()),
            1 => Ok(self.clone()),
            e if e > MAX_POWER => Err(MathError::invalid(format!(
                "the exponent {e} is not in the range 0 to {MAX_POWER}"
            ))),
            e => Ok(Self::from_parts(
                self.numerator.power(e)?,
                self.denominator.power(e)?,
            )),
        }
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `self` is zero.
    pub fn reciprocal(&self) -> Result<Self> {
        Self::nd(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.numerator.abs(), self.denominator.clone())
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_parts(self.numerator.negated(), self.denominator.clone())
    }

    /// Reduces to lowest terms. Zero becomes `0/1`.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let gcd = self.numerator.gcd(&self.denominator);
        let calc = calculator();
        Self::from_parts(
            BigInteger::from_canonical(calc.div_q(self.numerator.as_str(), gcd.as_str())),
            BigInteger::from_canonical(calc.div_q(self.denominator.as_str(), gcd.as_str())),
        )
    }

    /// Compares numerically by cross-multiplying.
    #[must_use]
    pub fn compare(&self, that: &Self) -> Ordering {
        let left = self.numerator.multiplied_by(&that.denominator);
        let right = that.numerator.multiplied_by(&self.denominator);
        left.cmp(&right)
    }

    /// Returns the numerically smallest of `values`; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `values` is empty.
    pub fn min<I: IntoIterator<Item = Self>>(values: I) -> Result<Self> {
        values
            .into_iter()
            .reduce(|best, next| if next.compare(&best).is_lt() { next } else { best })
            .ok_or_else(|| MathError::invalid("min() expects at least one value"))
    }

    /// Returns the numerically largest of `values`; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `values` is empty.
    pub fn max<I: IntoIterator<Item = Self>>(values: I) -> Result<Self> {
        values
            .into_iter()
            .reduce(|best, next| if next.compare(&best).is_gt() { next } else { best })
            .ok_or_else(|| MathError::invalid("max() expects at least one value"))
    }

    // -- Transport ----------------------------------------------------------

    /// Returns the transport form `numerator/denominator`, always with
    /// both parts.
    #[must_use]
    pub fn to_transport_string(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Restores a value from its transport form.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if the payload is malformed or the
    ///   denominator is negative.
    /// - [`MathError::DivisionByZero`] if the denominator is zero.
    pub fn from_transport_str(text: &str) -> Result<Self> {
        let Some((numerator, denominator)) = text.split_once('/') else {
            return Err(MathError::format(format!(
                "\"{text}\" is not a rational transport string"
            )));
        };
        let numerator = BigInteger::from_transport_str(numerator)?;
        let denominator = BigInteger::from_transport_str(denominator)?;
        if denominator.signum() < 0 {
            return Err(MathError::format(format!(
                "\"{text}\" has a negative denominator"
            )));
        }
        Self::nd(numerator, denominator)
    }
}

impl Numeric for BigRational {
    fn signum(&self) -> i32 {
        Self::signum(self)
    }

    fn compare_to(&self, that: &Number) -> Ordering {
        match that {
            Number::Integer(i) => self.compare(&Self::from(i.clone())),
            Number::Decimal(d) => self.compare(&d.to_big_rational()),
            Number::Rational(r) => self.compare(r),
        }
    }

    fn to_big_integer(&self) -> Result<BigInteger> {
        let simplified = self.simplified();
        if simplified.denominator.as_str() != digits::ONE {
            return Err(MathError::arithmetic(format!(
                "{self} cannot be represented as an integer without rounding"
            )));
        }
        Ok(simplified.numerator)
    }

    fn to_big_decimal(&self) -> Result<BigDecimal> {
        BigDecimal::from(self.numerator.clone())
            .exactly_divided_by(&BigDecimal::from(self.denominator.clone()))
    }

    fn to_big_rational(&self) -> BigRational {
        self.clone()
    }

    fn to_scale(&self, scale: u32, mode: RoundingMode) -> Result<BigDecimal> {
        BigDecimal::from(self.numerator.clone()).divided_by(
            &BigDecimal::from(self.denominator.clone()),
            scale,
            mode,
        )
    }

    fn to_i64(&self) -> Result<i64> {
        self.to_big_integer()?.to_i64()
    }

    fn to_f64(&self) -> f64 {
        self.numerator.to_f64() / self.denominator.to_f64()
    }
}

impl fmt::Display for BigRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.as_str() == digits::ONE {
            return fmt::Display::fmt(&self.numerator, f);
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for BigRational {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::of(s)
    }
}

impl Default for BigRational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInteger> for BigRational {
    fn from(value: BigInteger) -> Self {
        Self::from_parts(value, BigInteger::one())
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigRational {
                fn from(value: $t) -> Self {
                    Self::from(BigInteger::from(value))
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

macro_rules! binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<&BigRational> for &BigRational {
            type Output = BigRational;

            fn $method(self, rhs: &BigRational) -> BigRational {
                self.$op(rhs)
            }
        }

        impl $trait for BigRational {
            type Output = BigRational;

            fn $method(self, rhs: BigRational) -> BigRational {
                self.$op(&rhs)
            }
        }
    };
}

binary_op!(Add, add, plus);
binary_op!(Sub, sub, minus);
binary_op!(Mul, mul, multiplied_by);

impl Neg for BigRational {
    type Output = BigRational;

    fn neg(self) -> BigRational {
        self.negated()
    }
}

impl Neg for &BigRational {
    type Output = BigRational;

    fn neg(self) -> BigRational {
        self.negated()
    }
}
