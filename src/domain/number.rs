//! Enum dispatch over the three number kinds.
//!
//! [`Number`] is what a literal parses to when its kind is not known in
//! advance. It implements [`Numeric`] by delegating every method to the
//! wrapped value.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use super::{BigDecimal, BigInteger, BigRational, RoundingMode};
use crate::error::{MathError, Result};
use crate::math::digits;
use crate::parse::Literal;
use crate::traits::Numeric;

/// An integer, decimal or rational value.
///
/// The kind follows the literal: digits only give an
/// [`Integer`](Number::Integer), a point or an exponent gives a
/// [`Decimal`](Number::Decimal), a slash gives a
/// [`Rational`](Number::Rational).
///
/// # Examples
///
/// ```
/// use exact_math::domain::Number;
///
/// assert!(matches!(Number::of("-12").unwrap(), Number::Integer(_)));
/// assert!(matches!(Number::of("1.5e3").unwrap(), Number::Decimal(_)));
/// assert!(matches!(Number::of("22/7").unwrap(), Number::Rational(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    /// A [`BigInteger`].
    Integer(BigInteger),
    /// A [`BigDecimal`].
    Decimal(BigDecimal),
    /// A [`BigRational`].
    Rational(BigRational),
}

/// Calls the same method on whichever value a [`Number`] wraps.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            Number::Integer(n) => n.$method($($arg),*),
            Number::Decimal(n) => n.$method($($arg),*),
            Number::Rational(n) => n.$method($($arg),*),
        }
    };
}

impl Number {
    /// Parses a literal into the matching kind.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if `text` is not a number, a
    ///   decimal's scale does not fit in a `u32`, or its exponent would
    ///   append more than
    ///   [`MAX_APPENDED_ZEROS`](crate::math::digits::MAX_APPENDED_ZEROS)
    ///   zeros to a nonzero value.
    /// - [`MathError::DivisionByZero`] if a rational has a zero
    ///   denominator.
    pub fn of(text: &str) -> Result<Self> {
        match Literal::tokenize(text)? {
            Literal::Integer { negative, digits } => Ok(Self::Integer(
                BigInteger::from_canonical(digits::canonicalize(negative, digits)),
            )),
            Literal::Decimal {
                negative,
                integral,
                fraction,
                exponent,
            } => decimal_from_parts(text, negative, integral, fraction, exponent).map(Self::Decimal),
            Literal::Rational {
                negative,
                numerator,
                denominator,
            } => {
                let numerator = BigInteger::from_canonical(digits::canonicalize(negative, numerator));
                let denominator = BigInteger::from_canonical(digits::canonicalize(false, denominator));
                BigRational::nd(numerator, denominator).map(Self::Rational)
            }
        }
    }

    /// Parses both literals and compares them numerically.
    ///
    /// # Errors
    ///
    /// Fails as [`Number::of`] does for either argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use exact_math::domain::Number;
    ///
    /// assert_eq!(Number::compare("0.5", "1/2").unwrap(), Ordering::Equal);
    /// assert_eq!(Number::compare("-1e3", "7").unwrap(), Ordering::Less);
    /// ```
    pub fn compare(left: &str, right: &str) -> Result<Ordering> {
        let left = Self::of(left)?;
        let right = Self::of(right)?;
        Ok(left.compare_to(&right))
    }

    /// Returns the numerically smallest of `values`; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `values` is empty.
    pub fn min<I: IntoIterator<Item = Self>>(values: I) -> Result<Self> {
        values
            .into_iter()
            .reduce(|best, next| if next.is_less_than(&best) { next } else { best })
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
            .reduce(|best, next| if next.is_greater_than(&best) { next } else { best })
            .ok_or_else(|| MathError::invalid("max() expects at least one value"))
    }

    /// Returns the transport form of the wrapped value.
    #[must_use]
    pub fn to_transport_string(&self) -> String {
        delegate!(self, to_transport_string())
    }

    /// Restores a value from a transport form; `:` marks a decimal and
    /// `/` a rational.
    ///
    /// # Errors
    ///
    /// Fails as the `from_transport_str` of the detected kind does.
    pub fn from_transport_str(text: &str) -> Result<Self> {
        if text.contains(':') {
            BigDecimal::from_transport_str(text).map(Self::Decimal)
        } else if text.contains('/') {
            BigRational::from_transport_str(text).map(Self::Rational)
        } else {
            BigInteger::from_transport_str(text).map(Self::Integer)
        }
    }
}

/// Builds a decimal from tokenized parts, folding the exponent into the
/// scale and padding the unscaled value when the scale would go negative.
fn decimal_from_parts(
    text: &str,
    negative: bool,
    integral: &str,
    fraction: &str,
    exponent: i64,
) -> Result<BigDecimal> {
    let out_of_range = || MathError::format(format!("the scale of \"{text}\" is out of range"));

    let unscaled = digits::canonicalize(negative, &format!("{integral}{fraction}"));
    let fraction_len = i64::try_from(fraction.len()).map_err(|_| out_of_range())?;
    let scale = fraction_len.checked_sub(exponent).ok_or_else(out_of_range)?;

    if scale >= 0 {
        let scale = u32::try_from(scale).map_err(|_| out_of_range())?;
        return Ok(BigDecimal::from_parts(BigInteger::from_canonical(unscaled), scale));
    }
    if u32::try_from(-scale).is_err() {
        return Err(out_of_range());
    }
    let padded = digits::checked_append_zeros(&unscaled, scale.unsigned_abs())
        .ok_or_else(|| MathError::format(format!("the exponent of \"{text}\" is too large")))?;
    Ok(BigDecimal::from_parts(BigInteger::from_canonical(padded), 0))
}

impl Numeric for Number {
    fn signum(&self) -> i32 {
        delegate!(self, signum())
    }

    fn compare_to(&self, that: &Number) -> Ordering {
        delegate!(self, compare_to(that))
    }

    fn to_big_integer(&self) -> Result<BigInteger> {
        delegate!(self, to_big_integer())
    }

    fn to_big_decimal(&self) -> Result<BigDecimal> {
        delegate!(self, to_big_decimal())
    }

    fn to_big_rational(&self) -> BigRational {
        delegate!(self, to_big_rational())
    }

    fn to_scale(&self, scale: u32, mode: RoundingMode) -> Result<BigDecimal> {
        delegate!(self, to_scale(scale, mode))
    }

    fn to_i64(&self) -> Result<i64> {
        delegate!(self, to_i64())
    }

    fn to_f64(&self) -> f64 {
        delegate!(self, to_f64())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => fmt::Display::fmt(n, f),
            Number::Decimal(n) => fmt::Display::fmt(n, f),
            Number::Rational(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl FromStr for Number {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::of(s)
    }
}

impl From<BigInteger> for Number {
    fn from(value: BigInteger) -> Self {
        Self::Integer(value)
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Self::Rational(value)
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self::Integer(BigInteger::from(value))
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

impl TryFrom<f64> for Number {
    type Error = MathError;

    /// Converts through the shortest decimal representation of `value`, so
    /// `0.1` becomes the decimal `0.1` rather than its binary expansion.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(MathError::format(format!("{value} is not a finite number")));
        }
        let text = format!("{value:?}");
        Ok(Self::Decimal(Self::of(&text)?.to_big_decimal()?))
    }
}
