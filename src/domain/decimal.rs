//! Arbitrary-precision decimal: an unscaled integer and a non-negative scale.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Neg, Sub};
use core::str::FromStr;

use tracing::debug;

use super::{BigInteger, BigRational, Number, RoundingMode};
use crate::error::{MathError, Result};
use crate::math::{calculator, digits, MAX_POWER};
use crate::traits::Numeric;

/// An immutable decimal number `unscaled × 10^-scale`.
///
/// Equality and hashing are structural: `2.0` and `2.00` are different
/// values that compare as numerically equal through [`BigDecimal::compare`]
/// and [`Numeric::compare_to`]. For that reason the type does not
/// implement [`Ord`].
///
/// # Examples
///
/// ```
/// use exact_math::domain::{BigDecimal, RoundingMode};
///
/// let price = BigDecimal::of("123.45").unwrap();
/// let whole = price.divided_by(&BigDecimal::one(), 0, RoundingMode::Down).unwrap();
/// assert_eq!(whole.to_string(), "123");
/// assert_eq!(whole.scale(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal {
    value: BigInteger,
    scale: u32,
}

impl BigDecimal {
    pub(crate) const fn from_parts(value: BigInteger, scale: u32) -> Self {
        Self { value, scale }
    }

    fn from_digits(value: String, scale: u32) -> Self {
        Self::from_parts(BigInteger::from_canonical(value), scale)
    }

    /// `0` at scale 0.
    pub fn zero() -> Self {
        Self::from_parts(BigInteger::zero(), 0)
    }

    /// `1` at scale 0.
    pub fn one() -> Self {
        Self::from_parts(BigInteger::one(), 0)
    }

    /// `10` at scale 0.
    pub fn ten() -> Self {
        Self::from_parts(BigInteger::ten(), 0)
    }

    /// Parses any numeric literal and converts it to a decimal exactly.
    ///
    /// The scale is the number of fractional digits minus the exponent,
    /// floored at zero: `"1.5e3"` is `1500` at scale 0 and `"1.50"` keeps
    /// scale 2.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if `text` is not a number.
    /// - [`MathError::Arithmetic`] if a rational literal has no terminating
    ///   decimal expansion.
    /// - [`MathError::DivisionByZero`] for a zero denominator.
    pub fn of(text: &str) -> Result<Self> {
        Number::of(text)?.to_big_decimal()
    }

    /// Builds `value × 10^-scale`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `scale` is negative or
    /// larger than [`u32::MAX`].
    pub fn of_unscaled_value(value: impl Into<BigInteger>, scale: i64) -> Result<Self> {
        if scale < 0 {
            return Err(MathError::invalid("the scale cannot be negative"));
        }
        let scale = u32::try_from(scale)
            .map_err(|_| MathError::invalid(format!("the scale {scale} is too large")))?;
        Ok(Self::from_parts(value.into(), scale))
    }

    /// The unscaled integer value.
    #[must_use]
    pub const fn unscaled_value(&self) -> &BigInteger {
        &self.value
    }

    /// Digits to the right of the decimal point.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    #[must_use]
    pub fn signum(&self) -> i32 {
        self.value.signum()
    }

    /// The signed digits before the decimal point, e.g. `"-12"` for
    /// `-12.34` and `"0"` for `0.5`.
    #[must_use]
    pub fn integral_part(&self) -> String {
        if self.scale == 0 {
            return self.value.to_string();
        }
        let padded = self.padded_digits();
        padded[..padded.len() - self.scale as usize].to_owned()
    }

    /// The digits after the decimal point; empty at scale 0.
    #[must_use]
    pub fn fractional_part(&self) -> String {
        if self.scale == 0 {
            return String::new();
        }
        let padded = self.padded_digits();
        padded[padded.len() - self.scale as usize..].to_owned()
    }

    // -- Arithmetic ---------------------------------------------------------

    /// Returns `self + that` at scale `max(self.scale, that.scale)`.
    #[must_use]
    pub fn plus(&self, that: &Self) -> Self {
        if that.signum() == 0 && that.scale <= self.scale {
            return self.clone();
        }
        let (a, b) = scale_values(self, that);
        Self::from_digits(calculator().add(&a, &b), self.scale.max(that.scale))
    }

    /// Returns `self - that` at scale `max(self.scale, that.scale)`.
    #[must_use]
    pub fn minus(&self, that: &Self) -> Self {
        if that.signum() == 0 && that.scale <= self.scale {
            return self.clone();
        }
        let (a, b) = scale_values(self, that);
        Self::from_digits(calculator().sub(&a, &b), self.scale.max(that.scale))
    }

    /// Returns `self × that` at scale `self.scale + that.scale`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arithmetic`] if the resulting scale does not
    /// fit in a `u32`.
    pub fn multiplied_by(&self, that: &Self) -> Result<Self> {
        if that.value.as_str() == digits::ONE && that.scale == 0 {
            return Ok(self.clone());
        }
        let scale = self
            .scale
            .checked_add(that.scale)
            .ok_or_else(|| MathError::arithmetic("scale overflow in multiplication"))?;
        Ok(Self::from_parts(self.value.multiplied_by(&that.value), scale))
    }

    /// Returns `self / that` at the given `scale`, rounded with `mode`.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `that` is zero.
    /// - [`MathError::RoundingNecessary`] if `mode` is
    ///   [`RoundingMode::Unnecessary`] and the quotient needs more digits.
    pub fn divided_by(&self, that: &Self, scale: u32, mode: RoundingMode) -> Result<Self> {
        if that.signum() == 0 {
            return Err(MathError::DivisionByZero("divisor"));
        }
        if that.value.as_str() == digits::ONE && that.scale == 0 && scale == self.scale {
            return Ok(self.clone());
        }
        let p = self.value_with_min_scale(that.scale as usize + scale as usize);
        let q = that.value_with_min_scale(self.scale.saturating_sub(scale) as usize);
        let quotient = calculator().div_round(&p, &q, mode)?;
        Ok(Self::from_digits(quotient, scale))
    }

    /// Returns `self / that` at this value's scale, rounded with `mode`.
    ///
    /// # Errors
    ///
    /// See [`BigDecimal::divided_by`].
    pub fn divided_by_at_own_scale(&self, that: &Self, mode: RoundingMode) -> Result<Self> {
        self.divided_by(that, self.scale, mode)
    }

    /// Returns `self / that` with as many digits as the exact quotient
    /// needs, and no trailing zeros.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `that` is zero.
    /// - [`MathError::Arithmetic`] if the quotient has a non-terminating
    ///   decimal expansion.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_math::domain::BigDecimal;
    ///
    /// let a = BigDecimal::of_unscaled_value(1, 3).unwrap();
    /// let q = a.exactly_divided_by(&BigDecimal::from(8)).unwrap();
    /// assert_eq!(q.to_string(), "0.000125");
    /// assert!(BigDecimal::one().exactly_divided_by(&BigDecimal::from(3)).is_err());
    /// ```
    pub fn exactly_divided_by(&self, that: &Self) -> Result<Self> {
        if that.signum() == 0 {
            return Err(MathError::DivisionByZero("divisor"));
        }

        let (_, b) = scale_values(self, that);
        let calc = calculator();
        let magnitude = digits::magnitude(&b);
        let mut d = magnitude.trim_end_matches('0').to_owned();
        let mut scale = magnitude.len() - d.len();

        for (prime, text) in [(5, "5"), (2, "2")] {
            while d.as_bytes().last().is_some_and(|digit| (digit - b'0') % prime == 0) {
                d = calc.div_q(&d, text);
                scale += 1;
            }
        }

        let scale = u32::try_from(scale)
            .map_err(|_| MathError::arithmetic("scale overflow in exact division"))?;
        match self.divided_by(that, scale, RoundingMode::Unnecessary) {
            Ok(quotient) => Ok(quotient.strip_trailing_zeros()),
            Err(MathError::RoundingNecessary) => {
                debug!(dividend = %self, divisor = %that, "quotient does not terminate");
                Err(MathError::arithmetic(format!(
                    "{self} / {that} has a non-terminating decimal expansion"
                )))
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the truncated quotient of `self / that` at scale 0.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn quotient(&self, that: &Self) -> Result<Self> {
        if that.signum() == 0 {
            return Err(MathError::DivisionByZero("divisor"));
        }
        let p = self.value_with_min_scale(that.scale as usize);
        let q = that.value_with_min_scale(self.scale as usize);
        Ok(Self::from_digits(calculator().div_q(&p, &q), 0))
    }

    /// Returns the remainder of the truncated division, at scale
    /// `max(self.scale, that.scale)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn remainder(&self, that: &Self) -> Result<Self> {
        if that.signum() == 0 {
            return Err(MathError::DivisionByZero("divisor"));
        }
        let p = self.value_with_min_scale(that.scale as usize);
        let q = that.value_with_min_scale(self.scale as usize);
        Ok(Self::from_digits(
            calculator().div_r(&p, &q),
            self.scale.max(that.scale),
        ))
    }

    /// Returns [`quotient`](Self::quotient) and
    /// [`remainder`](Self::remainder) together.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn quotient_and_remainder(&self, that: &Self) -> Result<(Self, Self)> {
        if that.signum() == 0 {
            return Err(MathError::DivisionByZero("divisor"));
        }
        let p = self.value_with_min_scale(that.scale as usize);
        let q = that.value_with_min_scale(self.scale as usize);
        let (quotient, remainder) = calculator().div_qr(&p, &q);
        Ok((
            Self::from_digits(quotient, 0),
            Self::from_digits(remainder, self.scale.max(that.scale)),
        ))
    }

    /// Returns `self^exponent` at scale `self.scale × exponent`.
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidArgument`] if `exponent` exceeds [`MAX_POWER`].
    /// - [`MathError::Arithmetic`] if the resulting scale does not fit in
    ///   a `u32`.
    pub fn power(&self, exponent: u32) -> Result<Self> {
        match exponent {
            0 => Ok(Self::one()),
            1 => Ok(self.clone()),
            e if e > MAX_POWER => Err(MathError::invalid(format!(
                "the exponent {e} is not in the range 0 to {MAX_POWER}"
            ))),
            e => {
                let scale = self
                    .scale
                    .checked_mul(e)
                    .ok_or_else(|| MathError::arithmetic("scale overflow in power"))?;
                Ok(Self::from_parts(self.value.power(e)?, scale))
            }
        }
    }

    // -- Scale --------------------------------------------------------------

    /// Moves the decimal point `n` places to the left; negative `n` moves
    /// it right.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arithmetic`] if the new scale does not fit in
    /// a `u32`.
    pub fn with_point_moved_left(&self, n: i64) -> Result<Self> {
        match n.cmp(&0) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Less => self.with_point_moved_right(negate_shift(n)?),
            Ordering::Greater => {
                let scale = i64::from(self.scale)
                    .checked_add(n)
                    .and_then(|scale| u32::try_from(scale).ok())
                    .ok_or_else(|| MathError::arithmetic("scale overflow moving the point"))?;
                Ok(Self::from_parts(self.value.clone(), scale))
            }
        }
    }

    /// Moves the decimal point `n` places to the right; negative `n` moves
    /// it left. The scale never drops below zero: zeros are appended to the
    /// unscaled value instead.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Arithmetic`] if the shift cannot be represented
    /// or would append more than
    /// [`MAX_APPENDED_ZEROS`](crate::math::digits::MAX_APPENDED_ZEROS)
    /// zeros to a nonzero value.
    pub fn with_point_moved_right(&self, n: i64) -> Result<Self> {
        match n.cmp(&0) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Less => self.with_point_moved_left(negate_shift(n)?),
            Ordering::Greater => {
                let scale = i64::from(self.scale) - n;
                if scale >= 0 {
                    let scale = u32::try_from(scale)
                        .map_err(|_| MathError::arithmetic("scale overflow moving the point"))?;
                    return Ok(Self::from_parts(self.value.clone(), scale));
                }
                let shifted = digits::checked_append_zeros(self.value.as_str(), scale.unsigned_abs())
                    .ok_or_else(|| MathError::arithmetic("shift too large moving the point"))?;
                Ok(Self::from_digits(shifted, 0))
            }
        }
    }

    /// Removes trailing fractional zeros. The scale never goes below 0 and
    /// any zero becomes [`BigDecimal::zero`].
    #[must_use]
    pub fn strip_trailing_zeros(&self) -> Self {
        if self.scale == 0 {
            return self.clone();
        }
        let digits = self.value.as_str();
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            return Self::zero();
        }
        let removable = (digits.len() - trimmed.len()).min(self.scale as usize);
        if removable == 0 {
            return self.clone();
        }
        Self::from_digits(
            digits[..digits.len() - removable].to_owned(),
            self.scale - removable as u32,
        )
    }

    /// Returns `|self|` at the same scale.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.signum() < 0 {
            self.negated()
        } else {
            self.clone()
        }
    }

    /// Returns `-self` at the same scale.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_parts(self.value.negated(), self.scale)
    }

    /// Compares numerically, ignoring scale: `2.0` equals `2.00`.
    #[must_use]
    pub fn compare(&self, that: &Self) -> Ordering {
        let (a, b) = scale_values(self, that);
        calculator().cmp(&a, &b)
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

    /// Returns the transport form `unscaled:scale`.
    #[must_use]
    pub fn to_transport_string(&self) -> String {
        format!("{}:{}", self.value, self.scale)
    }

    /// Restores a value from its transport form `unscaled:scale`.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if the payload is malformed.
    /// - [`MathError::InvalidArgument`] if the scale is negative.
    pub fn from_transport_str(text: &str) -> Result<Self> {
        let Some((unscaled, scale)) = text.split_once(':') else {
            return Err(MathError::format(format!(
                "\"{text}\" is not a decimal transport string"
            )));
        };
        let value = BigInteger::from_transport_str(unscaled)?;
        let scale = scale
            .parse::<i64>()
            .map_err(|_| MathError::format(format!("\"{scale}\" is not a valid scale")))?;
        Self::of_unscaled_value(value, scale)
    }

    // -- Helpers ------------------------------------------------------------

    /// The unscaled value rescaled to at least `scale`.
    fn value_with_min_scale(&self, scale: usize) -> String {
        let own = self.scale as usize;
        if scale > own {
            digits::append_zeros(self.value.as_str(), scale - own)
        } else {
            self.value.as_str().to_owned()
        }
    }

    /// Signed unscaled digits left-padded so that at least one digit sits
    /// before the point.
    fn padded_digits(&self) -> String {
        let value = self.value.as_str();
        let magnitude = digits::magnitude(value);
        let target = self.scale as usize + 1;
        let sign = if digits::is_negative(value) { "-" } else { "" };
        if magnitude.len() >= target {
            return value.to_owned();
        }
        format!("{sign}{magnitude:0>target$}")
    }
}

/// Both unscaled values brought to the larger of the two scales.
fn scale_values(x: &BigDecimal, y: &BigDecimal) -> (String, String) {
    let target = x.scale.max(y.scale) as usize;
    (x.value_with_min_scale(target), y.value_with_min_scale(target))
}

fn negate_shift(n: i64) -> Result<i64> {
    n.checked_neg()
        .ok_or_else(|| MathError::arithmetic("shift too large moving the point"))
}

impl Numeric for BigDecimal {
    fn signum(&self) -> i32 {
        Self::signum(self)
    }

    fn compare_to(&self, that: &Number) -> Ordering {
        match that {
            Number::Integer(i) => self.compare(&Self::from(i.clone())),
            Number::Decimal(d) => self.compare(d),
            Number::Rational(r) => self.to_big_rational().compare(r),
        }
    }

    fn to_big_integer(&self) -> Result<BigInteger> {
        if self.scale == 0 {
            return Ok(self.value.clone());
        }
        Ok(self.divided_by(&Self::one(), 0, RoundingMode::Unnecessary)?.value)
    }

    fn to_big_decimal(&self) -> Result<BigDecimal> {
        Ok(self.clone())
    }

    fn to_big_rational(&self) -> BigRational {
        let denominator =
            BigInteger::from_canonical(digits::power_of_ten(self.scale as usize));
        BigRational::from_parts(self.value.clone(), denominator)
    }

    fn to_scale(&self, scale: u32, mode: RoundingMode) -> Result<BigDecimal> {
        if scale == self.scale {
            return Ok(self.clone());
        }
        self.divided_by(&Self::one(), scale, mode)
    }

    fn to_i64(&self) -> Result<i64> {
        self.to_big_integer()?.to_i64()
    }

    fn to_f64(&self) -> f64 {
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return fmt::Display::fmt(&self.value, f);
        }
        let padded = self.padded_digits();
        let (integral, fraction) = padded.split_at(padded.len() - self.scale as usize);
        write!(f, "{integral}.{fraction}")
    }
}

impl FromStr for BigDecimal {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::of(s)
    }
}

impl Default for BigDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInteger> for BigDecimal {
    fn from(value: BigInteger) -> Self {
        Self::from_parts(value, 0)
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigDecimal {
                fn from(value: $t) -> Self {
                    Self::from(BigInteger::from(value))
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

impl Add<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: &BigDecimal) -> BigDecimal {
        self.plus(rhs)
    }
}

impl Add for BigDecimal {
    type Output = BigDecimal;

    fn add(self, rhs: BigDecimal) -> BigDecimal {
        self.plus(&rhs)
    }
}

impl Sub<&BigDecimal> for &BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: &BigDecimal) -> BigDecimal {
        self.minus(rhs)
    }
}

impl Sub for BigDecimal {
    type Output = BigDecimal;

    fn sub(self, rhs: BigDecimal) -> BigDecimal {
        self.minus(&rhs)
    }
}

impl Neg for BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negated()
    }
}

impl Neg for &BigDecimal {
    type Output = BigDecimal;

    fn neg(self) -> BigDecimal {
        self.negated()
    }
}
