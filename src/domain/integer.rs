//! Arbitrary-precision signed integer.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use super::{BigDecimal, BigRational, Number, RoundingMode};
use crate::error::{MathError, Result};
use crate::math::{calculator, digits, MAX_POWER};
use crate::traits::Numeric;

/// An immutable integer of unbounded size.
///
/// The value is stored as a canonical digit string and every operation
/// returns a new instance. Arithmetic is delegated to the process-wide
/// [`Calculator`](crate::math::Calculator).
///
/// # Examples
///
/// ```
/// use exact_math::domain::{BigInteger, RoundingMode};
///
/// let a = BigInteger::of("123456789012345678901234567890").unwrap();
/// let b = BigInteger::from(10);
/// assert_eq!(a.multiplied_by(&b).to_string(), "1234567890123456789012345678900");
/// assert_eq!(
///     a.divided_by(&b, RoundingMode::HalfUp).unwrap().to_string(),
///     "12345678901234567890123456789"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    value: String,
}

impl BigInteger {
    /// Wraps a string already known to be canonical.
    pub(crate) fn from_canonical(value: String) -> Self {
        debug_assert!(digits::is_canonical(&value), "non-canonical digits {value:?}");
        Self { value }
    }

    /// The integer `0`.
    pub fn zero() -> Self {
        Self::from_canonical(digits::ZERO.to_owned())
    }

    /// The integer `1`.
    pub fn one() -> Self {
        Self::from_canonical(digits::ONE.to_owned())
    }

    /// The integer `10`.
    pub fn ten() -> Self {
        Self::from_canonical("10".to_owned())
    }

    /// Parses any numeric literal and converts it to an integer exactly.
    ///
    /// `"12"`, `"1.20e1"` and `"24/2"` all yield `12`.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if `text` is not a number.
    /// - [`MathError::RoundingNecessary`] if a decimal literal has a
    ///   nonzero fraction.
    /// - [`MathError::Arithmetic`] if a rational literal is not integral.
    /// - [`MathError::DivisionByZero`] for a zero denominator.
    pub fn of(text: &str) -> Result<Self> {
        Number::of(text)?.to_big_integer()
    }

    /// Parses an integer written in `base` (2 to 36).
    ///
    /// An optional leading `+` or `-` is accepted. Digits beyond `9` use
    /// the letters `a` to `z`, case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`MathError::NumberFormat`] if `text` is empty or only a sign.
    /// - [`MathError::InvalidArgument`] if `base` is outside `2..=36` or a
    ///   character is not a digit of `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_math::domain::BigInteger;
    ///
    /// assert_eq!(BigInteger::from_str_radix("-ff", 16).unwrap().to_string(), "-255");
    /// assert_eq!(BigInteger::from_str_radix("101", 2).unwrap().to_string(), "5");
    /// ```
    pub fn from_str_radix(text: &str, base: u32) -> Result<Self> {
        if text.is_empty() {
            return Err(MathError::format("the value cannot be empty"));
        }
        check_base(base)?;

        let (negative, body) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        if body.is_empty() {
            return Err(MathError::format("the value cannot be empty"));
        }

        let body = body.trim_start_matches('0');
        if body.is_empty() {
            return Ok(Self::zero());
        }
        if body == "1" {
            return Ok(Self::from_canonical(digits::canonicalize(negative, body)));
        }
        if base == 10 && body.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::from_canonical(digits::canonicalize(negative, body)));
        }

        let calc = calculator();
        let radix = base.to_string();
        let mut result = digits::ZERO.to_owned();
        let mut power = digits::ONE.to_owned();
        for c in body.chars().rev() {
            let digit = c.to_digit(base).ok_or_else(|| {
                MathError::invalid(format!("\"{c}\" is not a valid character in base {base}"))
            })?;
            match digit {
                0 => {}
                1 => result = calc.add(&result, &power),
                _ => result = calc.add(&result, &calc.mul(&power, &digit.to_string())),
            }
            power = calc.mul(&power, &radix);
        }

        if negative {
            result = calc.neg(&result);
        }
        Ok(Self::from_canonical(result))
    }

    /// Returns the canonical digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.value == digits::ZERO {
            0
        } else if digits::is_negative(&self.value) {
            -1
        } else {
            1
        }
    }

    // -- Arithmetic ---------------------------------------------------------

    /// Returns `self + that`.
    #[must_use]
    pub fn plus(&self, that: &Self) -> Self {
        if that.value == digits::ZERO {
            return self.clone();
        }
        Self::from_canonical(calculator().add(&self.value, &that.value))
    }

    /// Returns `self - that`.
    #[must_use]
    pub fn minus(&self, that: &Self) -> Self {
        if that.value == digits::ZERO {
            return self.clone();
        }
        Self::from_canonical(calculator().sub(&self.value, &that.value))
    }

    /// Returns `self × that`.
    #[must_use]
    pub fn multiplied_by(&self, that: &Self) -> Self {
        if that.value == digits::ONE {
            return self.clone();
        }
        Self::from_canonical(calculator().mul(&self.value, &that.value))
    }

    /// Returns `self / that`, rounded with `mode`.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `that` is zero.
    /// - [`MathError::RoundingNecessary`] if `mode` is
    ///   [`RoundingMode::Unnecessary`] and the division is inexact.
    pub fn divided_by(&self, that: &Self, mode: RoundingMode) -> Result<Self> {
        if that.value == digits::ONE {
            return Ok(self.clone());
        }
        if that.value == digits::ZERO {
            return Err(MathError::DivisionByZero("divisor"));
        }
        calculator()
            .div_round(&self.value, &that.value, mode)
            .map(Self::from_canonical)
    }

    /// Divides exactly, producing a decimal with the smallest scale that
    /// represents the quotient.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `that` is zero.
    /// - [`MathError::Arithmetic`] if the quotient has a non-terminating
    ///   decimal expansion.
    pub fn exactly_divided_by(&self, that: &Self) -> Result<BigDecimal> {
        BigDecimal::from(self.clone()).exactly_divided_by(&BigDecimal::from(that.clone()))
    }

    /// Returns the truncated quotient of `self / that`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn quotient(&self, that: &Self) -> Result<Self> {
        if that.value == digits::ONE {
            return Ok(self.clone());
        }
        if that.value == digits::ZERO {
            return Err(MathError::DivisionByZero("divisor"));
        }
        Ok(Self::from_canonical(calculator().div_q(&self.value, &that.value)))
    }

    /// Returns the remainder of the truncated division `self / that`.
    ///
    /// The remainder has the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn remainder(&self, that: &Self) -> Result<Self> {
        if that.value == digits::ZERO {
            return Err(MathError::DivisionByZero("divisor"));
        }
        Ok(Self::from_canonical(calculator().div_r(&self.value, &that.value)))
    }

    /// Returns the truncated quotient and the remainder together.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `that` is zero.
    pub fn quotient_and_remainder(&self, that: &Self) -> Result<(Self, Self)> {
        if that.value == digits::ZERO {
            return Err(MathError::DivisionByZero("divisor"));
        }
        let (q, r) = calculator().div_qr(&self.value, &that.value);
        Ok((Self::from_canonical(q), Self::from_canonical(r)))
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
            e => Ok(Self::from_canonical(calculator().pow(&self.value, e))),
        }
    }

    /// Returns the greatest common divisor, which is never negative.
    #[must_use]
    pub fn gcd(&self, that: &Self) -> Self {
        if that.value == digits::ZERO && !digits::is_negative(&self.value) {
            return self.clone();
        }
        if self.value == digits::ZERO && !digits::is_negative(&that.value) {
            return that.clone();
        }
        Self::from_canonical(calculator().gcd(&self.value, &that.value))
    }

    /// Returns `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        if digits::is_negative(&self.value) {
            self.negated()
        } else {
            self.clone()
        }
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_canonical(calculator().neg(&self.value))
    }

    /// Returns the smallest of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `values` is empty.
    pub fn min<I: IntoIterator<Item = Self>>(values: I) -> Result<Self> {
        values
            .into_iter()
            .min()
            .ok_or_else(|| MathError::invalid("min() expects at least one value"))
    }

    /// Returns the largest of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `values` is empty.
    pub fn max<I: IntoIterator<Item = Self>>(values: I) -> Result<Self> {
        values
            .into_iter()
            .max()
            .ok_or_else(|| MathError::invalid("max() expects at least one value"))
    }

    // -- Conversions --------------------------------------------------------

    /// Formats the value in `base` (2 to 36) using lower-case letters.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if `base` is outside `2..=36`.
    pub fn to_string_radix(&self, base: u32) -> Result<String> {
        if base == 10 {
            return Ok(self.value.clone());
        }
        check_base(base)?;

        let calc = calculator();
        let radix = base.to_string();
        let mut rest = digits::magnitude(&self.value).to_owned();
        let mut reversed = String::new();
        while rest != digits::ZERO {
            let (q, r) = calc.div_qr(&rest, &radix);
            let symbol = r
                .parse::<u32>()
                .ok()
                .and_then(|d| char::from_digit(d, base))
                .ok_or_else(|| MathError::arithmetic(format!("bad remainder {r} in base {base}")))?;
            reversed.push(symbol);
            rest = q;
        }
        if reversed.is_empty() {
            reversed.push('0');
        }
        if digits::is_negative(&self.value) {
            reversed.push('-');
        }
        Ok(reversed.chars().rev().collect())
    }

    /// Returns the transport form: the canonical digit string.
    #[must_use]
    pub fn to_transport_string(&self) -> String {
        self.value.clone()
    }

    /// Restores a value from its transport form.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NumberFormat`] unless `text` is a canonical
    /// digit string.
    pub fn from_transport_str(text: &str) -> Result<Self> {
        if !digits::is_canonical(text) {
            return Err(MathError::format(format!(
                "\"{text}\" is not a canonical integer"
            )));
        }
        Ok(Self::from_canonical(text.to_owned()))
    }
}

fn check_base(base: u32) -> Result<()> {
    if !(2..=36).contains(&base) {
        return Err(MathError::invalid(format!(
            "base {base} is not in range 2 to 36"
        )));
    }
    Ok(())
}

impl Numeric for BigInteger {
    fn signum(&self) -> i32 {
        Self::signum(self)
    }

    fn compare_to(&self, that: &Number) -> Ordering {
        match that {
            Number::Integer(i) => self.cmp(i),
            Number::Decimal(d) => BigDecimal::from(self.clone()).compare(d),
            Number::Rational(r) => BigRational::from(self.clone()).compare(r),
        }
    }

    fn to_big_integer(&self) -> Result<BigInteger> {
        Ok(self.clone())
    }

    fn to_big_decimal(&self) -> Result<BigDecimal> {
        Ok(BigDecimal::from(self.clone()))
    }

    fn to_big_rational(&self) -> BigRational {
        BigRational::from(self.clone())
    }

    fn to_scale(&self, scale: u32, mode: RoundingMode) -> Result<BigDecimal> {
        BigDecimal::from(self.clone()).to_scale(scale, mode)
    }

    fn to_i64(&self) -> Result<i64> {
        self.value.parse::<i64>().map_err(|_| {
            MathError::arithmetic(format!(
                "{self} is out of range {} to {} and cannot be represented as an integer",
                i64::MIN,
                i64::MAX
            ))
        })
    }

    fn to_f64(&self) -> f64 {
        self.value.parse::<f64>().unwrap_or(f64::NAN)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        calculator().cmp(&self.value, &other.value)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for BigInteger {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::of(s)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_canonical(value.to_string())
                }
            }
        )*
    };
}

from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                self.$op(rhs)
            }
        }

        impl $trait for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$op(&rhs)
            }
        }
    };
}

binary_op!(Add, add, plus);
binary_op!(Sub, sub, minus);
binary_op!(Mul, mul, multiplied_by);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negated()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negated()
    }
}
