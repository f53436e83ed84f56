//! Numeric literal tokenizer.

use crate::error::{MathError, Result};

/// A syntactically valid numeric literal, borrowed from the input.
///
/// Digit runs are kept exactly as written, leading zeros included; the
/// value constructors canonicalize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
    /// `[+-]?[0-9]+`
    Integer {
        /// A leading `-` was present.
        negative: bool,
        /// The digits.
        digits: &'a str,
    },
    /// `[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?` with a fraction or an
    /// exponent present.
    Decimal {
        /// A leading `-` was present.
        negative: bool,
        /// Digits before the point.
        integral: &'a str,
        /// Digits after the point; empty when there is no point.
        fraction: &'a str,
        /// Power of ten; zero when there is no exponent.
        exponent: i64,
    },
    /// `[+-]?[0-9]+/[0-9]+`
    Rational {
        /// A leading `-` was present.
        negative: bool,
        /// Digits before the slash.
        numerator: &'a str,
        /// Digits after the slash.
        denominator: &'a str,
    },
}

impl<'a> Literal<'a> {
    /// Splits `text` into a literal.
    ///
    /// Whitespace is not skipped anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::NumberFormat`] if `text` does not match the
    /// grammar or the exponent does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_math::parse::Literal;
    ///
    /// let Ok(Literal::Decimal { integral, fraction, exponent, .. }) = Literal::tokenize("-1.50e3")
    /// else {
    ///     panic!("decimal literal");
    /// };
    /// assert_eq!((integral, fraction, exponent), ("1", "50", 3));
    /// assert!(Literal::tokenize(" 1").is_err());
    /// ```
    pub fn tokenize(text: &'a str) -> Result<Self> {
        let invalid = || MathError::format(format!("\"{text}\" does not represent a valid number"));

        let (negative, rest) = split_sign(text);
        let (integral, rest) = split_digits(rest);
        if integral.is_empty() {
            return Err(invalid());
        }
        if rest.is_empty() {
            return Ok(Self::Integer {
                negative,
                digits: integral,
            });
        }

        if let Some(denominator) = rest.strip_prefix('/') {
            let (denominator, tail) = split_digits(denominator);
            if denominator.is_empty() || !tail.is_empty() {
                return Err(invalid());
            }
            return Ok(Self::Rational {
                negative,
                numerator: integral,
                denominator,
            });
        }

        let (fraction, rest) = match rest.strip_prefix('.') {
            Some(after_point) => {
                let (fraction, tail) = split_digits(after_point);
                if fraction.is_empty() {
                    return Err(invalid());
                }
                (fraction, tail)
            }
            None => ("", rest),
        };

        let exponent = match rest.strip_prefix(['e', 'E']) {
            Some(power) => {
                let (exponent_negative, magnitude) = split_sign(power);
                let (digits, tail) = split_digits(magnitude);
                if digits.is_empty() || !tail.is_empty() {
                    return Err(invalid());
                }
                parse_exponent(exponent_negative, digits).ok_or_else(|| {
                    MathError::format(format!("the exponent of \"{text}\" is too large"))
                })?
            }
            None if rest.is_empty() => 0,
            None => return Err(invalid()),
        };

        Ok(Self::Decimal {
            negative,
            integral,
            fraction,
            exponent,
        })
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

fn parse_exponent(negative: bool, digits: &str) -> Option<i64> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(0);
    }
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}
