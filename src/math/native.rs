//! Schoolbook implementation of the [`Calculator`] trait.
//!
//! [`NativeCalculator`] works directly on the ASCII digits of canonical
//! strings. When both operands are short enough to fit a machine word it
//! delegates to `i64` arithmetic; otherwise it falls back to the
//! digit-by-digit algorithms taught in school:
//!
//! | Operation | Algorithm | Fast path (64-bit) |
//! |-----------|-----------|--------------------|
//! | add / sub | carry propagation | ≤ 18 digits |
//! | mul | long multiplication | ≤ 9 digits |
//! | div_qr | long division over a growing window | ≤ 18 digits |
//! | pow | square-and-multiply | via `mul` |
//!
//! The fast-path limits come from a [`CalculatorConfig`].

use core::cmp::Ordering;

use tracing::trace;

use crate::config::CalculatorConfig;

use super::digits;
use super::Calculator;

/// Digit-string calculator using schoolbook algorithms.
///
/// # Examples
///
/// ```
/// use exact_math::math::{Calculator, NativeCalculator};
///
/// let calc = NativeCalculator::new();
/// assert_eq!(calc.mul("123456789123456789", "-2"), "-246913578246913578");
/// assert_eq!(calc.div_qr("-7", "2"), ("-3".to_owned(), "-1".to_owned()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCalculator {
    config: CalculatorConfig,
}

impl Default for NativeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeCalculator {
    /// Creates a calculator tuned for the target's pointer width.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CalculatorConfig::native())
    }

    /// Creates a calculator with explicit fast-path limits.
    #[must_use]
    pub const fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> CalculatorConfig {
        self.config
    }

    /// Parses both operands as `i64` when both fit the given digit limit.
    fn small_operands(left: &str, right: &str, limit: usize) -> Option<(i64, i64)> {
        if digits::magnitude(left).len() > limit || digits::magnitude(right).len() > limit {
            return None;
        }
        Some((left.parse().ok()?, right.parse().ok()?))
    }
}

impl Calculator for NativeCalculator {
    fn add(&self, left: &str, right: &str) -> String {
        if left == digits::ZERO {
            return right.to_owned();
        }
        if right == digits::ZERO {
            return left.to_owned();
        }
        if let Some((a, b)) = Self::small_operands(left, right, self.config.add_div_digits()) {
            return (a + b).to_string();
        }

        let (left_neg, left_dig) = split(left);
        let (right_neg, right_dig) = split(right);
        trace!(left = left_dig.len(), right = right_dig.len(), "schoolbook addition");

        if left_neg == right_neg {
            return with_sign(left_neg, add_magnitudes(left_dig, right_dig));
        }
        match compare_magnitudes(left_dig, right_dig) {
            Ordering::Equal => digits::ZERO.to_owned(),
            Ordering::Greater => with_sign(left_neg, sub_magnitudes(left_dig, right_dig)),
            Ordering::Less => with_sign(right_neg, sub_magnitudes(right_dig, left_dig)),
        }
    }

    fn sub(&self, left: &str, right: &str) -> String {
        self.add(left, &digits::negate(right))
    }

    fn mul(&self, left: &str, right: &str) -> String {
        if left == digits::ZERO || right == digits::ZERO {
            return digits::ZERO.to_owned();
        }
        match (left, right) {
            ("1", other) | (other, "1") => return other.to_owned(),
            ("-1", other) | (other, "-1") => return digits::negate(other),
            _ => {}
        }
        if let Some((a, b)) = Self::small_operands(left, right, self.config.mul_digits()) {
            return (a * b).to_string();
        }

        let (left_neg, left_dig) = split(left);
        let (right_neg, right_dig) = split(right);
        trace!(left = left_dig.len(), right = right_dig.len(), "schoolbook multiplication");

        with_sign(left_neg != right_neg, mul_magnitudes(left_dig, right_dig))
    }

    fn div_qr(&self, left: &str, right: &str) -> (String, String) {
        if left == digits::ZERO {
            return (digits::ZERO.to_owned(), digits::ZERO.to_owned());
        }
        if left == right {
            return (digits::ONE.to_owned(), digits::ZERO.to_owned());
        }
        if right == "1" {
            return (left.to_owned(), digits::ZERO.to_owned());
        }
        if right == "-1" {
            return (digits::negate(left), digits::ZERO.to_owned());
        }
        if let Some((a, b)) = Self::small_operands(left, right, self.config.add_div_digits()) {
            // Both truncate toward zero; the remainder takes the dividend's sign.
            return ((a / b).to_string(), (a % b).to_string());
        }

        let (left_neg, left_dig) = split(left);
        let (right_neg, right_dig) = split(right);
        trace!(left = left_dig.len(), right = right_dig.len(), "long division");

        let (quotient, remainder) = div_magnitudes(left_dig, right_dig);
        (
            with_sign(left_neg != right_neg, quotient),
            with_sign(left_neg, remainder),
        )
    }

    fn pow(&self, base: &str, exponent: u32) -> String {
        let mut result = digits::ONE.to_owned();
        let mut square = base.to_owned();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = self.mul(&result, &square);
            }
            remaining >>= 1;
            if remaining > 0 {
                square = self.mul(&square, &square);
            }
        }
        result
    }

    fn cmp(&self, left: &str, right: &str) -> Ordering {
        let (left_neg, left_dig) = split(left);
        let (right_neg, right_dig) = split(right);
        match (left_neg, right_neg) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => compare_magnitudes(left_dig, right_dig),
            (true, true) => compare_magnitudes(right_dig, left_dig),
        }
    }
}

// ---------------------------------------------------------------------------
// Magnitude algorithms (unsigned ASCII digits, most significant first)
// ---------------------------------------------------------------------------

fn split(value: &str) -> (bool, &[u8]) {
    (digits::is_negative(value), digits::magnitude(value).as_bytes())
}

fn with_sign(negative: bool, magnitude: Vec<u8>) -> String {
    let text: String = magnitude.into_iter().map(char::from).collect();
    if negative && text != digits::ZERO {
        format!("-{text}")
    } else {
        text
    }
}

fn compare_magnitudes(left: &[u8], right: &[u8]) -> Ordering {
    // No leading zeros, so a longer run of digits is a larger number.
    left.len()
        .cmp(&right.len())
        .then_with(|| left.cmp(right))
}

fn add_magnitudes(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(left.len().max(right.len()) + 1);
    let mut lhs = left.iter().rev();
    let mut rhs = right.iter().rev();
    let mut carry = 0u8;
    loop {
        let (x, y) = (lhs.next(), rhs.next());
        if x.is_none() && y.is_none() {
            break;
        }
        let sum = x.map_or(0, |d| d - b'0') + y.map_or(0, |d| d - b'0') + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }
    if carry > 0 {
        out.push(b'0' + carry);
    }
    out.reverse();
    out
}

/// Subtracts `right` from `left`; requires `left >= right`.
fn sub_magnitudes(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(left.len());
    let mut rhs = right.iter().rev();
    let mut borrow = 0u8;
    for &x in left.iter().rev() {
        let subtrahend = rhs.next().map_or(0, |d| d - b'0') + borrow;
        let minuend = x - b'0';
        if minuend < subtrahend {
            out.push(b'0' + minuend + 10 - subtrahend);
            borrow = 1;
        } else {
            out.push(b'0' + minuend - subtrahend);
            borrow = 0;
        }
    }
    while out.len() > 1 && out.last() == Some(&b'0') {
        out.pop();
    }
    out.reverse();
    out
}

fn mul_magnitudes(left: &[u8], right: &[u8]) -> Vec<u8> {
    // Little-endian accumulator, one decimal digit per cell.
    let mut acc = vec![0u32; left.len() + right.len()];
    for (i, &x) in left.iter().rev().enumerate() {
        let x = u32::from(x - b'0');
        if x == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (j, &y) in right.iter().rev().enumerate() {
            let cell = acc[i + j] + x * u32::from(y - b'0') + carry;
            acc[i + j] = cell % 10;
            carry = cell / 10;
        }
        let mut k = i + right.len();
        while carry > 0 {
            let cell = acc[k] + carry;
            acc[k] = cell % 10;
            carry = cell / 10;
            k += 1;
        }
    }
    while acc.len() > 1 && acc.last() == Some(&0) {
        acc.pop();
    }
    acc.iter()
        .rev()
        .map(|&d| b'0' + u8::try_from(d).unwrap_or(0))
        .collect()
}

/// Long division: brings down one dividend digit at a time into a window
/// and counts how many times the divisor fits.
fn div_magnitudes(left: &[u8], right: &[u8]) -> (Vec<u8>, Vec<u8>) {
    if compare_magnitudes(left, right) == Ordering::Less {
        return (vec![b'0'], left.to_vec());
    }

    let mut quotient = Vec::with_capacity(left.len());
    let mut window: Vec<u8> = Vec::with_capacity(right.len() + 1);
    for &digit in left {
        if window == [b'0'] {
            window.clear();
        }
        window.push(digit);
        let mut count = 0u8;
        while compare_magnitudes(&window, right) != Ordering::Less {
            window = sub_magnitudes(&window, right);
            count += 1;
        }
        quotient.push(b'0' + count);
    }

    let leading = quotient
        .iter()
        .take_while(|&&d| d == b'0')
        .count()
        .min(quotient.len() - 1);
    quotient.drain(..leading);
    if window.is_empty() {
        window.push(b'0');
    }
    (quotient, window)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn native() -> NativeCalculator {
        NativeCalculator::new()
    }

    fn schoolbook() -> NativeCalculator {
        NativeCalculator::with_config(CalculatorConfig::schoolbook_only())
    }

    /// Runs the same check on both the fast-path and the schoolbook engine.
    fn both(check: impl Fn(&NativeCalculator)) {
        check(&native());
        check(&schoolbook());
    }

    // -- add / sub ----------------------------------------------------------

    #[test]
    fn add_small() {
        both(|c| {
            assert_eq!(c.add("2", "3"), "5");
            assert_eq!(c.add("-2", "3"), "1");
            assert_eq!(c.add("2", "-3"), "-1");
            assert_eq!(c.add("-2", "-3"), "-5");
            assert_eq!(c.add("5", "-5"), "0");
            assert_eq!(c.add("0", "-5"), "-5");
        });
    }

    #[test]
    fn add_carries_across_all_digits() {
        both(|c| {
            assert_eq!(c.add("999999999999999999999", "1"), "1000000000000000000000");
            assert_eq!(c.add("-999999999999999999999", "-1"), "-1000000000000000000000");
        });
    }

    #[test]
    fn sub_borrows_and_strips_leading_zeros() {
        both(|c| {
            assert_eq!(c.sub("1000000000000000000000", "1"), "999999999999999999999");
            assert_eq!(c.sub("1000000000000000000001", "1000000000000000000000"), "1");
            assert_eq!(c.sub("1", "1000000000000000000000"), "-999999999999999999999");
            assert_eq!(c.sub("-123456789012345678901", "-123456789012345678901"), "0");
        });
    }

    #[test]
    fn add_mixed_lengths_beyond_word() {
        assert_eq!(
            native().add("123456789012345678901234567890", "-987654321"),
            "123456789012345678900246913569"
        );
    }

    // -- mul ----------------------------------------------------------------

    #[test]
    fn mul_identities() {
        both(|c| {
            assert_eq!(c.mul("0", "-123"), "0");
            assert_eq!(c.mul("1", "-123"), "-123");
            assert_eq!(c.mul("-123", "-1"), "123");
        });
    }

    #[test]
    fn mul_signs() {
        both(|c| {
            assert_eq!(c.mul("12", "-12"), "-144");
            assert_eq!(c.mul("-12", "-12"), "144");
        });
    }

    #[test]
    fn mul_large() {
        both(|c| {
            assert_eq!(
                c.mul("123456789012345678901234567890", "987654321098765432109876543210"),
                "121932631137021795226185032733622923332237463801111263526900"
            );
        });
    }

    #[test]
    fn mul_with_internal_zeros() {
        both(|c| {
            assert_eq!(c.mul("10000000001", "10000000001"), "100000000020000000001");
        });
    }

    // -- div_qr -------------------------------------------------------------

    #[test]
    fn div_truncates_toward_zero() {
        both(|c| {
            assert_eq!(c.div_qr("7", "2"), ("3".to_owned(), "1".to_owned()));
            assert_eq!(c.div_qr("-7", "2"), ("-3".to_owned(), "-1".to_owned()));
            assert_eq!(c.div_qr("7", "-2"), ("-3".to_owned(), "1".to_owned()));
            assert_eq!(c.div_qr("-7", "-2"), ("3".to_owned(), "-1".to_owned()));
        });
    }

    #[test]
    fn div_shortcuts() {
        both(|c| {
            assert_eq!(c.div_qr("0", "9"), ("0".to_owned(), "0".to_owned()));
            assert_eq!(c.div_qr("-9", "-9"), ("1".to_owned(), "0".to_owned()));
            assert_eq!(c.div_qr("-9", "1"), ("-9".to_owned(), "0".to_owned()));
            assert_eq!(c.div_qr("-9", "-1"), ("9".to_owned(), "0".to_owned()));
        });
    }

    #[test]
    fn div_smaller_dividend() {
        both(|c| {
            assert_eq!(c.div_qr("5", "123"), ("0".to_owned(), "5".to_owned()));
            assert_eq!(c.div_qr("-5", "123"), ("0".to_owned(), "-5".to_owned()));
        });
    }

    #[test]
    fn div_large() {
        both(|c| {
            let (q, r) = c.div_qr(
                "121932631137021795226185032733622923332237463801111263526901",
                "987654321098765432109876543210",
            );
            assert_eq!(q, "123456789012345678901234567890");
            assert_eq!(r, "1");
        });
    }

    #[test]
    fn div_quotient_with_inner_zeros() {
        both(|c| {
            assert_eq!(
                c.div_qr("100000000000000000000000000005", "5"),
                ("20000000000000000000000000001".to_owned(), "0".to_owned())
            );
        });
    }

    #[test]
    fn div_q_and_div_r_agree_with_div_qr() {
        let c = schoolbook();
        let (q, r) = c.div_qr("-1000000000000000000007", "13");
        assert_eq!(c.div_q("-1000000000000000000007", "13"), q);
        assert_eq!(c.div_r("-1000000000000000000007", "13"), r);
        assert_eq!(c.add(&c.mul(&q, "13"), &r), "-1000000000000000000007");
    }

    // -- pow ----------------------------------------------------------------

    #[test]
    fn pow_small() {
        both(|c| {
            assert_eq!(c.pow("7", 0), "1");
            assert_eq!(c.pow("7", 1), "7");
            assert_eq!(c.pow("-2", 3), "-8");
            assert_eq!(c.pow("-2", 4), "16");
            assert_eq!(c.pow("0", 5), "0");
        });
    }

    #[test]
    fn pow_large() {
        assert_eq!(
            native().pow("2", 128),
            "340282366920938463463374607431768211456"
        );
        assert_eq!(native().pow("10", 30), digits::power_of_ten(30));
    }

    // -- cmp / gcd / neg / abs ----------------------------------------------

    #[test]
    fn cmp_orders_by_sign_then_length_then_digits() {
        let c = native();
        assert_eq!(c.cmp("-5", "3"), Ordering::Less);
        assert_eq!(c.cmp("3", "-5"), Ordering::Greater);
        assert_eq!(c.cmp("100", "99"), Ordering::Greater);
        assert_eq!(c.cmp("-100", "-99"), Ordering::Less);
        assert_eq!(c.cmp("123", "124"), Ordering::Less);
        assert_eq!(c.cmp("0", "0"), Ordering::Equal);
    }

    #[test]
    fn gcd_cases() {
        both(|c| {
            assert_eq!(c.gcd("7", "0"), "7");
            assert_eq!(c.gcd("0", "-7"), "7");
            assert_eq!(c.gcd("0", "0"), "0");
            assert_eq!(c.gcd("-12", "18"), "6");
            assert_eq!(c.gcd("17", "5"), "1");
        });
    }

    #[test]
    fn neg_and_abs() {
        let c = native();
        assert_eq!(c.neg("0"), "0");
        assert_eq!(c.neg("5"), "-5");
        assert_eq!(c.abs("-5"), "5");
        assert_eq!(c.abs("5"), "5");
    }

    #[test]
    fn config_is_exposed() {
        assert_eq!(schoolbook().config(), CalculatorConfig::schoolbook_only());
        assert_eq!(NativeCalculator::default(), native());
    }
}
