//! Helpers over canonical digit strings.
//!
//! A canonical digit string is an optional `-` followed by ASCII decimal
//! digits without a leading zero. Zero is spelled `"0"` and is never
//! signed. Every value type stores its digits in this form and every
//! [`Calculator`](super::Calculator) method consumes and produces it.

/// Canonical zero.
pub const ZERO: &str = "0";

/// Canonical one.
pub const ONE: &str = "1";

/// Most zeros a point shift or an exponent may append to a nonzero value.
pub const MAX_APPENDED_ZEROS: u64 = 1 << 20;

/// Returns `true` if the canonical string denotes a negative number.
#[inline]
#[must_use]
pub fn is_negative(value: &str) -> bool {
    value.starts_with('-')
}

/// Returns the digits of `value` without its sign.
#[inline]
#[must_use]
pub fn magnitude(value: &str) -> &str {
    value.strip_prefix('-').unwrap_or(value)
}

/// Returns `-value`, leaving zero unsigned.
#[must_use]
pub fn negate(value: &str) -> String {
    if value == ZERO {
        return ZERO.to_owned();
    }
    match value.strip_prefix('-') {
        Some(digits) => digits.to_owned(),
        None => format!("-{value}"),
    }
}

/// Builds a canonical string from a sign and a run of ASCII digits that
/// may carry leading zeros.
#[must_use]
pub fn canonicalize(negative: bool, digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return ZERO.to_owned();
    }
    if negative {
        format!("-{trimmed}")
    } else {
        trimmed.to_owned()
    }
}

/// Validates the canonical form: optional `-`, at least one digit, no
/// leading zero, no `-0`.
#[must_use]
pub fn is_canonical(value: &str) -> bool {
    if value == ZERO {
        return true;
    }
    let digits = magnitude(value);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0')
}

/// Multiplies a canonical value by `10^count` by appending zeros.
#[must_use]
pub fn append_zeros(value: &str, count: usize) -> String {
    if value == ZERO || count == 0 {
        return value.to_owned();
    }
    let mut out = String::with_capacity(value.len() + count);
    out.push_str(value);
    out.push_str(&"0".repeat(count));
    out
}

/// Like [`append_zeros`], but returns `None` instead of growing a nonzero
/// value by more than [`MAX_APPENDED_ZEROS`] digits.
#[must_use]
pub fn checked_append_zeros(value: &str, count: u64) -> Option<String> {
    if value == ZERO {
        return Some(ZERO.to_owned());
    }
    if count > MAX_APPENDED_ZEROS {
        return None;
    }
    usize::try_from(count).ok().map(|count| append_zeros(value, count))
}

/// Returns `10^exponent` as a canonical string.
#[must_use]
pub fn power_of_ten(exponent: usize) -> String {
    append_zeros(ONE, exponent)
}

/// Returns `true` if the last digit of the canonical string is odd.
#[must_use]
pub fn last_digit_is_odd(value: &str) -> bool {
    value
        .as_bytes()
        .last()
        .is_some_and(|digit| (digit - b'0') % 2 == 1)
}
