//! Rounding policy for engine division.
//!
//! [`div_round`] runs a truncating division and then decides whether the
//! truncated quotient must move one unit away from zero. The decision
//! depends only on the discarded remainder, the operand signs and the
//! [`RoundingMode`]:
//!
//! | Mode | Increment when |
//! |------|----------------|
//! | `Unnecessary` | never; a nonzero remainder is an error |
//! | `Up` | remainder ≠ 0 |
//! | `Down` | never |
//! | `Ceiling` | remainder ≠ 0 and the result is positive |
//! | `Floor` | remainder ≠ 0 and the result is negative |
//! | `HalfUp` | 2·\|r\| ≥ \|divisor\| |
//! | `HalfDown` | 2·\|r\| > \|divisor\| |
//! | `HalfCeiling` | above half, or exactly half and positive |
//! | `HalfFloor` | above half, or exactly half and negative |
//! | `HalfEven` | above half, or exactly half and the quotient is odd |
//!
//! # Examples
//!
//! ```
//! use exact_math::domain::RoundingMode;
//! use exact_math::math::{calculator, div_round};
//!
//! let calc = calculator();
//! assert_eq!(div_round(calc, "10", "3", RoundingMode::Down).unwrap(), "3");
//! assert_eq!(div_round(calc, "10", "3", RoundingMode::Up).unwrap(), "4");
//! assert_eq!(div_round(calc, "-25", "10", RoundingMode::HalfEven).unwrap(), "-2");
//! assert!(div_round(calc, "10", "3", RoundingMode::Unnecessary).is_err());
//! ```

use core::cmp::Ordering;

use tracing::trace;

use crate::domain::RoundingMode;
use crate::error::{MathError, Result};

use super::{digits, Calculator};

/// Divides `left` by `right` with an explicit [`RoundingMode`].
///
/// Both operands must be canonical digit strings and `right` must not be
/// zero.
///
/// # Errors
///
/// Returns [`MathError::RoundingNecessary`] if `mode` is
/// [`RoundingMode::Unnecessary`] and the remainder is not zero.
pub fn div_round<C: Calculator + ?Sized>(
    calc: &C,
    left: &str,
    right: &str,
    mode: RoundingMode,
) -> Result<String> {
    let (quotient, remainder) = calc.div_qr(left, right);

    let has_discarded_fraction = remainder != digits::ZERO;
    let is_positive_or_zero = digits::is_negative(left) == digits::is_negative(right);

    // Sign of 2·|r| − |divisor|: where the discarded fraction sits relative to one half.
    let half_comparison = || {
        let doubled = calc.abs(&calc.mul(&remainder, "2"));
        calc.cmp(&doubled, &calc.abs(right))
    };

    let increment = match mode {
        RoundingMode::Unnecessary => {
            if has_discarded_fraction {
                return Err(MathError::RoundingNecessary);
            }
            false
        }
        RoundingMode::Up => has_discarded_fraction,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => has_discarded_fraction && is_positive_or_zero,
        RoundingMode::Floor => has_discarded_fraction && !is_positive_or_zero,
        RoundingMode::HalfUp => half_comparison() != Ordering::Less,
        RoundingMode::HalfDown => half_comparison() == Ordering::Greater,
        RoundingMode::HalfCeiling => match half_comparison() {
            Ordering::Greater => true,
            Ordering::Equal => is_positive_or_zero,
            Ordering::Less => false,
        },
        RoundingMode::HalfFloor => match half_comparison() {
            Ordering::Greater => true,
            Ordering::Equal => !is_positive_or_zero,
            Ordering::Less => false,
        },
        RoundingMode::HalfEven => match half_comparison() {
            Ordering::Greater => true,
            Ordering::Equal => digits::last_digit_is_odd(&quotient),
            Ordering::Less => false,
        },
    };

    if increment {
        trace!(%mode, %quotient, "rounding quotient away from zero");
        let step = if is_positive_or_zero { "1" } else { "-1" };
        return Ok(calc.add(&quotient, step));
    }
    Ok(quotient)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::NativeCalculator;

    fn round(left: &str, right: &str, mode: RoundingMode) -> String {
        let calc = NativeCalculator::new();
        let Ok(q) = div_round(&calc, left, right, mode) else {
            panic!("{left} / {right} with {mode} should round");
        };
        q
    }

    /// Expected results for 5.5, 2.5, 1.6, 1.1, 1.0, -1.0, -1.1, -1.6,
    /// -2.5, -5.5 (dividend / 10), one row per mode.
    const DIVIDENDS: [&str; 10] = ["55", "25", "16", "11", "10", "-10", "-11", "-16", "-25", "-55"];

    fn check_row(mode: RoundingMode, expected: [&str; 10]) {
        for (dividend, want) in DIVIDENDS.iter().zip(expected) {
            assert_eq!(round(dividend, "10", mode), want, "{dividend}/10 {mode}");
        }
    }

    // -- The classic rounding table -----------------------------------------

    #[test]
    fn up() {
        check_row(RoundingMode::Up, ["6", "3", "2", "2", "1", "-1", "-2", "-2", "-3", "-6"]);
    }

    #[test]
    fn down() {
        check_row(RoundingMode::Down, ["5", "2", "1", "1", "1", "-1", "-1", "-1", "-2", "-5"]);
    }

    #[test]
    fn ceiling() {
        check_row(RoundingMode::Ceiling, ["6", "3", "2", "2", "1", "-1", "-1", "-1", "-2", "-5"]);
    }

    #[test]
    fn floor() {
        check_row(RoundingMode::Floor, ["5", "2", "1", "1", "1", "-1", "-2", "-2", "-3", "-6"]);
    }

    #[test]
    fn half_up() {
        check_row(RoundingMode::HalfUp, ["6", "3", "2", "1", "1", "-1", "-1", "-2", "-3", "-6"]);
    }

    #[test]
    fn half_down() {
        check_row(RoundingMode::HalfDown, ["5", "2", "2", "1", "1", "-1", "-1", "-2", "-2", "-5"]);
    }

    #[test]
    fn half_ceiling() {
        check_row(RoundingMode::HalfCeiling, ["6", "3", "2", "1", "1", "-1", "-1", "-2", "-2", "-5"]);
    }

    #[test]
    fn half_floor() {
        check_row(RoundingMode::HalfFloor, ["5", "2", "2", "1", "1", "-1", "-1", "-2", "-3", "-6"]);
    }

    #[test]
    fn half_even() {
        check_row(RoundingMode::HalfEven, ["6", "2", "2", "1", "1", "-1", "-1", "-2", "-2", "-6"]);
    }

    // -- Unnecessary --------------------------------------------------------

    #[test]
    fn unnecessary_exact() {
        assert_eq!(round("100", "-4", RoundingMode::Unnecessary), "-25");
    }

    #[test]
    fn unnecessary_inexact_fails() {
        let calc = NativeCalculator::new();
        assert_eq!(
            div_round(&calc, "10", "3", RoundingMode::Unnecessary),
            Err(MathError::RoundingNecessary)
        );
    }

    // -- Edge cases ---------------------------------------------------------

    #[test]
    fn zero_dividend_never_rounds() {
        for mode in RoundingMode::ALL {
            assert_eq!(round("0", "-7", mode), "0");
        }
    }

    #[test]
    fn negative_divisor_positive_dividend() {
        // 7 / -2 = -3.5
        assert_eq!(round("7", "-2", RoundingMode::Ceiling), "-3");
        assert_eq!(round("7", "-2", RoundingMode::Floor), "-4");
        assert_eq!(round("7", "-2", RoundingMode::HalfEven), "-4");
        assert_eq!(round("7", "-2", RoundingMode::HalfCeiling), "-3");
    }

    #[test]
    fn half_even_ties_to_even_quotient() {
        assert_eq!(round("2500", "1000", RoundingMode::HalfEven), "2");
        assert_eq!(round("3500", "1000", RoundingMode::HalfEven), "4");
    }

    #[test]
    fn large_operands_use_long_division() {
        let q = round(
            "123456789012345678901234567890",
            "1000000000000000000000",
            RoundingMode::HalfUp,
        );
        assert_eq!(q, "123456789");
    }
}
