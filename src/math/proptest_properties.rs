//! Property-based tests using `proptest` for arithmetic invariants.
//!
//! Covers six properties:
//!
//! 1. **Engine agreement**: the native engine, with and without its
//!    machine-word fast path, matches `i128` arithmetic.
//! 2. **Division identity**: `a = b × q + r` with `r` signed like `a`.
//! 3. **Rounding monotonicity**: `|Up| ≥ |Down|`, equal iff exact.
//! 4. **gcd**: non-negative, symmetric, divides both operands.
//! 5. **Canonical form**: every result is a canonical digit string.
//! 6. **Literal round trip**: `of(s).to_string()` is value-equal to `s`,
//!    with or without an exponent.

use core::cmp::Ordering;

use proptest::prelude::*;

use super::{digits, div_round, Calculator, NativeCalculator};
use crate::config::CalculatorConfig;
use crate::domain::{BigDecimal, Number, RoundingMode};
use crate::traits::Numeric;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn engines() -> [NativeCalculator; 2] {
    [
        NativeCalculator::new(),
        NativeCalculator::with_config(CalculatorConfig::schoolbook_only()),
    ]
}

fn is_nonzero(value: &str) -> bool {
    value != digits::ZERO
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Canonical digit strings of up to 60 digits.
fn big_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), "[0-9]{1,60}").prop_map(|(negative, raw)| digits::canonicalize(negative, &raw))
}

/// Nonzero canonical digit strings of up to 30 digits.
fn big_nonzero_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), "[1-9][0-9]{0,29}").prop_map(|(negative, raw)| digits::canonicalize(negative, &raw))
}

/// Decimal literals with optional sign, leading zeros and fraction.
fn decimal_literal_strategy() -> impl Strategy<Value = String> {
    ("[+-]?", "[0-9]{1,25}", proptest::option::of("[0-9]{1,25}")).prop_map(
        |(sign, integral, fraction)| match fraction {
            Some(fraction) => format!("{sign}{integral}.{fraction}"),
            None => format!("{sign}{integral}"),
        },
    )
}

/// Decimal literals that may also carry an exponent such as `e-3`.
fn scientific_literal_strategy() -> impl Strategy<Value = String> {
    (
        decimal_literal_strategy(),
        proptest::option::of("[eE][+-]?[0-9]{1,3}"),
    )
        .prop_map(|(mantissa, exponent)| format!("{mantissa}{}", exponent.unwrap_or_default()))
}

fn mode_strategy() -> impl Strategy<Value = RoundingMode> {
    proptest::sample::select(RoundingMode::ALL.to_vec())
}

// ---------------------------------------------------------------------------
// Property 1: Engine agreement with i128
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_engine_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        let (sa, sb) = (a.to_string(), b.to_string());
        let (wa, wb) = (i128::from(a), i128::from(b));
        for calc in engines() {
            prop_assert_eq!(calc.add(&sa, &sb), (wa + wb).to_string());
            prop_assert_eq!(calc.sub(&sa, &sb), (wa - wb).to_string());
            prop_assert_eq!(calc.mul(&sa, &sb), (wa * wb).to_string());
            prop_assert_eq!(calc.cmp(&sa, &sb), a.cmp(&b));
            if b != 0 {
                let (q, r) = calc.div_qr(&sa, &sb);
                prop_assert_eq!(q, (wa / wb).to_string());
                prop_assert_eq!(r, (wa % wb).to_string());
            }
        }
    }

    #[test]
    fn prop_pow_matches_i128(base in -1_000i64..=1_000, exponent in 0u32..=12) {
        let expected = i128::from(base).pow(exponent).to_string();
        for calc in engines() {
            prop_assert_eq!(calc.pow(&base.to_string(), exponent), expected.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Division identity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_division_identity(a in big_strategy(), b in big_nonzero_strategy()) {
        for calc in engines() {
            let (q, r) = calc.div_qr(&a, &b);
            let rebuilt = calc.add(&calc.mul(&b, &q), &r);
            prop_assert_eq!(&rebuilt, &a);
            prop_assert!(
                r == digits::ZERO || digits::is_negative(&r) == digits::is_negative(&a),
                "remainder {} must carry the sign of {}", r, a
            );
            prop_assert_eq!(
                calc.cmp(&calc.abs(&r), &calc.abs(&b)),
                Ordering::Less,
                "|{}| must be below |{}|", r, b
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Rounding monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_up_dominates_down(a in big_strategy(), b in big_nonzero_strategy()) {
        let calc = NativeCalculator::new();
        let Ok(up) = div_round(&calc, &a, &b, RoundingMode::Up) else {
            panic!("Up never fails");
        };
        let Ok(down) = div_round(&calc, &a, &b, RoundingMode::Down) else {
            panic!("Down never fails");
        };
        let exact = calc.div_r(&a, &b) == digits::ZERO;
        let order = calc.cmp(&calc.abs(&up), &calc.abs(&down));
        if exact {
            prop_assert_eq!(order, Ordering::Equal);
        } else {
            prop_assert_eq!(order, Ordering::Greater);
            prop_assert_eq!(calc.abs(&calc.sub(&up, &down)), digits::ONE);
        }
    }

    #[test]
    fn prop_every_mode_lands_between_floor_and_ceiling(
        a in big_strategy(),
        b in big_nonzero_strategy(),
        mode in mode_strategy(),
    ) {
        let calc = NativeCalculator::new();
        let Ok(floor) = div_round(&calc, &a, &b, RoundingMode::Floor) else {
            panic!("Floor never fails");
        };
        let Ok(ceiling) = div_round(&calc, &a, &b, RoundingMode::Ceiling) else {
            panic!("Ceiling never fails");
        };
        match div_round(&calc, &a, &b, mode) {
            Ok(q) => {
                prop_assert_ne!(calc.cmp(&q, &floor), Ordering::Less);
                prop_assert_ne!(calc.cmp(&q, &ceiling), Ordering::Greater);
            }
            Err(_) => {
                prop_assert_eq!(mode, RoundingMode::Unnecessary);
                prop_assert_ne!(floor, ceiling);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: gcd
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_gcd_divides_both(a in big_strategy(), b in big_strategy()) {
        let calc = NativeCalculator::new();
        let g = calc.gcd(&a, &b);
        prop_assert!(!digits::is_negative(&g));
        prop_assert_eq!(&g, &calc.gcd(&b, &a));
        if is_nonzero(&g) {
            prop_assert_eq!(calc.div_r(&a, &g), digits::ZERO);
            prop_assert_eq!(calc.div_r(&b, &g), digits::ZERO);
        } else {
            prop_assert_eq!(&a, digits::ZERO);
            prop_assert_eq!(&b, digits::ZERO);
        }
    }

    #[test]
    fn prop_gcd_with_zero_is_magnitude(a in big_strategy()) {
        let calc = NativeCalculator::new();
        prop_assert_eq!(calc.gcd(&a, digits::ZERO), calc.abs(&a));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Canonical form
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_results_are_canonical(a in big_strategy(), b in big_nonzero_strategy()) {
        for calc in engines() {
            let (q, r) = calc.div_qr(&a, &b);
            for result in [
                calc.add(&a, &b),
                calc.sub(&a, &a),
                calc.mul(&a, &b),
                calc.neg(&a),
                q,
                r,
                calc.pow(&b, 3),
            ] {
                prop_assert!(digits::is_canonical(&result), "{} is not canonical", result);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Decimal string round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_decimal_round_trip(text in decimal_literal_strategy()) {
        let Ok(parsed) = BigDecimal::of(&text) else {
            panic!("{text} is a valid decimal");
        };
        let printed = parsed.to_string();
        let Ok(reparsed) = BigDecimal::of(&printed) else {
            panic!("{printed} is a valid decimal");
        };
        prop_assert_eq!(&reparsed, &parsed);
        prop_assert_eq!(parsed.scale() as usize, text.split_once('.').map_or(0, |(_, f)| f.len()));
        prop_assert!(parsed.is_equal_to(&Number::from(reparsed)));
    }

    #[test]
    fn prop_scientific_round_trip_is_value_equal(text in scientific_literal_strategy()) {
        let Ok(parsed) = Number::of(&text) else {
            panic!("{text} is a valid number");
        };
        let printed = parsed.to_string();
        let Ok(reparsed) = Number::of(&printed) else {
            panic!("{printed} is a valid number");
        };
        prop_assert!(reparsed.is_equal_to(&parsed), "{} -> {}", text, printed);
        prop_assert_eq!(reparsed.to_string(), printed);
    }
}
