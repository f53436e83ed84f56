//! Exact arithmetic tour.
//!
//! Demonstrates parsing each number kind, dividing with explicit rounding
//! modes, exact decimal division, rational accumulation, and radix
//! conversion.
//!
//! # Run
//!
//! ```bash
//! cargo run --example basic
//! ```

use exact_math::domain::{BigDecimal, BigInteger, BigRational, Number, RoundingMode};
use exact_math::traits::Numeric;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Exact arithmetic ===\n");

    // ── 1. Parse literals; the kind follows the syntax ──────────────────
    for text in ["-0042", "1.250", "6.02e23", "22/7"] {
        let n = Number::of(text)?;
        let kind = match n {
            Number::Integer(_) => "integer",
            Number::Decimal(_) => "decimal",
            Number::Rational(_) => "rational",
        };
        println!("{text:>8} -> {n} ({kind})");
    }

    // ── 2. One division, every rounding mode ────────────────────────────
    let dividend = BigDecimal::of("-2.5")?;
    println!("\n{dividend} rounded to scale 0:");
    for mode in RoundingMode::ALL {
        match dividend.to_scale(0, mode) {
            Ok(q) => println!("  {mode:<12} {q}"),
            Err(err) => println!("  {mode:<12} error: {err}"),
        }
    }

    // ── 3. Exact decimal division ───────────────────────────────────────
    let thousandth = BigDecimal::of_unscaled_value(1, 3)?;
    let eighth = thousandth.exactly_divided_by(&BigDecimal::from(8))?;
    println!("\n{thousandth} / 8 = {eighth}");
    if let Err(err) = BigDecimal::one().exactly_divided_by(&BigDecimal::from(3)) {
        println!("1 / 3 = {err}");
    }

    // ── 4. Rationals stay exact until you ask for digits ────────────────
    let mut harmonic = BigRational::zero();
    for d in 1..=10 {
        harmonic = harmonic.plus(&BigRational::nd(1, d)?).simplified();
    }
    println!("\nH(10) = {harmonic}");
    println!("      ≈ {}", harmonic.to_scale(20, RoundingMode::HalfEven)?);

    // ── 5. Large integers and radix conversion ──────────────────────────
    let big = BigInteger::from(2).power(128)?;
    println!("\n2^128        = {big}");
    println!("2^128 base16 = {}", big.to_string_radix(16)?);
    let parsed = BigInteger::from_str_radix("ZyXwVuTsRqPoNmLkJiHgFeDcBa9876543210", 36)?;
    println!("base36 value = {parsed}");
    println!("gcd(2^128, 6^40) = {}", big.gcd(&BigInteger::from(6).power(40)?));

    Ok(())
}
