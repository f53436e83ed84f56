//! # Exact Math
//!
//! Exact arbitrary-precision arithmetic: integers, decimals and rationals
//! of unbounded size, with explicit rounding wherever a result could lose
//! digits.
//!
//! This crate provides immutable value types, a shared conversion and
//! comparison trait, and a pluggable arithmetic engine:
//!
//! - **[`BigInteger`](domain::BigInteger)**: signed integers, radix 2 to 36
//!   parsing and formatting, gcd, power.
//! - **[`BigDecimal`](domain::BigDecimal)**: unscaled integer plus scale,
//!   division at a chosen scale, exact division, point shifting.
//! - **[`BigRational`](domain::BigRational)**: fractions with a positive
//!   denominator, simplification, exact conversion to decimal.
//! - **[`RoundingMode`](domain::RoundingMode)**: ten rounding policies, from
//!   `Unnecessary` (exact or fail) to `HalfEven`.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | yes | Standard library support |
//! | `serde` | no | `Serialize` / `Deserialize` through the transport string forms |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! exact-math = "0.1"
//! ```
//!
//! ## Parse, compute and round
//!
//! ```rust
//! use exact_math::prelude::*;
//!
//! // 1. Parse literals; the kind follows the syntax
//! let price = BigDecimal::of("19.99").expect("valid decimal");
//! let quantity = BigInteger::of("3").expect("valid integer");
//!
//! // 2. Multiply exactly
//! let total = price
//!     .multiplied_by(&BigDecimal::from(quantity))
//!     .expect("scale fits");
//! assert_eq!(total.to_string(), "59.97");
//!
//! // 3. Split three ways, rounding explicitly
//! let share = total
//!     .divided_by(&BigDecimal::from(3), 2, RoundingMode::HalfEven)
//!     .expect("non-zero divisor");
//! assert_eq!(share.to_string(), "19.99");
//!
//! // 4. Compare across kinds
//! let third = BigRational::nd(1, 3).expect("non-zero denominator");
//! assert!(third.is_less_than(&Number::of("0.34").expect("valid")));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  Number::of / BigDecimal::of / RoundingMode
//! └──────┬───────┘
//!        │ parse::Literal (tokenizer)
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  BigInteger, BigDecimal, BigRational, Number
//! └──────┬───────┘
//!        │ canonical digit strings
//!        ▼
//! ┌──────────────┐
//! │  Calculator   │  installed once; NativeCalculator by default
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types and [`RoundingMode`](domain::RoundingMode) |
//! | [`traits`] | [`Numeric`](traits::Numeric): sign, comparison and conversion |
//! | [`math`] | [`Calculator`](math::Calculator) engine, digit helpers, rounding policy |
//! | [`config`] | [`CalculatorConfig`](config::CalculatorConfig) limits for the native engine |
//! | [`parse`] | [`Literal`](parse::Literal) tokenizer for numeric text |
//! | [`error`] | [`MathError`](error::MathError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod parse;
pub mod prelude;
pub mod traits;
