//! Exact number value types.
//!
//! This module contains the three immutable number kinds and the rounding
//! policy they share:
//!
//! - [`BigInteger`]: signed integer of unbounded size.
//! - [`BigDecimal`]: unscaled integer plus a non-negative scale.
//! - [`BigRational`]: numerator over a positive denominator.
//! - [`Number`]: one of the three, chosen by the literal it was parsed from.
//! - [`RoundingMode`]: how a division's discarded fraction is handled.
//!
//! Every constructor validates its input, so a value that exists is always
//! in canonical form.

mod decimal;
mod integer;
mod number;
mod rational;
mod rounding;
#[cfg(feature = "serde")]
mod serde;

pub use decimal::BigDecimal;
pub use integer::BigInteger;
pub use number::Number;
pub use rational::BigRational;
pub use rounding::RoundingMode;
