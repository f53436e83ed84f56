//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use exact_math::prelude::*;
//!
//! let total = BigDecimal::of("19.99").unwrap().plus(&BigDecimal::of("0.01").unwrap());
//! assert!(total.is_equal_to(&Number::from(20)));
//! ```

pub use crate::domain::{BigDecimal, BigInteger, BigRational, Number, RoundingMode};

pub use crate::traits::Numeric;

pub use crate::error::{ErrorKind, MathError, Result};
