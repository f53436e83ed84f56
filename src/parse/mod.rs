//! Text to number parsing.
//!
//! [`Literal::tokenize`] recognises the three literal shapes accepted by
//! [`Number::of`](crate::domain::Number::of):
//!
//! | Shape | Grammar | Example |
//! |-------|---------|---------|
//! | Integer | `[+-]?[0-9]+` | `-0042` |
//! | Decimal | `[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?` | `1.5e-3` |
//! | Rational | `[+-]?[0-9]+/[0-9]+` | `22/7` |
//!
//! Tokenizing is purely syntactic. Building a value from the pieces, and
//! the errors that depend on the value such as a zero denominator, happen
//! in the [`domain`](crate::domain) constructors.

mod literal;

pub use literal::Literal;
