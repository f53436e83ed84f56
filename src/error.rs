//! Unified error types for the exact-math library.
//!
//! All fallible operations across the crate return [`MathError`] as their
//! error type, ensuring a consistent error handling experience for consumers.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, MathError>;

/// Every failure an arithmetic or parsing operation can produce.
///
/// Variants carry just enough context to produce a readable message.
/// Use [`MathError::kind`] to branch on the broad category instead of
/// matching individual variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// The input text does not represent a valid number.
    #[error("invalid number format: {0}")]
    NumberFormat(String),

    /// A division, reciprocal, or denominator involved zero.
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// [`RoundingMode::Unnecessary`](crate::domain::RoundingMode::Unnecessary)
    /// was requested but the result is not exact at the requested scale.
    #[error("rounding is necessary to represent the result of the operation at this scale")]
    RoundingNecessary,

    /// The result cannot be represented exactly (non-terminating decimal
    /// expansion, narrowing overflow, scale overflow).
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// A parameter is outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The process-wide calculator was already installed.
    #[error("a calculator is already configured for this process")]
    AlreadyConfigured,
}

/// Broad error categories, one per failure class of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input text did not match the numeric grammar.
    Format,
    /// Zero divisor, denominator, or reciprocal operand.
    DivisionByZero,
    /// The exact result is not representable as requested.
    Arithmetic,
    /// A parameter was outside its domain.
    InvalidArgument,
}

impl MathError {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NumberFormat(_) => ErrorKind::Format,
            Self::DivisionByZero(_) => ErrorKind::DivisionByZero,
            Self::RoundingNecessary | Self::Arithmetic(_) => ErrorKind::Arithmetic,
            Self::InvalidArgument(_) | Self::AlreadyConfigured => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::NumberFormat(message.into())
    }

    pub(crate) fn arithmetic(message: impl Into<String>) -> Self {
        Self::Arithmetic(message.into())
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
