//! Fast-path limits for the native calculator.

use crate::error::{MathError, Result};

/// Largest operand length for which `i64` addition and division are exact.
const MAX_ADD_DIV_DIGITS: usize = 18;

/// Largest operand length for which an `i64` product cannot overflow.
const MAX_MUL_DIGITS: usize = 9;

/// Configuration for a [`NativeCalculator`](crate::math::NativeCalculator).
///
/// The native calculator delegates to machine arithmetic when both
/// operands have at most `add_div_digits` digits (addition, subtraction,
/// division) or `mul_digits` digits (multiplication). Anything longer
/// runs the digit-by-digit algorithms.
///
/// # Validation
///
/// - `add_div_digits` must be at most 18: the sum of two 18-digit numbers
///   still fits an `i64`.
/// - `mul_digits` must be at most 9: the product of two 9-digit numbers
///   still fits an `i64`.
///
/// # Examples
///
/// ```
/// use exact_math::config::CalculatorConfig;
///
/// let config = CalculatorConfig::new(9, 4).expect("valid limits");
/// assert_eq!(config, CalculatorConfig::for_pointer_width(32));
/// assert!(CalculatorConfig::new(19, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalculatorConfig {
    add_div_digits: usize,
    mul_digits: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::native()
    }
}

impl CalculatorConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if either limit exceeds what
    /// an `i64` can hold without overflow.
    pub fn new(add_div_digits: usize, mul_digits: usize) -> Result<Self> {
        let config = Self {
            add_div_digits,
            mul_digits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Limits matching a machine word of `bits` bits: 18/9 for 64-bit,
    /// 9/4 for 32-bit and 4/2 for anything narrower.
    #[must_use]
    pub const fn for_pointer_width(bits: u32) -> Self {
        let (add_div_digits, mul_digits) = if bits >= 64 {
            (MAX_ADD_DIV_DIGITS, MAX_MUL_DIGITS)
        } else if bits >= 32 {
            (9, 4)
        } else {
            (4, 2)
        };
        Self {
            add_div_digits,
            mul_digits,
        }
    }

    /// Limits for the pointer width of the compilation target.
    #[must_use]
    pub const fn native() -> Self {
        Self::for_pointer_width(usize::BITS)
    }

    /// Disables every fast path so all work goes through the schoolbook
    /// algorithms.
    #[must_use]
    pub const fn schoolbook_only() -> Self {
        Self {
            add_div_digits: 0,
            mul_digits: 0,
        }
    }

    /// Validates both limits.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidArgument`] if a limit is too large.
    pub fn validate(&self) -> Result<()> {
        if self.add_div_digits > MAX_ADD_DIV_DIGITS {
            return Err(MathError::invalid(format!(
                "add/div fast path supports at most {MAX_ADD_DIV_DIGITS} digits, got {}",
                self.add_div_digits
            )));
        }
        if self.mul_digits > MAX_MUL_DIGITS {
            return Err(MathError::invalid(format!(
                "mul fast path supports at most {MAX_MUL_DIGITS} digits, got {}",
                self.mul_digits
            )));
        }
        Ok(())
    }

    /// Operand length limit for the add, sub and div fast paths.
    #[must_use]
    pub const fn add_div_digits(&self) -> usize {
        self.add_div_digits
    }

    /// Operand length limit for the mul fast path.
    #[must_use]
    pub const fn mul_digits(&self) -> usize {
        self.mul_digits
    }
}
