//! Rounding policy for divisions that discard a fraction.

use core::fmt;
use core::str::FromStr;

use crate::error::MathError;

/// Specifies how the discarded fraction of a division affects the
/// quotient.
///
/// Every scale-reducing operation in the library takes an explicit
/// `RoundingMode`. [`RoundingMode::Unnecessary`] is the default and asserts
/// that the operation is exact.
///
/// # Examples
///
/// ```
/// use exact_math::domain::{BigInteger, RoundingMode};
///
/// let a = BigInteger::from(7);
/// let b = BigInteger::from(2);
/// assert_eq!(a.divided_by(&b, RoundingMode::Down).unwrap().to_string(), "3");
/// assert_eq!(a.divided_by(&b, RoundingMode::Up).unwrap().to_string(), "4");
/// assert!(a.divided_by(&b, RoundingMode::Unnecessary).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Assert that no rounding is required; fail otherwise.
    #[default]
    Unnecessary,
    /// Round away from zero.
    Up,
    /// Round towards zero (truncate).
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
    /// Round to nearest; ties away from zero.
    HalfUp,
    /// Round to nearest; ties towards zero.
    HalfDown,
    /// Round to nearest; ties towards positive infinity.
    HalfCeiling,
    /// Round to nearest; ties towards negative infinity.
    HalfFloor,
    /// Round to nearest; ties to the even neighbour (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Unnecessary,
        Self::Up,
        Self::Down,
        Self::Ceiling,
        Self::Floor,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfCeiling,
        Self::HalfFloor,
        Self::HalfEven,
    ];

    /// Returns `true` for the five round-to-nearest modes.
    #[must_use]
    pub const fn is_half(&self) -> bool {
        matches!(
            self,
            Self::HalfUp | Self::HalfDown | Self::HalfCeiling | Self::HalfFloor | Self::HalfEven
        )
    }

    /// Returns the conventional upper-case name (`HALF_EVEN`, ...).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unnecessary => "UNNECESSARY",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Ceiling => "CEILING",
            Self::Floor => "FLOOR",
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfCeiling => "HALF_CEILING",
            Self::HalfFloor => "HALF_FLOOR",
            Self::HalfEven => "HALF_EVEN",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = MathError;

    /// Parses a mode name, case-insensitively, accepting `HALF_EVEN`,
    /// `half-even` and `HalfEven` spellings alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().replace('_', "") == normalized)
            .ok_or_else(|| MathError::invalid(format!("unknown rounding mode \"{s}\"")))
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = MathError;

    /// Maps an ordinal in declaration order onto a mode.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| MathError::invalid(format!("invalid rounding mode ordinal {value}")))
    }
}
