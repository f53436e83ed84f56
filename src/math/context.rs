//! Process-wide calculator selection.
//!
//! The value types reach the engine through [`calculator`]. The backend is
//! chosen once: either explicitly with [`install`] before the first
//! arithmetic operation, or implicitly when [`calculator`] is first called,
//! which selects a [`NativeCalculator`] tuned for the target.

use std::sync::OnceLock;

use tracing::debug;

use crate::error::{MathError, Result};

use super::{Calculator, NativeCalculator};

static CALCULATOR: OnceLock<Box<dyn Calculator>> = OnceLock::new();

/// Installs `calculator` as the engine for the rest of the process.
///
/// # Errors
///
/// Returns [`MathError::AlreadyConfigured`] if an engine is already in
/// place, either from an earlier `install` or because arithmetic already
/// ran with the default engine. The existing engine stays active.
///
/// # Examples
///
/// ```
/// use exact_math::config::CalculatorConfig;
/// use exact_math::math::{self, NativeCalculator};
///
/// let engine = NativeCalculator::with_config(CalculatorConfig::for_pointer_width(32));
/// // The first call wins; any later call reports the conflict.
/// let _ = math::install(engine);
/// assert!(math::install(NativeCalculator::new()).is_err());
/// ```
pub fn install<C: Calculator + 'static>(calculator: C) -> Result<()> {
    debug!(?calculator, "installing calculator");
    CALCULATOR
        .set(Box::new(calculator))
        .map_err(|_| MathError::AlreadyConfigured)
}

/// Returns the process-wide calculator, selecting the default one on
/// first use.
#[must_use]
pub fn calculator() -> &'static dyn Calculator {
    CALCULATOR
        .get_or_init(|| {
            let calculator = NativeCalculator::new();
            debug!(config = ?calculator.config(), "selecting default calculator");
            Box::new(calculator)
        })
        .as_ref()
}
