//! The digit-string arithmetic engine.
//!
//! This module provides the [`Calculator`] trait, the contract every
//! arithmetic backend satisfies, its schoolbook implementation
//! [`NativeCalculator`], the rounding policy [`div_round`], and the
//! process-wide engine selection ([`install`] / [`calculator`]).
//!
//! All functions here work on canonical digit strings (see [`digits`]).
//! The value types in [`domain`](crate::domain) are the checked public
//! surface; this module is the layer they funnel through.

mod calculator;
mod context;
pub mod digits;
mod native;
mod rounding;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use calculator::{Calculator, MAX_POWER};
pub use context::{calculator, install};
pub use native::NativeCalculator;
pub use rounding::div_round;
