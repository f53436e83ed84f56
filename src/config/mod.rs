//! Runtime configuration for the arithmetic engine.
//!
//! [`CalculatorConfig`] describes the fast-path limits of the native
//! calculator. Build one, hand it to
//! [`NativeCalculator::with_config`](crate::math::NativeCalculator::with_config)
//! and install the result once at startup with
//! [`math::install`](crate::math::install).

mod calculator;

pub use calculator::CalculatorConfig;
