//! Core trait abstractions shared by the number types.
//!
//! [`Numeric`] is the common contract for sign tests, cross-kind
//! comparison and conversion. The arithmetic engine seam,
//! [`Calculator`](crate::math::Calculator), lives next to its
//! implementation in [`math`](crate::math).

mod numeric;

pub use numeric::Numeric;
