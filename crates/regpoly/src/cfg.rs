//! Tolerance defaults for planar figures.
//!
//! Policy
//! - One absolute tolerance drives every approximate comparison (coordinates,
//!   lengths, angles, turn magnitudes). It is part of the geometric contract and
//!   deliberately not a runtime knob.

use crate::Scalar;

/// Absolute tolerance for all approximate comparisons.
pub const EPS: f64 = 1e-5;

/// Fewest vertices any figure may have.
pub const MIN_VERTICES: usize = 3;

/// `EPS` in the caller's scalar type.
#[inline]
pub fn eps<T: Scalar>() -> T {
    nalgebra::convert(EPS)
}

/// Lossless-enough conversion of small literals and counts into `T`.
#[inline]
pub(crate) fn lit<T: Scalar>(v: f64) -> T {
    nalgebra::convert(v)
}
