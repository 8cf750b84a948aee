// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for Statistical Computing*
//!
//! Hard-coded constants used by the normal primitives and the families built on them.

/// The square root of 2: √2 ≈ 1.414213562373095.
///
/// Scales the argument of `erfc` when evaluating the normal CDF and quantile.
pub(crate) const SQRT_2: f64 = 1.4142135623730951_f64;

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalisation constant of the normal density.
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
///
/// Additive constant of the normal log-density.
pub const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;
