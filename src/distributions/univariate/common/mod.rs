// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Family Capability and Kernels*
//!
//! Every scalar-parameter family in this crate is a zero-sized type implementing
//! [`Family`]. The trait carries the distinct maths of each family (domain predicate,
//! density, CDF, quantile, sampler) while the generic kernels in [`kernel`] carry the
//! shared vectorisation: recycling, missing-value propagation, domain checks, tail
//! and log-scale handling, and the once-per-call domain warning.
//!
//! ## Helper Functions
//! - **Array extraction**: `dense_data` for tests that expect no null mask
//! - **Tolerance checking**: `assert_close` for numerical comparison

pub mod kernel;

use minarrow::{Buffer, FloatArray};
use rand::Rng;

use crate::distributions::shared::sampler::Sampler;
use crate::errors::KernelError;

/// A univariate family with `K` scalar parameters.
///
/// The scalar methods may assume `in_domain(params)` holds and that no argument is
/// NaN; the kernels check both before calling them.
pub trait Family<const K: usize> {
    /// Short name used as the prefix of diagnostics and errors.
    const NAME: &'static str;

    /// Parameter names in call order.
    const PARAMS: [&'static str; K];

    /// Parameter-domain predicate.
    fn in_domain(params: &[f64; K]) -> bool;

    /// Natural log of the density (or mass), `-inf` outside the support.
    fn log_pdf(x: f64, params: &[f64; K]) -> f64;

    /// Density (or mass). Continuous families exponentiate their log form.
    #[inline(always)]
    fn pdf(x: f64, params: &[f64; K]) -> f64 {
        Self::log_pdf(x, params).exp()
    }

    /// Lower-tail CDF, P(X ≤ x).
    fn cdf(x: f64, params: &[f64; K]) -> f64;

    /// Upper-tail probability, P(X > x).
    #[inline(always)]
    fn sf(x: f64, params: &[f64; K]) -> f64 {
        1.0 - Self::cdf(x, params)
    }

    #[inline(always)]
    fn log_cdf(x: f64, params: &[f64; K]) -> f64 {
        Self::cdf(x, params).ln()
    }

    #[inline(always)]
    fn log_sf(x: f64, params: &[f64; K]) -> f64 {
        Self::sf(x, params).ln()
    }

    /// Smallest x with F(x) ≥ p, for p in [0, 1].
    fn quantile(p: f64, params: &[f64; K]) -> f64;

    /// One variate. Defaults to inverse-transform sampling on an open-interval uniform.
    #[inline(always)]
    fn sample<R: Rng>(params: &[f64; K], sampler: &mut Sampler<R>) -> Result<f64, KernelError> {
        Ok(Self::quantile(sampler.uniform(), params))
    }
}

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Assert absolute difference ≤ `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}
