// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gumbel Distribution** - *Type I Extreme Value*
//!
//! Location `mu`, scale `sigma > 0`, support on the whole real line.
//! The upper tail is computed as `-expm1(-e^{-z})` so it stays accurate far to the right.

mod scalar;

pub use scalar::Gumbel;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Gumbel PDF: f(x; μ, σ) = (1/σ) exp(−z − exp(−z)), z = (x − μ)/σ.
#[inline(always)]
pub fn gumbel_pdf<'a>(
    x: impl Into<Column<'a>>,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<Gumbel, 2>("gumbel_pdf", x.into(), [mu.into(), sigma.into()], log_prob)
}

/// Gumbel CDF: F(x; μ, σ) = exp(−exp(−z)).
#[inline(always)]
pub fn gumbel_cdf<'a>(
    x: impl Into<Column<'a>>,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<Gumbel, 2>(
        "gumbel_cdf",
        x.into(),
        [mu.into(), sigma.into()],
        lower_tail,
        log_prob,
    )
}

/// Gumbel quantile: Q(p; μ, σ) = μ − σ·ln(−ln p).
#[inline(always)]
pub fn gumbel_quantile<'a>(
    p: impl Into<Column<'a>>,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<Gumbel, 2>(
        "gumbel_quantile",
        p.into(),
        [mu.into(), sigma.into()],
        lower_tail,
        log_prob,
    )
}

/// Draws `n` Gumbel variates by inverse transform.
#[inline(always)]
pub fn gumbel_sample<'a, R: Rng>(
    n: usize,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<Gumbel, R, 2>("gumbel_sample", n, [mu.into(), sigma.into()], sampler)
}
