// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Lomax Distribution** - *Pareto Type II Shifted to Zero*
//!
//! Heavy-tailed distribution on `x > 0` with rate `lambda > 0` and shape `kappa > 0`.

mod scalar;

pub use scalar::Lomax;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Lomax PDF: λκ / (1 + λx)^(κ+1) for x > 0, 0 otherwise.
#[inline(always)]
pub fn lomax_pdf<'a>(
    x: impl Into<Column<'a>>,
    lambda: impl Into<Column<'a>>,
    kappa: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<Lomax, 2>("lomax_pdf", x.into(), [lambda.into(), kappa.into()], log_prob)
}

/// Lomax CDF: 1 − (1 + λx)^(−κ).
#[inline(always)]
pub fn lomax_cdf<'a>(
    x: impl Into<Column<'a>>,
    lambda: impl Into<Column<'a>>,
    kappa: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<Lomax, 2>(
        "lomax_cdf",
        x.into(),
        [lambda.into(), kappa.into()],
        lower_tail,
        log_prob,
    )
}

/// Lomax quantile: ((1 − p)^(−1/κ) − 1) / λ.
#[inline(always)]
pub fn lomax_quantile<'a>(
    p: impl Into<Column<'a>>,
    lambda: impl Into<Column<'a>>,
    kappa: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<Lomax, 2>(
        "lomax_quantile",
        p.into(),
        [lambda.into(), kappa.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn lomax_sample<'a, R: Rng>(
    n: usize,
    lambda: impl Into<Column<'a>>,
    kappa: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<Lomax, R, 2>("lomax_sample", n, [lambda.into(), kappa.into()], sampler)
}
