// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Gompertz Distribution** - *Exponentially Increasing Hazard*
//!
//! Lifetime model with hazard `a·e^{bx}` on `x ≥ 0`. Both `a` and `b` must be
//! strictly positive.

mod scalar;

pub use scalar::Gompertz;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Gompertz PDF, evaluated through its log form.
#[inline(always)]
pub fn gompertz_pdf<'a>(
    x: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<Gompertz, 2>("gompertz_pdf", x.into(), [a.into(), b.into()], log_prob)
}

/// Gompertz CDF: 1 − exp(−a/b·(e^{bx} − 1)).
#[inline(always)]
pub fn gompertz_cdf<'a>(
    x: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<Gompertz, 2>(
        "gompertz_cdf",
        x.into(),
        [a.into(), b.into()],
        lower_tail,
        log_prob,
    )
}

/// Gompertz quantile: ln(1 − b/a·ln(1 − p)) / b.
#[inline(always)]
pub fn gompertz_quantile<'a>(
    p: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<Gompertz, 2>(
        "gompertz_quantile",
        p.into(),
        [a.into(), b.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn gompertz_sample<'a, R: Rng>(
    n: usize,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<Gompertz, R, 2>("gompertz_sample", n, [a.into(), b.into()], sampler)
}
