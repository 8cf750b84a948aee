// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Kumaraswamy Distribution** - *Closed-Form Beta Alternative*
//!
//! Double-bounded distribution on `[0, 1]` with shape parameters `a, b > 0`. Unlike
//! the beta distribution its CDF and quantile have closed forms, so sampling is a
//! direct inverse transform.

mod scalar;

pub use scalar::Kumaraswamy;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Kumaraswamy PDF, 0 outside `[0, 1]`.
#[inline(always)]
pub fn kumaraswamy_pdf<'a>(
    x: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<Kumaraswamy, 2>("kumaraswamy_pdf", x.into(), [a.into(), b.into()], log_prob)
}

/// Kumaraswamy CDF, 1 − (1 − x^a)^b; 1 at and above the upper bound.
#[inline(always)]
pub fn kumaraswamy_cdf<'a>(
    x: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<Kumaraswamy, 2>(
        "kumaraswamy_cdf",
        x.into(),
        [a.into(), b.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn kumaraswamy_quantile<'a>(
    p: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<Kumaraswamy, 2>(
        "kumaraswamy_quantile",
        p.into(),
        [a.into(), b.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn kumaraswamy_sample<'a, R: Rng>(
    n: usize,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<Kumaraswamy, R, 2>("kumaraswamy_sample", n, [a.into(), b.into()], sampler)
}
