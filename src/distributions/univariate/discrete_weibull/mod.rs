// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Discrete Weibull Distribution** - *Type I Discrete Analogue of the Weibull*
//!
//! Support is the non-negative integers. Parameters: `0 < q < 1` and `beta > 0`.

mod scalar;

pub use scalar::DiscreteWeibull;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Discrete Weibull PMF: q^(x^β) − q^((x+1)^β) on the non-negative integers.
#[inline(always)]
pub fn discrete_weibull_pmf<'a>(
    x: impl Into<Column<'a>>,
    q: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<DiscreteWeibull, 2>(
        "discrete_weibull_pmf",
        x.into(),
        [q.into(), beta.into()],
        log_prob,
    )
}

/// Discrete Weibull CDF: 1 − q^((⌊x⌋+1)^β) for x ≥ 0.
#[inline(always)]
pub fn discrete_weibull_cdf<'a>(
    x: impl Into<Column<'a>>,
    q: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<DiscreteWeibull, 2>(
        "discrete_weibull_cdf",
        x.into(),
        [q.into(), beta.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn discrete_weibull_quantile<'a>(
    p: impl Into<Column<'a>>,
    q: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<DiscreteWeibull, 2>(
        "discrete_weibull_quantile",
        p.into(),
        [q.into(), beta.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn discrete_weibull_sample<'a, R: Rng>(
    n: usize,
    q: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<DiscreteWeibull, R, 2>(
        "discrete_weibull_sample",
        n,
        [q.into(), beta.into()],
        sampler,
    )
}
