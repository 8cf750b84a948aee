// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Power Distribution** - *Power-Function Law on (0, alpha)*
//!
//! Upper bound `alpha > 0`, shape `beta > 0`. The log CDF is evaluated directly as
//! `β(ln x − ln α)` rather than through the CDF.

mod scalar;

pub use scalar::Power;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Power PDF: β·x^(β−1) / α^β on `(0, α)`.
#[inline(always)]
pub fn power_pdf<'a>(
    x: impl Into<Column<'a>>,
    alpha: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<Power, 2>("power_pdf", x.into(), [alpha.into(), beta.into()], log_prob)
}

/// Power CDF: (x/α)^β, clamped to 0 below the support and 1 above it.
#[inline(always)]
pub fn power_cdf<'a>(
    x: impl Into<Column<'a>>,
    alpha: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<Power, 2>(
        "power_cdf",
        x.into(),
        [alpha.into(), beta.into()],
        lower_tail,
        log_prob,
    )
}

/// Power quantile: α·p^(1/β).
#[inline(always)]
pub fn power_quantile<'a>(
    p: impl Into<Column<'a>>,
    alpha: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<Power, 2>(
        "power_quantile",
        p.into(),
        [alpha.into(), beta.into()],
        lower_tail,
        log_prob,
    )
}

#[inline(always)]
pub fn power_sample<'a, R: Rng>(
    n: usize,
    alpha: impl Into<Column<'a>>,
    beta: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<Power, R, 2>("power_sample", n, [alpha.into(), beta.into()], sampler)
}
