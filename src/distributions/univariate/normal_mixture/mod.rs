// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mixture of Normals** - *Finite Gaussian Mixtures with Recycled Component Rows*
//!
//! A `k`-component mixture is parameterised by three `rows × k` matrices of means,
//! scales and weights, given as [`ComponentRows`]. Weights need not sum to one; each
//! row is normalised by its own total. Rows recycle against the output position
//! exactly like scalar parameter vectors, and the three matrices may have different
//! row counts. A disagreement in `k` between them is fatal.
//!
//! There is no closed-form quantile, so the family exposes density, CDF and sampling
//! only and is not part of the scalar-parameter registry.

mod scalar;

pub use scalar::ComponentRows;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::{broadcast_len, Column};
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::KernelOutput;
use crate::errors::{log_length_mismatch, KernelError};
use scalar::{mixture_row, MixtureRow};

/// Ensures all three component matrices agree on `k`.
fn check_components(
    fname: &str,
    mu: &ComponentRows<'_>,
    sigma: &ComponentRows<'_>,
    alpha: &ComponentRows<'_>,
) -> Result<(), KernelError> {
    for other in [mu, sigma] {
        if other.k() != alpha.k() {
            return Err(KernelError::LengthMismatch(log_length_mismatch(
                fname,
                alpha.k(),
                other.k(),
            )));
        }
    }
    Ok(())
}

/// Mixture density. `log_prob` evaluates by log-sum-exp over the components.
pub fn normal_mixture_pdf<'a>(
    x: impl Into<Column<'a>>,
    mu: ComponentRows<'a>,
    sigma: ComponentRows<'a>,
    alpha: ComponentRows<'a>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    const FNAME: &str = "normal_mixture_pdf";
    let x = x.into();
    check_components(FNAME, &mu, &sigma, &alpha)?;
    let len = broadcast_len(FNAME, &[x.len(), mu.rows(), sigma.rows(), alpha.rows()])?;

    let mut out = KernelOutput::with_len(len);
    for i in 0..len {
        let Some(xi) = x.recycled(i) else {
            out.push_missing();
            continue;
        };
        match mixture_row(&mu, &sigma, &alpha, i) {
            MixtureRow::Missing => out.push_missing(),
            MixtureRow::Invalid => out.push_invalid(),
            MixtureRow::Valid(mix) if log_prob => out.push(mix.log_pdf(xi)),
            MixtureRow::Valid(mix) => out.push(mix.pdf(xi)),
        }
    }
    Ok(out.finish(FNAME))
}

/// Mixture CDF. The upper tail sums per-component normal survival functions; the
/// log forms combine per-component log probabilities by log-sum-exp.
pub fn normal_mixture_cdf<'a>(
    x: impl Into<Column<'a>>,
    mu: ComponentRows<'a>,
    sigma: ComponentRows<'a>,
    alpha: ComponentRows<'a>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    const FNAME: &str = "normal_mixture_cdf";
    let x = x.into();
    check_components(FNAME, &mu, &sigma, &alpha)?;
    let len = broadcast_len(FNAME, &[x.len(), mu.rows(), sigma.rows(), alpha.rows()])?;

    let mut out = KernelOutput::with_len(len);
    for i in 0..len {
        let Some(xi) = x.recycled(i) else {
            out.push_missing();
            continue;
        };
        match mixture_row(&mu, &sigma, &alpha, i) {
            MixtureRow::Missing => out.push_missing(),
            MixtureRow::Invalid => out.push_invalid(),
            MixtureRow::Valid(mix) => out.push(match (lower_tail, log_prob) {
                (true, false) => mix.cdf(xi),
                (false, false) => mix.sf(xi),
                (true, true) => mix.log_cdf(xi),
                (false, true) => mix.log_sf(xi),
            }),
        }
    }
    Ok(out.finish(FNAME))
}

/// Draws `n` mixture variates: a component by backward walk over the normalised
/// weights, then a normal draw from it.
pub fn normal_mixture_sample<'a, R: Rng>(
    n: usize,
    mu: ComponentRows<'a>,
    sigma: ComponentRows<'a>,
    alpha: ComponentRows<'a>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    const FNAME: &str = "normal_mixture_sample";
    check_components(FNAME, &mu, &sigma, &alpha)?;
    broadcast_len(FNAME, &[mu.rows(), sigma.rows(), alpha.rows()])?;

    let mut out = KernelOutput::with_len(n);
    for i in 0..n {
        match mixture_row(&mu, &sigma, &alpha, i) {
            MixtureRow::Missing => out.push_missing(),
            MixtureRow::Invalid => out.push_invalid(),
            MixtureRow::Valid(mix) => out.push(mix.sample(sampler)),
        }
    }
    Ok(out.finish(FNAME))
}
