// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Generic recycled kernels shared by every [`Family`].
//!
//! ### Lane handling, in order
//! 1. Missing: any recycled input lane null or NaN. Output lane is null (NaN value,
//!    validity bit cleared). No warning.
//! 2. Invalid: parameters outside the family's domain, or a quantile probability
//!    outside [0, 1]. Output lane is NaN with its validity bit set.
//! 3. Otherwise the family's scalar formula.
//!
//! A call that produced at least one invalid lane logs exactly one warning.

use minarrow::{Bitmask, FloatArray, Vec64};
use rand::Rng;

use super::Family;
use crate::distributions::shared::broadcast::{transform_probabilities, Broadcast, Column};
use crate::distributions::shared::sampler::Sampler;
use crate::errors::KernelError;

/// Output accumulator tracking null lanes and invalid-lane count.
pub(crate) struct KernelOutput {
    values: Vec64<f64>,
    null_mask: Option<Bitmask>,
    invalid: usize,
    len: usize,
}

impl KernelOutput {
    pub(crate) fn with_len(len: usize) -> Self {
        KernelOutput {
            values: Vec64::with_capacity(len),
            null_mask: None,
            invalid: 0,
            len,
        }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, v: f64) {
        self.values.push(v);
    }

    #[inline(always)]
    pub(crate) fn push_missing(&mut self) {
        let idx = self.values.len();
        let len = self.len;
        self.null_mask
            .get_or_insert_with(|| Bitmask::new_set_all(len, true))
            .set(idx, false);
        self.values.push(f64::NAN);
    }

    #[inline(always)]
    pub(crate) fn push_invalid(&mut self) {
        self.invalid += 1;
        self.values.push(f64::NAN);
    }

    /// Emits the per-call warning, if any lane was invalid, and builds the array.
    pub(crate) fn finish(self, fname: &str) -> FloatArray<f64> {
        if self.invalid > 0 {
            log::warn!(
                "{fname}: NaNs produced ({} of {} lanes invalid)",
                self.invalid,
                self.len
            );
        }
        FloatArray::from_vec64(self.values, self.null_mask)
    }
}

/// Recycled density (mass) kernel. `log_prob` returns ln f(x).
pub fn density_kernel<'a, F, const K: usize>(
    fname: &str,
    x: Column<'a>,
    params: [Column<'a>; K],
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError>
where
    F: Family<K>,
{
    let bc = Broadcast::new(fname, x, params)?;
    let mut out = KernelOutput::with_len(bc.len());
    for i in 0..bc.len() {
        match bc.row(i) {
            None => out.push_missing(),
            Some((_, theta)) if !F::in_domain(&theta) => out.push_invalid(),
            Some((xi, theta)) => out.push(if log_prob {
                F::log_pdf(xi, &theta)
            } else {
                F::pdf(xi, &theta)
            }),
        }
    }
    Ok(out.finish(fname))
}

/// Recycled CDF kernel with tail and log-scale selection.
pub fn cumulative_kernel<'a, F, const K: usize>(
    fname: &str,
    x: Column<'a>,
    params: [Column<'a>; K],
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError>
where
    F: Family<K>,
{
    let bc = Broadcast::new(fname, x, params)?;
    let mut out = KernelOutput::with_len(bc.len());
    for i in 0..bc.len() {
        match bc.row(i) {
            None => out.push_missing(),
            Some((_, theta)) if !F::in_domain(&theta) => out.push_invalid(),
            Some((xi, theta)) => out.push(match (lower_tail, log_prob) {
                (true, false) => F::cdf(xi, &theta),
                (false, false) => F::sf(xi, &theta),
                (true, true) => F::log_cdf(xi, &theta),
                (false, true) => F::log_sf(xi, &theta),
            }),
        }
    }
    Ok(out.finish(fname))
}

/// Recycled quantile kernel.
///
/// The tail and log-scale options transform `p` before it is recycled.
pub fn quantile_kernel<'a, F, const K: usize>(
    fname: &str,
    p: Column<'a>,
    params: [Column<'a>; K],
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError>
where
    F: Family<K>,
{
    let probs = transform_probabilities(p.values(), lower_tail, log_prob);
    let bc = Broadcast::new(fname, Column::new(&probs, p.mask()), params)?;
    let mut out = KernelOutput::with_len(bc.len());
    for i in 0..bc.len() {
        match bc.row(i) {
            None => out.push_missing(),
            Some((pi, theta)) if !F::in_domain(&theta) || !(0.0..=1.0).contains(&pi) => {
                out.push_invalid()
            }
            Some((pi, theta)) => out.push(F::quantile(pi, &theta)),
        }
    }
    Ok(out.finish(fname))
}

/// Draws `n` variates, parameter columns recycled against `n`.
pub fn sample_kernel<'a, F, R, const K: usize>(
    fname: &str,
    n: usize,
    params: [Column<'a>; K],
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError>
where
    F: Family<K>,
    R: Rng,
{
    let bc = Broadcast::with_len(fname, n, params)?;
    let mut out = KernelOutput::with_len(n);
    for i in 0..n {
        match bc.params(i) {
            None => out.push_missing(),
            Some(theta) if !F::in_domain(&theta) => out.push_invalid(),
            Some(theta) => out.push(F::sample(&theta, sampler)?),
        }
    }
    Ok(out.finish(fname))
}
