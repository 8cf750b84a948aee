// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Component matrices and per-row evaluation of a finite mixture of normals.

use rand::Rng;

use crate::distributions::shared::broadcast::recycle;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::shared::scalar::{
    normal_cdf, normal_log_cdf, normal_log_pdf, normal_log_sf, normal_pdf, normal_sf,
};
use crate::errors::KernelError;

/// Row-major `rows × k` matrix of per-component parameters.
///
/// Row `r` holds the `k` component values used by every output position `i` with
/// `i % rows == r`, so rows recycle exactly like scalar parameter vectors.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRows<'a> {
    values: &'a [f64],
    k: usize,
}

impl<'a> ComponentRows<'a> {
    /// Wraps `values` as rows of `k` components.
    ///
    /// `k` must be positive and divide `values.len()`. An empty `values` is accepted
    /// here and rejected by the kernels as a zero-length input.
    pub fn new(values: &'a [f64], k: usize) -> Result<Self, KernelError> {
        if k == 0 {
            return Err(KernelError::InvalidArguments(
                "component matrix must have at least one column".into(),
            ));
        }
        if values.len() % k != 0 {
            return Err(KernelError::InvalidArguments(format!(
                "component matrix of {} values does not divide into rows of {k}",
                values.len()
            )));
        }
        Ok(ComponentRows { values, k })
    }

    /// A single row holding every component.
    pub fn single_row(values: &'a [f64]) -> Result<Self, KernelError> {
        Self::new(values, values.len())
    }

    /// Number of components per row.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.values.len() / self.k
    }

    /// Components used at output position `i`; empty when the matrix has no rows.
    #[inline(always)]
    pub fn row(&self, i: usize) -> &'a [f64] {
        let rows = self.rows();
        if rows == 0 {
            return &[];
        }
        let r = recycle(i, rows);
        &self.values[r * self.k..(r + 1) * self.k]
    }
}

/// Outcome of reading the component rows at one output position.
pub(crate) enum MixtureRow<'a> {
    Missing,
    Invalid,
    Valid(Mixture<'a>),
}

/// One validated mixture: weights are non-negative with a positive finite total and
/// every scale is positive.
pub(crate) struct Mixture<'a> {
    mu: &'a [f64],
    sigma: &'a [f64],
    alpha: &'a [f64],
    total: f64,
}

/// Reads row `i` of each matrix. Any NaN component makes the row missing; otherwise
/// a negative weight, a non-positive scale or a zero total makes it invalid.
#[inline(always)]
pub(crate) fn mixture_row<'a>(
    mu: &ComponentRows<'a>,
    sigma: &ComponentRows<'a>,
    alpha: &ComponentRows<'a>,
    i: usize,
) -> MixtureRow<'a> {
    let (mu, sigma, alpha) = (mu.row(i), sigma.row(i), alpha.row(i));
    let any_nan = mu
        .iter()
        .chain(sigma.iter())
        .chain(alpha.iter())
        .any(|v| v.is_nan());
    if any_nan {
        return MixtureRow::Missing;
    }
    if alpha.iter().any(|&w| w < 0.0) || sigma.iter().any(|&s| s <= 0.0) {
        return MixtureRow::Invalid;
    }
    let total: f64 = alpha.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return MixtureRow::Invalid;
    }
    MixtureRow::Valid(Mixture {
        mu,
        sigma,
        alpha,
        total,
    })
}

impl<'a> Mixture<'a> {
    /// `(normalised weight, mu, sigma)` per component.
    #[inline(always)]
    fn components(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.alpha
            .iter()
            .zip(self.mu.iter())
            .zip(self.sigma.iter())
            .map(move |((&w, &m), &s)| (w / self.total, m, s))
    }

    #[inline(always)]
    pub(crate) fn pdf(&self, x: f64) -> f64 {
        self.components().map(|(w, m, s)| w * normal_pdf(x, m, s)).sum()
    }

    /// Log-sum-exp of `ln w + log_f(x, mu, sigma)` over the components with
    /// positive weight.
    #[inline(always)]
    fn log_mix(&self, x: f64, log_f: fn(f64, f64, f64) -> f64) -> f64 {
        let terms = || {
            self.components()
                .filter(|(w, _, _)| *w > 0.0)
                .map(move |(w, m, s)| w.ln() + log_f(x, m, s))
        };
        let max = terms().fold(f64::NEG_INFINITY, f64::max);
        if max == f64::NEG_INFINITY {
            return f64::NEG_INFINITY;
        }
        max + terms().map(|t| (t - max).exp()).sum::<f64>().ln()
    }

    #[inline(always)]
    pub(crate) fn log_pdf(&self, x: f64) -> f64 {
        self.log_mix(x, normal_log_pdf)
    }

    #[inline(always)]
    pub(crate) fn cdf(&self, x: f64) -> f64 {
        self.components()
            .map(|(w, m, s)| w * normal_cdf(x, m, s))
            .sum::<f64>()
            .min(1.0)
    }

    #[inline(always)]
    pub(crate) fn sf(&self, x: f64) -> f64 {
        self.components()
            .map(|(w, m, s)| w * normal_sf(x, m, s))
            .sum::<f64>()
            .min(1.0)
    }

    #[inline(always)]
    pub(crate) fn log_cdf(&self, x: f64) -> f64 {
        self.log_mix(x, normal_log_cdf).min(0.0)
    }

    #[inline(always)]
    pub(crate) fn log_sf(&self, x: f64) -> f64 {
        self.log_mix(x, normal_log_sf).min(0.0)
    }

    /// Component index for a uniform draw `u`.
    ///
    /// Walks from the last component to the first, subtracting each normalised
    /// weight from a running complement that starts at 1, and picks the first
    /// component whose complement falls below `u`. Falls back to component 0.
    #[inline(always)]
    pub(crate) fn select(&self, u: f64) -> usize {
        let mut complement = 1.0;
        for j in (0..self.alpha.len()).rev() {
            complement -= self.alpha[j] / self.total;
            if u > complement {
                return j;
            }
        }
        0
    }

    #[inline(always)]
    pub(crate) fn sample<R: Rng>(&self, sampler: &mut Sampler<R>) -> f64 {
        let j = self.select(sampler.uniform());
        sampler.normal(self.mu[j], self.sigma[j])
    }
}
