// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Discrete Uniform Distribution** - *Equal Mass on an Integer Range*
//!
//! Every integer in `[min, max]` carries mass `1/(max − min + 1)`. Both bounds must
//! be finite integers with `min ≤ max`; anything else is a domain violation.
//! Non-integral `x` has mass 0 and the CDF steps at the integers.

mod scalar;

pub use scalar::DiscreteUniform;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Discrete uniform PMF with all arguments recycled to the longest length.
#[inline(always)]
pub fn discrete_uniform_pmf<'a>(
    x: impl Into<Column<'a>>,
    min: impl Into<Column<'a>>,
    max: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<DiscreteUniform, 2>(
        "discrete_uniform_pmf",
        x.into(),
        [min.into(), max.into()],
        log_prob,
    )
}

/// Discrete uniform CDF, `(floor(x) − min + 1)/(max − min + 1)` inside the range.
#[inline(always)]
pub fn discrete_uniform_cdf<'a>(
    x: impl Into<Column<'a>>,
    min: impl Into<Column<'a>>,
    max: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<DiscreteUniform, 2>(
        "discrete_uniform_cdf",
        x.into(),
        [min.into(), max.into()],
        lower_tail,
        log_prob,
    )
}

/// Discrete uniform quantile: smallest integer `k` in range with `F(k) ≥ p`.
#[inline(always)]
pub fn discrete_uniform_quantile<'a>(
    p: impl Into<Column<'a>>,
    min: impl Into<Column<'a>>,
    max: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<DiscreteUniform, 2>(
        "discrete_uniform_quantile",
        p.into(),
        [min.into(), max.into()],
        lower_tail,
        log_prob,
    )
}

/// Draws `n` discrete uniform variates by inverse transform.
#[inline(always)]
pub fn discrete_uniform_sample<'a, R: Rng>(
    n: usize,
    min: impl Into<Column<'a>>,
    max: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<DiscreteUniform, R, 2>(
        "discrete_uniform_sample",
        n,
        [min.into(), max.into()],
        sampler,
    )
}

#[cfg(test)]
mod discrete_uniform_tests {
    use minarrow::Bitmask;

    use super::*;
    use crate::distributions::univariate::common::{assert_close, dense_data};

    fn mask_vec(mask: &Bitmask) -> Vec<bool> {
        (0..mask.len()).map(|i| mask.get(i)).collect()
    }

    #[test]
    fn du_pmf_basic_values() {
        let x = [0.0, 1.0, 2.0, 0.5, -1.0];
        let out = dense_data(discrete_uniform_pmf(&x, &[0.0], &[1.0], false).unwrap());
        assert_eq!(&out[..], &[0.5, 0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn du_pmf_recycles_scalar_parameters() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let out = dense_data(discrete_uniform_pmf(&x, &[0.0], &[1.0], false).unwrap());
        assert_eq!(&out[..], &[0.5, 0.0, 0.0, 0.0]);
        let x = [0.0, 1.0, 0.0, 1.0];
        let out = dense_data(discrete_uniform_pmf(&x, &[0.0], &[1.0], false).unwrap());
        assert!(out.iter().all(|&v| v == 0.5));
    }

    #[test]
    fn du_pmf_log_scale() {
        let x = [3.0, 20.0];
        let out = dense_data(discrete_uniform_pmf(&x, &[1.0], &[10.0], true).unwrap());
        assert_close(out[0], 0.1_f64.ln(), 1e-15);
        assert_eq!(out[1], f64::NEG_INFINITY);
    }

    #[test]
    fn du_pmf_sums_to_one() {
        let x: Vec<f64> = (-10..=10).map(|k| k as f64).collect();
        let out = dense_data(discrete_uniform_pmf(&x, &[-3.0], &[4.0], false).unwrap());
        assert_close(out.iter().sum::<f64>(), 1.0, 1e-14);
    }

    #[test]
    fn du_pmf_domain_violations() {
        let x = [1.0];
        for (lo, hi) in [(2.0, 1.0), (0.5, 3.0), (0.0, f64::INFINITY)] {
            let out = discrete_uniform_pmf(&x, &[lo], &[hi], false).unwrap();
            assert!(out.null_mask.is_none());
            assert!(out.data[0].is_nan());
        }
    }

    #[test]
    fn du_pmf_null_mask_propagation() {
        let x = FloatArray::from_vec64(
            minarrow::vec64![0.0, 1.0, 2.0],
            Some(Bitmask::from_bools(&[true, false, true])),
        );
        let out = discrete_uniform_pmf(&x, &[0.0], &[3.0], false).unwrap();
        assert_eq!(mask_vec(out.null_mask.as_ref().unwrap()), vec![true, false, true]);
        assert_close(out.data[0], 0.25, 1e-15);
        assert!(out.data[1].is_nan());
    }

    #[test]
    fn du_cdf_steps_at_integers() {
        let x = [-1.0, 0.0, 0.5, 1.0, 1.9, 3.0, 7.0];
        let out = dense_data(discrete_uniform_cdf(&x, &[0.0], &[3.0], true, false).unwrap());
        assert_eq!(&out[..], &[0.0, 0.25, 0.25, 0.5, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn du_cdf_upper_tail() {
        let x = [-1.0, 1.0, 3.0];
        let out = dense_data(discrete_uniform_cdf(&x, &[0.0], &[3.0], false, false).unwrap());
        assert_eq!(&out[..], &[1.0, 0.5, 0.0]);
    }

    #[test]
    fn du_quantile_basic_values() {
        let p = [0.0, 0.05, 0.1, 0.11, 0.5, 1.0];
        let out = dense_data(discrete_uniform_quantile(&p, &[1.0], &[10.0], true, false).unwrap());
        assert_eq!(&out[..], &[1.0, 1.0, 1.0, 2.0, 5.0, 10.0]);
    }

    #[test]
    fn du_quantile_single_point_range() {
        let p = [0.3, 0.9];
        let out = dense_data(discrete_uniform_quantile(&p, &[4.0], &[4.0], true, false).unwrap());
        assert_eq!(&out[..], &[4.0, 4.0]);
    }

    #[test]
    fn du_quantile_inverts_cdf() {
        let p = [0.01, 0.2, 0.37, 0.5, 0.99];
        let q = dense_data(discrete_uniform_quantile(&p, &[-5.0], &[5.0], true, false).unwrap());
        let f = dense_data(discrete_uniform_cdf(&q[..], &[-5.0], &[5.0], true, false).unwrap());
        for (fi, pi) in f.iter().zip(p.iter()) {
            assert!(*fi >= *pi);
        }
    }

    #[test]
    fn du_sample_stays_in_range() {
        let mut s = Sampler::seeded(11);
        let out = dense_data(discrete_uniform_sample(2000, &[2.0], &[6.0], &mut s).unwrap());
        let mut seen = [false; 5];
        for v in out.iter() {
            assert!(v.fract() == 0.0 && (2.0..=6.0).contains(v));
            seen[(*v - 2.0) as usize] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }
}
