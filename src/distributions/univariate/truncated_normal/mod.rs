// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Truncated Normal Distribution** - *Normal Law Restricted to [a, b]*
//!
//! Parameters in call order: location `mu`, scale `sigma > 0`, lower bound `a` and
//! upper bound `b` with `a < b`. Either bound may be infinite.
//!
//! Density, CDF and quantile are closed-form in terms of the standard normal
//! primitives. Sampling uses rejection rather than the quantile, which loses
//! precision under extreme truncation; the rejection loop is capped by
//! [`TRUNCATED_NORMAL_MAX_REJECTIONS`](crate::config::TRUNCATED_NORMAL_MAX_REJECTIONS)
//! and reports `KernelError::NonConvergence` when the cap is hit.

mod scalar;

pub use scalar::TruncatedNormal;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::errors::KernelError;

/// Truncated normal PDF: φ(z) / (σ·(Φ(z_b) − Φ(zₐ))) on `[a, b]`.
#[inline(always)]
pub fn truncated_normal_pdf<'a>(
    x: impl Into<Column<'a>>,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    density_kernel::<TruncatedNormal, 4>(
        "truncated_normal_pdf",
        x.into(),
        [mu.into(), sigma.into(), a.into(), b.into()],
        log_prob,
    )
}

/// Truncated normal CDF: 0 at or below `a`, 1 at or above `b`.
#[inline(always)]
pub fn truncated_normal_cdf<'a>(
    x: impl Into<Column<'a>>,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    cumulative_kernel::<TruncatedNormal, 4>(
        "truncated_normal_cdf",
        x.into(),
        [mu.into(), sigma.into(), a.into(), b.into()],
        lower_tail,
        log_prob,
    )
}

/// Truncated normal quantile; `p = 0` gives `a` and `p = 1` gives `b`.
#[inline(always)]
pub fn truncated_normal_quantile<'a>(
    p: impl Into<Column<'a>>,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    lower_tail: bool,
    log_prob: bool,
) -> Result<FloatArray<f64>, KernelError> {
    quantile_kernel::<TruncatedNormal, 4>(
        "truncated_normal_quantile",
        p.into(),
        [mu.into(), sigma.into(), a.into(), b.into()],
        lower_tail,
        log_prob,
    )
}

/// Draws `n` truncated normal variates by rejection sampling.
///
/// Returns `KernelError::NonConvergence` if any lane exhausts the rejection cap.
#[inline(always)]
pub fn truncated_normal_sample<'a, R: Rng>(
    n: usize,
    mu: impl Into<Column<'a>>,
    sigma: impl Into<Column<'a>>,
    a: impl Into<Column<'a>>,
    b: impl Into<Column<'a>>,
    sampler: &mut Sampler<R>,
) -> Result<FloatArray<f64>, KernelError> {
    sample_kernel::<TruncatedNormal, R, 4>(
        "truncated_normal_sample",
        n,
        [mu.into(), sigma.into(), a.into(), b.into()],
        sampler,
    )
}

#[cfg(test)]
mod truncated_normal_tests {
    use super::scalar::rejection_draw;
    use super::*;
    use crate::distributions::univariate::common::{assert_close, dense_data};

    const INF: f64 = f64::INFINITY;

    // Reference values from mpmath (30 digits), mu = 1, sigma = 2, a = -1, b = 4.

    #[test]
    fn tnorm_pdf_reference_values() {
        let x = [-1.0, 0.0, 1.0, 3.0, 4.0];
        let expect = [
            0.156203353952146461909,
            0.227274538934941191057,
            0.257535792215604798638,
            0.156203353952146461909,
            0.0836096303758833753284,
        ];
        let out = dense_data(truncated_normal_pdf(&x, &[1.0], &[2.0], &[-1.0], &[4.0], false).unwrap());
        for (a, e) in out.iter().zip(expect) {
            assert_close(*a, e, 1e-14);
        }
    }

    #[test]
    fn tnorm_pdf_outside_window() {
        let x = [-1.5, 4.5];
        let out = dense_data(truncated_normal_pdf(&x, &[1.0], &[2.0], &[-1.0], &[4.0], false).unwrap());
        assert_eq!(&out[..], &[0.0, 0.0]);
    }

    #[test]
    fn tnorm_cdf_reference_values() {
        let x = [-3.0, -1.0, 0.0, 1.0, 3.0, 4.0, 9.0];
        let expect = [
            0.0,
            0.0,
            0.193511968271716534534,
            0.440707811209879290662,
            0.881415622419758581323,
            1.0,
            1.0,
        ];
        let out = dense_data(
            truncated_normal_cdf(&x, &[1.0], &[2.0], &[-1.0], &[4.0], true, false).unwrap(),
        );
        for (a, e) in out.iter().zip(expect) {
            assert_close(*a, e, 1e-14);
        }
    }

    #[test]
    fn tnorm_quantile_reference_values() {
        let p = [0.0, 0.1, 0.5, 0.9, 1.0];
        let expect = [
            -1.0,
            -0.437749755049860869549,
            1.23073977125624122166,
            3.12273944336825208804,
            4.0,
        ];
        let out = dense_data(
            truncated_normal_quantile(&p, &[1.0], &[2.0], &[-1.0], &[4.0], true, false).unwrap(),
        );
        for (a, e) in out.iter().zip(expect) {
            assert_close(*a, e, 1e-10);
        }
    }

    #[test]
    fn tnorm_far_right_window_uses_survival_form() {
        // mu = 0, sigma = 1, window [8, 9]: Φ(8) rounds to 1
        let pdf = dense_data(truncated_normal_pdf(&[8.1], &[0.0], &[1.0], &[8.0], &[9.0], false).unwrap());
        let rel = (pdf[0] - 3.63162446877552628775) / 3.63162446877552628775;
        assert!(rel.abs() < 1e-9, "pdf {}", pdf[0]);
        let cdf = dense_data(
            truncated_normal_cdf(&[8.1], &[0.0], &[1.0], &[8.0], &[9.0], true, false).unwrap(),
        );
        assert_close(cdf[0], 0.558375401420124499957, 1e-9);
        let q = dense_data(
            truncated_normal_quantile(&[0.5], &[0.0], &[1.0], &[8.0], &[9.0], true, false).unwrap(),
        );
        assert_close(q[0], 8.08488889901816644600, 1e-8);
    }

    #[test]
    fn tnorm_infinite_bounds_reduce_to_normal() {
        let x = [-1.0, 0.0, 2.0];
        let out = dense_data(
            truncated_normal_cdf(&x, &[0.0], &[1.0], &[-INF], &[INF], true, false).unwrap(),
        );
        assert_close(out[0], 0.158655253931457051415, 1e-14);
        assert_close(out[1], 0.5, 1e-15);
        assert_close(out[2], 0.977249868051820792800, 1e-14);
    }

    #[test]
    fn tnorm_log_cdf_beyond_underflow() {
        // mpmath: log(ncdf(-40))
        let lo = dense_data(
            truncated_normal_cdf(&[-40.0], &[0.0], &[1.0], &[-INF], &[INF], true, true).unwrap(),
        );
        assert_close(lo[0], -804.608442013753788167, 1e-9);
        // window [30, inf) evaluated in the upper tail: log(sf(40) / sf(30))
        let hi = dense_data(
            truncated_normal_cdf(&[40.0], &[0.0], &[1.0], &[30.0], &[INF], false, true).unwrap(),
        );
        assert_close(hi[0], -350.287198057410591059, 1e-9);
        // finite window whose whole mass underflows
        let mid = dense_data(
            truncated_normal_cdf(&[-40.0], &[0.0], &[1.0], &[-50.0], &[-30.0], true, true)
                .unwrap(),
        );
        assert_close(mid[0], -350.287198057410591059, 1e-9);
        let edges = dense_data(
            truncated_normal_cdf(&[-1.0, 4.0], &[1.0], &[2.0], &[-1.0], &[4.0], true, true).unwrap(),
        );
        assert_eq!(edges[0], f64::NEG_INFINITY);
        assert_eq!(edges[1], 0.0);
    }

    #[test]
    fn tnorm_log_scale_matches_natural_scale() {
        let x = [-0.5, 0.0, 1.0, 3.0, 3.9];
        let args = (&[1.0], &[2.0], &[-1.0], &[4.0]);
        for lower in [true, false] {
            let plain = dense_data(
                truncated_normal_cdf(&x, args.0, args.1, args.2, args.3, lower, false).unwrap(),
            );
            let logged = dense_data(
                truncated_normal_cdf(&x, args.0, args.1, args.2, args.3, lower, true).unwrap(),
            );
            for (l, p) in logged.iter().zip(plain.iter()) {
                assert_close(*l, p.ln(), 1e-12);
            }
        }
    }

    #[test]
    fn tnorm_quantile_round_trip() {
        let p = [0.01, 0.25, 0.5, 0.75, 0.99];
        let q = dense_data(
            truncated_normal_quantile(&p, &[0.5], &[1.5], &[0.0], &[INF], true, false).unwrap(),
        );
        let f = dense_data(
            truncated_normal_cdf(&q[..], &[0.5], &[1.5], &[0.0], &[INF], true, false).unwrap(),
        );
        for (fi, pi) in f.iter().zip(p) {
            assert_close(*fi, pi, 1e-10);
        }
    }

    #[test]
    fn tnorm_domain_violations() {
        // sigma <= 0, a == b, a > b
        let out = truncated_normal_pdf(
            &[0.5],
            &[0.0],
            &[-1.0, 1.0, 1.0],
            &[0.0, 1.0, 2.0],
            &[1.0, 1.0, 1.0],
            false,
        )
        .unwrap();
        assert_eq!(out.data.len(), 3);
        assert!(out.data.iter().all(|v| v.is_nan()));
        assert!(out.null_mask.is_none());
    }

    fn sample_mean(params: [f64; 4], seed: u64) -> f64 {
        let mut s = Sampler::seeded(seed);
        let n = 20_000;
        let [mu, sigma, a, b] = params;
        let draws =
            dense_data(truncated_normal_sample(n, &[mu], &[sigma], &[a], &[b], &mut s).unwrap());
        assert!(draws.iter().all(|v| *v > a && *v < b));
        draws.iter().sum::<f64>() / n as f64
    }

    #[test]
    fn tnorm_sample_wide_window() {
        let mean = sample_mean([1.0, 2.0, -1.0, 4.0], 1);
        assert!((mean - 1.29037489430505234632).abs() < 0.03, "mean {mean}");
        let half = sample_mean([0.0, 1.0, 0.0, INF], 2);
        assert!((half - 0.797884560802865355880).abs() < 0.02, "mean {half}");
    }

    #[test]
    fn tnorm_sample_narrow_windows() {
        // straddling zero, both positive, both negative
        let straddle = sample_mean([0.0, 1.0, -0.5, 0.5], 3);
        assert!(straddle.abs() < 0.01, "mean {straddle}");
        let right = sample_mean([0.0, 1.0, 0.5, 1.5], 4);
        assert!((right - 0.920644605222035323602).abs() < 0.01, "mean {right}");
        let left = sample_mean([0.0, 1.0, -2.0, -1.0], 5);
        assert!((left + 1.38316904663155275430).abs() < 0.01, "mean {left}");
    }

    #[test]
    fn tnorm_sample_far_tail_narrow_window() {
        let mean = sample_mean([0.0, 1.0, 8.0, 9.0], 6);
        assert!((mean - 8.12118899297979692595).abs() < 0.01, "mean {mean}");
    }

    #[test]
    fn rejection_cap_is_reported() {
        // a wide window beyond 10 sigma never accepts a plain normal draw
        let mut s = Sampler::seeded(7);
        let err = rejection_draw(10.0, INF, &mut s).unwrap_err();
        assert!(matches!(err, KernelError::NonConvergence(_)));
    }
}
