// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the Lomax (Pareto type II) distribution.
//!
//! - f(x) = λκ / (1 + λx)^(κ+1), x > 0
//! - S(x) = (1 + λx)^(−κ)
//! - F⁻¹(p) = ((1 − p)^(−1/κ) − 1) / λ

use crate::distributions::univariate::common::Family;

/// Lomax family, parameters `[lambda, kappa]`.
pub struct Lomax;

impl Family<2> for Lomax {
    const NAME: &'static str = "lomax";
    const PARAMS: [&'static str; 2] = ["lambda", "kappa"];

    #[inline(always)]
    fn in_domain(&[lambda, kappa]: &[f64; 2]) -> bool {
        lambda > 0.0 && kappa > 0.0
    }

    #[inline(always)]
    fn log_pdf(x: f64, &[lambda, kappa]: &[f64; 2]) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        lambda.ln() + kappa.ln() - (kappa + 1.0) * (lambda * x).ln_1p()
    }

    #[inline(always)]
    fn cdf(x: f64, params: &[f64; 2]) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -Self::log_sf(x, params).exp_m1()
    }

    #[inline(always)]
    fn sf(x: f64, params: &[f64; 2]) -> f64 {
        Self::log_sf(x, params).exp()
    }

    #[inline(always)]
    fn log_sf(x: f64, &[lambda, kappa]: &[f64; 2]) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -kappa * (lambda * x).ln_1p()
    }

    #[inline(always)]
    fn quantile(p: f64, &[lambda, kappa]: &[f64; 2]) -> f64 {
        (-(-p).ln_1p() / kappa).exp_m1() / lambda
    }
}
