// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the Gumbel (type I extreme value) distribution.
//!
//! With z = (x − μ)/σ:
//! - f(x) = exp(−(z + e^{−z})) / σ
//! - F(x) = exp(−e^{−z})
//! - F⁻¹(p) = μ − σ·ln(−ln p)

use crate::distributions::univariate::common::Family;

/// Gumbel family, parameters `[mu, sigma]`.
pub struct Gumbel;

impl Family<2> for Gumbel {
    const NAME: &'static str = "gumbel";
    const PARAMS: [&'static str; 2] = ["mu", "sigma"];

    #[inline(always)]
    fn in_domain(&[_, sigma]: &[f64; 2]) -> bool {
        sigma > 0.0
    }

    #[inline(always)]
    fn log_pdf(x: f64, &[mu, sigma]: &[f64; 2]) -> f64 {
        if !x.is_finite() {
            return f64::NEG_INFINITY;
        }
        let z = (x - mu) / sigma;
        -(z + (-z).exp()) - sigma.ln()
    }

    #[inline(always)]
    fn cdf(x: f64, params: &[f64; 2]) -> f64 {
        Self::log_cdf(x, params).exp()
    }

    #[inline(always)]
    fn log_cdf(x: f64, &[mu, sigma]: &[f64; 2]) -> f64 {
        -(-(x - mu) / sigma).exp()
    }

    #[inline(always)]
    fn sf(x: f64, params: &[f64; 2]) -> f64 {
        -Self::log_cdf(x, params).exp_m1()
    }

    #[inline(always)]
    fn quantile(p: f64, &[mu, sigma]: &[f64; 2]) -> f64 {
        mu - sigma * (-p.ln()).ln()
    }
}
