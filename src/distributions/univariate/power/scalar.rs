// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the power distribution on `(0, alpha)`.
//!
//! - f(x) = β·x^(β−1) / α^β
//! - F(x) = (x/α)^β
//! - F⁻¹(p) = α·p^(1/β)

use crate::distributions::univariate::common::Family;

/// Power family, parameters `[alpha, beta]`.
pub struct Power;

impl Family<2> for Power {
    const NAME: &'static str = "power";
    const PARAMS: [&'static str; 2] = ["alpha", "beta"];

    #[inline(always)]
    fn in_domain(&[alpha, beta]: &[f64; 2]) -> bool {
        alpha > 0.0 && beta > 0.0
    }

    #[inline(always)]
    fn log_pdf(x: f64, &[alpha, beta]: &[f64; 2]) -> f64 {
        if x <= 0.0 || x >= alpha {
            return f64::NEG_INFINITY;
        }
        beta.ln() + (beta - 1.0) * x.ln() - beta * alpha.ln()
    }

    #[inline(always)]
    fn cdf(x: f64, params: &[f64; 2]) -> f64 {
        Self::log_cdf(x, params).exp()
    }

    #[inline(always)]
    fn log_cdf(x: f64, &[alpha, beta]: &[f64; 2]) -> f64 {
        if x <= 0.0 {
            f64::NEG_INFINITY
        } else if x >= alpha {
            0.0
        } else {
            beta * (x.ln() - alpha.ln())
        }
    }

    #[inline(always)]
    fn sf(x: f64, params: &[f64; 2]) -> f64 {
        -Self::log_cdf(x, params).exp_m1()
    }

    #[inline(always)]
    fn quantile(p: f64, &[alpha, beta]: &[f64; 2]) -> f64 {
        alpha * p.powf(1.0 / beta)
    }
}
