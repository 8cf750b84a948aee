// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the Gompertz distribution with shape `a` and rate `b`.
//!
//! - f(x) = a·exp(bx − a/b·(e^{bx} − 1)), x ≥ 0
//! - S(x) = exp(−a/b·(e^{bx} − 1))
//! - F⁻¹(p) = ln(1 − b/a·ln(1 − p)) / b
//!
//! `expm1`/`ln_1p` carry the small-argument ends of each formula.

use crate::distributions::univariate::common::Family;

/// Gompertz family, parameters `[a, b]`.
pub struct Gompertz;

impl Gompertz {
    /// ln S(x) = −a/b·expm1(bx) for finite x ≥ 0.
    #[inline(always)]
    fn cumulative_hazard(x: f64, a: f64, b: f64) -> f64 {
        a / b * (b * x).exp_m1()
    }
}

impl Family<2> for Gompertz {
    const NAME: &'static str = "gompertz";
    const PARAMS: [&'static str; 2] = ["a", "b"];

    #[inline(always)]
    fn in_domain(&[a, b]: &[f64; 2]) -> bool {
        a > 0.0 && b > 0.0
    }

    #[inline(always)]
    fn log_pdf(x: f64, &[a, b]: &[f64; 2]) -> f64 {
        if x < 0.0 || !x.is_finite() {
            return f64::NEG_INFINITY;
        }
        a.ln() + b * x - Self::cumulative_hazard(x, a, b)
    }

    #[inline(always)]
    fn cdf(x: f64, &[a, b]: &[f64; 2]) -> f64 {
        if x < 0.0 {
            0.0
        } else if !x.is_finite() {
            1.0
        } else {
            -(-Self::cumulative_hazard(x, a, b)).exp_m1()
        }
    }

    #[inline(always)]
    fn sf(x: f64, params: &[f64; 2]) -> f64 {
        Self::log_sf(x, params).exp()
    }

    #[inline(always)]
    fn log_sf(x: f64, &[a, b]: &[f64; 2]) -> f64 {
        if x < 0.0 {
            0.0
        } else if !x.is_finite() {
            f64::NEG_INFINITY
        } else {
            -Self::cumulative_hazard(x, a, b)
        }
    }

    #[inline(always)]
    fn quantile(p: f64, &[a, b]: &[f64; 2]) -> f64 {
        (-b / a * (-p).ln_1p()).ln_1p() / b
    }
}
