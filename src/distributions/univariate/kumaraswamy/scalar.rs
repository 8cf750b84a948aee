// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the Kumaraswamy distribution on the unit interval.
//!
//! - f(x) = a·b·x^(a−1)·(1 − x^a)^(b−1)
//! - S(x) = (1 − x^a)^b
//! - F⁻¹(p) = (1 − (1 − p)^(1/b))^(1/a)

use crate::distributions::univariate::common::Family;

/// Kumaraswamy family, parameters `[a, b]`.
pub struct Kumaraswamy;

impl Kumaraswamy {
    /// ln S(x) = b·ln(1 − x^a) for x in [0, 1].
    #[inline(always)]
    fn log_survival(x: f64, a: f64, b: f64) -> f64 {
        b * (-x.powf(a)).ln_1p()
    }
}

impl Family<2> for Kumaraswamy {
    const NAME: &'static str = "kumaraswamy";
    const PARAMS: [&'static str; 2] = ["a", "b"];

    #[inline(always)]
    fn in_domain(&[a, b]: &[f64; 2]) -> bool {
        a > 0.0 && b > 0.0
    }

    #[inline(always)]
    fn log_pdf(x: f64, &[a, b]: &[f64; 2]) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return f64::NEG_INFINITY;
        }
        // unit exponents contribute nothing, including at the 0·ln(0) endpoints
        let left = if a == 1.0 { 0.0 } else { (a - 1.0) * x.ln() };
        let right = if b == 1.0 {
            0.0
        } else {
            (b - 1.0) * (-x.powf(a)).ln_1p()
        };
        a.ln() + b.ln() + left + right
    }

    #[inline(always)]
    fn cdf(x: f64, &[a, b]: &[f64; 2]) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            -Self::log_survival(x, a, b).exp_m1()
        }
    }

    #[inline(always)]
    fn sf(x: f64, params: &[f64; 2]) -> f64 {
        Self::log_sf(x, params).exp()
    }

    #[inline(always)]
    fn log_sf(x: f64, &[a, b]: &[f64; 2]) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            f64::NEG_INFINITY
        } else {
            Self::log_survival(x, a, b)
        }
    }

    #[inline(always)]
    fn quantile(p: f64, &[a, b]: &[f64; 2]) -> f64 {
        (-((-p).ln_1p() / b).exp_m1()).powf(1.0 / a)
    }
}
