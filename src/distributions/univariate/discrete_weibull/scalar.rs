// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the discrete Weibull distribution (Nakagawa–Osaki, 1975).
//!
//! - f(x) = q^(x^β) − q^((x+1)^β) for x = 0, 1, 2, …
//! - S(x) = q^((⌊x⌋+1)^β)
//! - F⁻¹(p) = ⌈(ln(1−p)/ln q)^(1/β) − 1⌉

use crate::distributions::univariate::common::Family;
use crate::utils::is_integer;

/// Discrete Weibull family, parameters `[q, beta]`.
pub struct DiscreteWeibull;

impl DiscreteWeibull {
    /// ln S(x) for x ≥ 0.
    #[inline(always)]
    fn log_survival(x: f64, q: f64, beta: f64) -> f64 {
        q.ln() * (x.floor() + 1.0).powf(beta)
    }
}

impl Family<2> for DiscreteWeibull {
    const NAME: &'static str = "discrete_weibull";
    const PARAMS: [&'static str; 2] = ["q", "beta"];

    #[inline(always)]
    fn in_domain(&[q, beta]: &[f64; 2]) -> bool {
        q > 0.0 && q < 1.0 && beta > 0.0
    }

    #[inline(always)]
    fn pdf(x: f64, &[q, beta]: &[f64; 2]) -> f64 {
        if x < 0.0 || !is_integer(x) {
            return 0.0;
        }
        q.powf(x.powf(beta)) - q.powf((x + 1.0).powf(beta))
    }

    #[inline(always)]
    fn log_pdf(x: f64, params: &[f64; 2]) -> f64 {
        Self::pdf(x, params).ln()
    }

    #[inline(always)]
    fn cdf(x: f64, &[q, beta]: &[f64; 2]) -> f64 {
        if x < 0.0 {
            0.0
        } else if x == f64::INFINITY {
            1.0
        } else {
            -Self::log_survival(x, q, beta).exp_m1()
        }
    }

    #[inline(always)]
    fn sf(x: f64, &[q, beta]: &[f64; 2]) -> f64 {
        if x < 0.0 {
            1.0
        } else if x == f64::INFINITY {
            0.0
        } else {
            Self::log_survival(x, q, beta).exp()
        }
    }

    #[inline(always)]
    fn log_sf(x: f64, &[q, beta]: &[f64; 2]) -> f64 {
        if x < 0.0 {
            0.0
        } else if x == f64::INFINITY {
            f64::NEG_INFINITY
        } else {
            Self::log_survival(x, q, beta)
        }
    }

    #[inline(always)]
    fn quantile(p: f64, &[q, beta]: &[f64; 2]) -> f64 {
        if p == 0.0 {
            return 0.0;
        }
        (((-p).ln_1p() / q.ln()).powf(1.0 / beta) - 1.0)
            .ceil()
            .max(0.0)
    }
}
