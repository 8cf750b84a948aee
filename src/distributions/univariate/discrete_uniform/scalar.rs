// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas of the discrete uniform distribution on the integers `min..=max`.

use crate::distributions::univariate::common::Family;
use crate::utils::is_integer;

/// Discrete uniform family, parameters `[min, max]`.
pub struct DiscreteUniform;

impl Family<2> for DiscreteUniform {
    const NAME: &'static str = "discrete_uniform";
    const PARAMS: [&'static str; 2] = ["min", "max"];

    #[inline(always)]
    fn in_domain(&[min, max]: &[f64; 2]) -> bool {
        is_integer(min) && is_integer(max) && min <= max
    }

    #[inline(always)]
    fn pdf(x: f64, &[min, max]: &[f64; 2]) -> f64 {
        if x < min || x > max || !is_integer(x) {
            0.0
        } else {
            1.0 / (max - min + 1.0)
        }
    }

    #[inline(always)]
    fn log_pdf(x: f64, params: &[f64; 2]) -> f64 {
        Self::pdf(x, params).ln()
    }

    #[inline(always)]
    fn cdf(x: f64, &[min, max]: &[f64; 2]) -> f64 {
        if x < min {
            0.0
        } else if x >= max {
            1.0
        } else {
            (x.floor() - min + 1.0) / (max - min + 1.0)
        }
    }

    #[inline(always)]
    fn sf(x: f64, &[min, max]: &[f64; 2]) -> f64 {
        if x < min {
            1.0
        } else if x >= max {
            0.0
        } else {
            (max - x.floor()) / (max - min + 1.0)
        }
    }

    /// `ceil(p·(max−min+1) + min − 1)`; `min` when `p = 0` or the range is a single point.
    #[inline(always)]
    fn quantile(p: f64, &[min, max]: &[f64; 2]) -> f64 {
        if p == 0.0 || min == max {
            return min;
        }
        (p * (max - min + 1.0) + min - 1.0).ceil()
    }
}
