// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Primitives Module** - *Standard Normal Density, CDF and Quantile*
//!
//! Scalar normal building blocks used by the truncated normal and the normal mixture.
//! The complementary error function and its inverse come from `statrs`; everything
//! else is expressed in terms of them with the sign split at zero, which keeps full
//! relative precision in both tails.

use statrs::function::erf::{erfc, erfc_inv};

use crate::distributions::shared::constants::{HALF_LOG_TWO_PI, SQRT_2, SQRT_2PI};

/// Evaluates the standard normal probability density function φ(z).
#[inline(always)]
pub fn std_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / SQRT_2PI
}

/// Natural log of the standard normal density, ln φ(z).
#[inline(always)]
pub fn std_normal_log_pdf(z: f64) -> f64 {
    -0.5 * z * z - HALF_LOG_TWO_PI
}

/// Evaluates the standard normal cumulative distribution function Φ(z).
///
/// Computed as `0.5·erfc(–z/√2)` on the left and `1 – 0.5·erfc(z/√2)` on the right.
#[inline(always)]
pub fn std_normal_cdf(z: f64) -> f64 {
    if z < 0.0 {
        0.5 * erfc(-z / SQRT_2)
    } else {
        1.0 - 0.5 * erfc(z / SQRT_2)
    }
}

/// Standard normal survival function 1 − Φ(z), without cancellation in the right tail.
#[inline(always)]
pub fn std_normal_sf(z: f64) -> f64 {
    std_normal_cdf(-z)
}

/// Natural log of the standard normal CDF, ln Φ(z), finite far beyond the point
/// where Φ(z) underflows.
///
/// Below z = −30 the asymptotic series
/// `Φ(z) = φ(z)/(−z) · (1 − z⁻² + 3z⁻⁴ − 15z⁻⁶ + 105z⁻⁸ − 945z⁻¹⁰ + …)` is used,
/// whose truncation error there is below 1e-13. Above zero the result is
/// `ln(1 − Φ(−z))` through `ln_1p`.
#[inline(always)]
pub fn std_normal_log_cdf(z: f64) -> f64 {
    if z > 0.0 {
        return (-std_normal_sf(z)).ln_1p();
    }
    if z > -30.0 {
        return std_normal_cdf(z).ln();
    }
    let w = 1.0 / (z * z);
    let series = w * (-1.0 + w * (3.0 + w * (-15.0 + w * (105.0 - 945.0 * w))));
    -0.5 * z * z - HALF_LOG_TWO_PI - (-z).ln() + series.ln_1p()
}

/// Natural log of the standard normal survival function, ln(1 − Φ(z)).
#[inline(always)]
pub fn std_normal_log_sf(z: f64) -> f64 {
    std_normal_log_cdf(-z)
}

/// Inverse standard normal CDF Φ⁻¹(p).
///
/// - `p = 0` returns `-∞`, `p = 1` returns `+∞`
/// - `p` outside `[0, 1]` or NaN returns NaN
///
/// Uses `Φ⁻¹(p) = −√2 · erfc⁻¹(2p)` on the lower half and its mirror image on the
/// upper half so that both tails keep their relative accuracy.
#[inline(always)]
pub fn std_normal_quantile(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if p < 0.5 {
        -SQRT_2 * erfc_inv(2.0 * p)
    } else {
        SQRT_2 * erfc_inv(2.0 * (1.0 - p))
    }
}

/// Normal density with location `mu` and scale `sigma`.
#[inline(always)]
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    std_normal_pdf((x - mu) / sigma) / sigma
}

/// Normal log-density with location `mu` and scale `sigma`.
#[inline(always)]
pub fn normal_log_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    std_normal_log_pdf((x - mu) / sigma) - sigma.ln()
}

/// Normal CDF with location `mu` and scale `sigma`.
#[inline(always)]
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    std_normal_cdf((x - mu) / sigma)
}

/// Normal survival function with location `mu` and scale `sigma`.
#[inline(always)]
pub fn normal_sf(x: f64, mu: f64, sigma: f64) -> f64 {
    std_normal_sf((x - mu) / sigma)
}

/// Normal log-CDF with location `mu` and scale `sigma`.
#[inline(always)]
pub fn normal_log_cdf(x: f64, mu: f64, sigma: f64) -> f64 {
    std_normal_log_cdf((x - mu) / sigma)
}

/// Normal log survival function with location `mu` and scale `sigma`.
#[inline(always)]
pub fn normal_log_sf(x: f64, mu: f64, sigma: f64) -> f64 {
    std_normal_log_sf((x - mu) / sigma)
}
