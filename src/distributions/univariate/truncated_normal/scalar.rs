// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar formulas and rejection sampler of the normal distribution truncated to `[a, b]`.
//!
//! With z = (x − μ)/σ, zₐ = (a − μ)/σ and z_b = (b − μ)/σ:
//! - f(x) = φ(z) / (σ·(Φ(z_b) − Φ(zₐ)))
//! - F(x) = (Φ(z) − Φ(zₐ)) / (Φ(z_b) − Φ(zₐ))
//! - F⁻¹(p) = μ + σ·Φ⁻¹(Φ(zₐ) + p·(Φ(z_b) − Φ(zₐ)))
//!
//! Windows entirely right of the mean (zₐ > 0) are evaluated through the survival
//! function instead, where Φ(zₐ) would round to 1 and the window mass to 0. The
//! log-scale CDF and survival function work with ln Φ throughout, so they stay
//! finite in windows whose mass underflows.

use rand::Rng;

use crate::config::{NARROW_BAND_WIDTH, TRUNCATED_NORMAL_MAX_REJECTIONS};
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::shared::scalar::{
    std_normal_cdf, std_normal_log_cdf, std_normal_log_pdf, std_normal_log_sf,
    std_normal_quantile, std_normal_sf,
};
use crate::distributions::univariate::common::Family;
use crate::errors::KernelError;

/// Truncated normal family, parameters `[mu, sigma, a, b]`.
pub struct TruncatedNormal;

/// Standardised truncation window.
#[derive(Debug, Clone, Copy)]
struct Window {
    za: f64,
    zb: f64,
    /// Evaluate in the upper tail (`za > 0`).
    upper: bool,
    /// Normal probability mass inside the window.
    mass: f64,
}

impl Window {
    #[inline(always)]
    fn new(&[mu, sigma, a, b]: &[f64; 4]) -> Self {
        let za = (a - mu) / sigma;
        let zb = (b - mu) / sigma;
        let upper = za > 0.0;
        let mass = if upper {
            std_normal_sf(za) - std_normal_sf(zb)
        } else {
            std_normal_cdf(zb) - std_normal_cdf(za)
        };
        Window {
            za,
            zb,
            upper,
            mass,
        }
    }

    /// Mass between `za` and `z`.
    #[inline(always)]
    fn below(&self, z: f64) -> f64 {
        if self.upper {
            std_normal_sf(self.za) - std_normal_sf(z)
        } else {
            std_normal_cdf(z) - std_normal_cdf(self.za)
        }
    }

    /// Mass between `z` and `zb`.
    #[inline(always)]
    fn above(&self, z: f64) -> f64 {
        if self.upper {
            std_normal_sf(z) - std_normal_sf(self.zb)
        } else {
            std_normal_cdf(self.zb) - std_normal_cdf(z)
        }
    }

    /// ln of the mass between `za` and `z`.
    #[inline(always)]
    fn log_below(&self, z: f64) -> f64 {
        if self.upper {
            log_diff_exp(std_normal_log_sf(self.za), std_normal_log_sf(z))
        } else {
            log_diff_exp(std_normal_log_cdf(z), std_normal_log_cdf(self.za))
        }
    }

    /// ln of the mass between `z` and `zb`.
    #[inline(always)]
    fn log_above(&self, z: f64) -> f64 {
        if self.upper {
            log_diff_exp(std_normal_log_sf(z), std_normal_log_sf(self.zb))
        } else {
            log_diff_exp(std_normal_log_cdf(self.zb), std_normal_log_cdf(z))
        }
    }

    #[inline(always)]
    fn log_mass(&self) -> f64 {
        self.log_above(self.za)
    }
}

/// ln(eʰⁱ − eˡᵒ) for `hi >= lo`.
#[inline(always)]
fn log_diff_exp(hi: f64, lo: f64) -> f64 {
    if lo == f64::NEG_INFINITY {
        return hi;
    }
    hi + (-(lo - hi).exp_m1()).ln()
}

impl Family<4> for TruncatedNormal {
    const NAME: &'static str = "truncated_normal";
    const PARAMS: [&'static str; 4] = ["mu", "sigma", "a", "b"];

    #[inline(always)]
    fn in_domain(&[mu, sigma, a, b]: &[f64; 4]) -> bool {
        mu.is_finite() && sigma > 0.0 && sigma.is_finite() && a < b
    }

    #[inline(always)]
    fn log_pdf(x: f64, params: &[f64; 4]) -> f64 {
        let [mu, sigma, a, b] = *params;
        if x < a || x > b || !x.is_finite() {
            return f64::NEG_INFINITY;
        }
        let w = Window::new(params);
        std_normal_log_pdf((x - mu) / sigma) - sigma.ln() - w.mass.ln()
    }

    #[inline(always)]
    fn cdf(x: f64, params: &[f64; 4]) -> f64 {
        let [mu, sigma, a, b] = *params;
        if x <= a {
            return 0.0;
        }
        if x >= b {
            return 1.0;
        }
        let w = Window::new(params);
        (w.below((x - mu) / sigma) / w.mass).clamp(0.0, 1.0)
    }

    #[inline(always)]
    fn sf(x: f64, params: &[f64; 4]) -> f64 {
        let [mu, sigma, a, b] = *params;
        if x <= a {
            return 1.0;
        }
        if x >= b {
            return 0.0;
        }
        let w = Window::new(params);
        (w.above((x - mu) / sigma) / w.mass).clamp(0.0, 1.0)
    }

    #[inline(always)]
    fn log_cdf(x: f64, params: &[f64; 4]) -> f64 {
        let [mu, sigma, a, b] = *params;
        if x <= a {
            return f64::NEG_INFINITY;
        }
        if x >= b {
            return 0.0;
        }
        let w = Window::new(params);
        (w.log_below((x - mu) / sigma) - w.log_mass()).min(0.0)
    }

    #[inline(always)]
    fn log_sf(x: f64, params: &[f64; 4]) -> f64 {
        let [mu, sigma, a, b] = *params;
        if x <= a {
            return 0.0;
        }
        if x >= b {
            return f64::NEG_INFINITY;
        }
        let w = Window::new(params);
        (w.log_above((x - mu) / sigma) - w.log_mass()).min(0.0)
    }

    #[inline(always)]
    fn quantile(p: f64, params: &[f64; 4]) -> f64 {
        let [mu, sigma, a, b] = *params;
        if p == 0.0 {
            return a;
        }
        if p == 1.0 {
            return b;
        }
        let w = Window::new(params);
        let z = if w.upper {
            -std_normal_quantile(std_normal_sf(w.za) - p * w.mass)
        } else {
            std_normal_quantile(std_normal_cdf(w.za) + p * w.mass)
        };
        (mu + sigma * z).clamp(a, b)
    }

    /// Rejection sampling; see [`rejection_draw`].
    #[inline(always)]
    fn sample<R: Rng>(params: &[f64; 4], sampler: &mut Sampler<R>) -> Result<f64, KernelError> {
        let [mu, sigma, a, b] = *params;
        let z = rejection_draw((a - mu) / sigma, (b - mu) / sigma, sampler)?;
        Ok(mu + sigma * z)
    }
}

/// Draws a standard normal variate restricted to `(za, zb)`.
///
/// The branch is fixed on entry. Windows narrower than `NARROW_BAND_WIDTH` use a
/// uniform envelope with an acceptance ratio anchored at the window point closest
/// to zero; wider windows draw plain standard normals until one lands inside.
///
/// Gives up with `NonConvergence` after `TRUNCATED_NORMAL_MAX_REJECTIONS` proposals.
pub(crate) fn rejection_draw<R: Rng>(
    za: f64,
    zb: f64,
    sampler: &mut Sampler<R>,
) -> Result<f64, KernelError> {
    if zb - za < NARROW_BAND_WIDTH {
        let log_ratio = |r: f64| {
            if za > 0.0 {
                (za * za - r * r) / 2.0
            } else if zb < 0.0 {
                (zb * zb - r * r) / 2.0
            } else {
                -r * r / 2.0
            }
        };
        for _ in 0..TRUNCATED_NORMAL_MAX_REJECTIONS {
            let r = sampler.uniform_between(za, zb);
            let u = sampler.uniform();
            if u <= log_ratio(r).exp() {
                return Ok(r);
            }
        }
    } else {
        for _ in 0..TRUNCATED_NORMAL_MAX_REJECTIONS {
            let r = sampler.standard_normal();
            if r > za && r < zb {
                return Ok(r);
            }
        }
    }
    log::debug!(
        "truncated_normal_sample: rejection cap of {TRUNCATED_NORMAL_MAX_REJECTIONS} reached for window ({za}, {zb})"
    );
    Err(KernelError::NonConvergence(format!(
        "truncated_normal_sample: no proposal accepted in {TRUNCATED_NORMAL_MAX_REJECTIONS} draws for standardised window ({za}, {zb})"
    )))
}
