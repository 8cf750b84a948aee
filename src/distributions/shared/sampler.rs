// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Sampling Module** - *Explicit Pseudorandom Sampling Context*
//!
//! Every `*_sample` kernel draws from a [`Sampler`] handed in by the caller rather
//! than from hidden global state. A sampler can wrap the thread-local generator for
//! everyday use, or a seeded `StdRng` when a run has to be replayed exactly.

use rand::distr::Open01;
use rand::rngs::{StdRng, ThreadRng};
use rand::{rng, Rng, SeedableRng};
use std::f64::consts::PI;

/// Pseudorandom sampling context shared by all distribution samplers.
pub struct Sampler<R: Rng = ThreadRng> {
    rng: R,
}

impl Sampler<ThreadRng> {
    /// Creates a new sampler instance with a thread-local pseudorandom number generator.
    #[inline]
    pub fn new() -> Self {
        Sampler { rng: rng() }
    }
}

impl Default for Sampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler<StdRng> {
    /// Creates a deterministic sampler; the same seed replays the same draws.
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Sampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Sampler<R> {
    /// Wraps an existing generator.
    #[inline]
    pub fn from_rng(rng: R) -> Self {
        Sampler { rng }
    }

    /// Uniform draw on the open interval (0, 1).
    ///
    /// Excluding both end points keeps inverse-transform samplers away from the
    /// infinite quantiles at 0 and 1.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.sample(Open01)
    }

    /// Uniform draw on the open interval (`lo`, `hi`). Preconditions: `lo < hi`, both finite.
    #[inline]
    pub fn uniform_between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.uniform()
    }

    /// Generates a single sample from the standard normal distribution N(0, 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        sample_standard_normal(&mut self.rng)
    }

    /// N(`mu`, `sigma`²) draw. Preconditions: `sigma > 0`.
    #[inline]
    pub fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        mu + sigma * self.standard_normal()
    }

    /// Mutable access to the wrapped generator.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // U1 ∈ (0,1], U2 ∈ [0,1)
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE); // avoid log(0)
    let u2: f64 = rng.random::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}
