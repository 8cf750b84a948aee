// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Distributions Module** - *Vectorised Density, CDF, Quantile and Sampling*
//!
//! Probability distribution kernels over Arrow-style columns. Every family exposes
//! the same four operations, recycled against the longest input:
//! - **density**: `<family>_pdf` (`_pmf` for discrete families), optionally on the log scale
//! - **cumulative**: `<family>_cdf` with lower/upper tail and log-scale selection
//! - **quantile**: `<family>_quantile`, tail and log options applied to `p` up front
//! - **sample**: `<family>_sample(n, ..)` drawing from an explicit [`Sampler`](shared::sampler::Sampler)
//!
//! ## Lane semantics
//! - A null or NaN input at the recycled position yields a null output lane, silently.
//! - A parameter outside the family's domain yields NaN, and the call logs one
//!   `log::warn!` however many lanes were affected.
//! - A zero-length input, a wrong parameter count or mismatched mixture
//!   component counts abort the call with a [`KernelError`](crate::errors::KernelError).
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis for general scientific
//! use. Results are checked against high-precision references in `./tests`, but
//! users are responsible for verifying that they meet their own accuracy needs.

/// # **Shared Distribution Utilities**
///
/// - **`broadcast`**: recycling driver and input columns
/// - **`constants`**: mathematical constants
/// - **`sampler`**: seedable random source
/// - **`scalar`**: standard normal primitives
pub mod shared {
    pub mod broadcast;
    pub mod constants;
    pub mod sampler;
    pub mod scalar;
}

/// # **Univariate Distributions**
///
/// One module per family, each with its public vectorised API in `mod.rs` and
/// its scalar formulas in `scalar.rs`. `common` holds the [`Family`](univariate::common::Family)
/// trait and the generic kernels.
pub mod univariate {
    pub mod common;
    pub mod discrete_uniform;
    pub mod discrete_weibull;
    pub mod gompertz;
    pub mod gumbel;
    pub mod kumaraswamy;
    pub mod lomax;
    pub mod normal_mixture;
    pub mod power;
    pub mod truncated_normal;
}

pub mod registry;
