// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **dist-kernels** - *Vectorised Probability Distribution Kernels*
//!
//! Density, cumulative, quantile and sampling kernels for a set of univariate
//! distributions, operating on `minarrow` arrays with modular recycling of
//! inputs and Arrow null propagation.
//!
//! ## Families
//! Discrete Uniform, Discrete Weibull, Gompertz, Gumbel, Kumaraswamy, Lomax,
//! Power, Truncated Normal and finite Mixtures of Normals.
//!
//! ## Example
//! ```rust,ignore
//! use dist_kernels::distributions::univariate::gumbel::{gumbel_cdf, gumbel_quantile};
//!
//! let q = gumbel_quantile(&[0.5], &[0.0], &[1.0], true, false)?;
//! let p = gumbel_cdf(&q, &[0.0], &[1.0], true, false)?;
//! ```
//!
//! Diagnostics go through the `log` facade; install any logger to see them.

pub mod config;
pub mod distributions;
pub mod errors;
pub mod utils;
