// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Distribution Registry** - *Name-keyed Dispatch over Scalar-parameter Families*
//!
//! [`DistributionKind`] enumerates every family whose parameters are plain scalar
//! columns and routes the four vectorised operations to the generic kernels with
//! the parameter list supplied as a slice. This is the entry point for hosts that
//! pick a distribution at runtime by name, e.g. an interpreter binding.
//!
//! The normal mixture is not registered: its parameters are component matrices,
//! see [`normal_mixture`](crate::distributions::univariate::normal_mixture).
//!
//! ## Example
//! ```rust,ignore
//! use dist_kernels::distributions::registry::DistributionKind;
//! use dist_kernels::distributions::shared::broadcast::Column;
//!
//! let kind: DistributionKind = "gumbel".parse()?;
//! let x = [0.0, 1.0];
//! let out = kind.cumulative(Column::from(&x), &[Column::from(&[0.0]), Column::from(&[1.0])], true, false)?;
//! ```

use core::fmt;
use core::str::FromStr;

use minarrow::FloatArray;
use rand::Rng;

use crate::distributions::shared::broadcast::Column;
use crate::distributions::shared::sampler::Sampler;
use crate::distributions::univariate::common::kernel::{
    cumulative_kernel, density_kernel, quantile_kernel, sample_kernel,
};
use crate::distributions::univariate::common::Family;
use crate::distributions::univariate::discrete_uniform::DiscreteUniform;
use crate::distributions::univariate::discrete_weibull::DiscreteWeibull;
use crate::distributions::univariate::gompertz::Gompertz;
use crate::distributions::univariate::gumbel::Gumbel;
use crate::distributions::univariate::kumaraswamy::Kumaraswamy;
use crate::distributions::univariate::lomax::Lomax;
use crate::distributions::univariate::power::Power;
use crate::distributions::univariate::truncated_normal::TruncatedNormal;
use crate::errors::KernelError;

/// Scalar-parameter distribution families available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    DiscreteUniform,
    DiscreteWeibull,
    Gompertz,
    Gumbel,
    Kumaraswamy,
    Lomax,
    Power,
    TruncatedNormal,
}

/// Binds `$fam` to the family type and `$k` to its arity for the matched kind.
macro_rules! with_family {
    ($kind:expr, $fam:ident, $k:ident => $body:expr) => {
        match $kind {
            DistributionKind::DiscreteUniform => {
                type $fam = DiscreteUniform;
                const $k: usize = 2;
                $body
            }
            DistributionKind::DiscreteWeibull => {
                type $fam = DiscreteWeibull;
                const $k: usize = 2;
                $body
            }
            DistributionKind::Gompertz => {
                type $fam = Gompertz;
                const $k: usize = 2;
                $body
            }
            DistributionKind::Gumbel => {
                type $fam = Gumbel;
                const $k: usize = 2;
                $body
            }
            DistributionKind::Kumaraswamy => {
                type $fam = Kumaraswamy;
                const $k: usize = 2;
                $body
            }
            DistributionKind::Lomax => {
                type $fam = Lomax;
                const $k: usize = 2;
                $body
            }
            DistributionKind::Power => {
                type $fam = Power;
                const $k: usize = 2;
                $body
            }
            DistributionKind::TruncatedNormal => {
                type $fam = TruncatedNormal;
                const $k: usize = 4;
                $body
            }
        }
    };
}

/// Public function names of one family, in operation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoints {
    pub density: &'static str,
    pub cumulative: &'static str,
    pub quantile: &'static str,
    pub sample: &'static str,
}

impl DistributionKind {
    /// Every registered family.
    pub const ALL: [DistributionKind; 8] = [
        DistributionKind::DiscreteUniform,
        DistributionKind::DiscreteWeibull,
        DistributionKind::Gompertz,
        DistributionKind::Gumbel,
        DistributionKind::Kumaraswamy,
        DistributionKind::Lomax,
        DistributionKind::Power,
        DistributionKind::TruncatedNormal,
    ];

    /// Canonical name, also the prefix of the family's public functions.
    pub fn name(self) -> &'static str {
        with_family!(self, F, K => <F as Family<K>>::NAME)
    }

    /// Parameter names in call order.
    pub fn param_names(self) -> &'static [&'static str] {
        with_family!(self, F, K => {
            const NAMES: &[&str] = &<F as Family<K>>::PARAMS;
            NAMES
        })
    }

    #[inline]
    pub fn arity(self) -> usize {
        self.param_names().len()
    }

    /// Names of the four vectorised functions, used as the diagnostic prefix.
    pub fn entry_points(self) -> EntryPoints {
        match self {
            DistributionKind::DiscreteUniform => EntryPoints {
                density: "discrete_uniform_pmf",
                cumulative: "discrete_uniform_cdf",
                quantile: "discrete_uniform_quantile",
                sample: "discrete_uniform_sample",
            },
            DistributionKind::DiscreteWeibull => EntryPoints {
                density: "discrete_weibull_pmf",
                cumulative: "discrete_weibull_cdf",
                quantile: "discrete_weibull_quantile",
                sample: "discrete_weibull_sample",
            },
            DistributionKind::Gompertz => EntryPoints {
                density: "gompertz_pdf",
                cumulative: "gompertz_cdf",
                quantile: "gompertz_quantile",
                sample: "gompertz_sample",
            },
            DistributionKind::Gumbel => EntryPoints {
                density: "gumbel_pdf",
                cumulative: "gumbel_cdf",
                quantile: "gumbel_quantile",
                sample: "gumbel_sample",
            },
            DistributionKind::Kumaraswamy => EntryPoints {
                density: "kumaraswamy_pdf",
                cumulative: "kumaraswamy_cdf",
                quantile: "kumaraswamy_quantile",
                sample: "kumaraswamy_sample",
            },
            DistributionKind::Lomax => EntryPoints {
                density: "lomax_pdf",
                cumulative: "lomax_cdf",
                quantile: "lomax_quantile",
                sample: "lomax_sample",
            },
            DistributionKind::Power => EntryPoints {
                density: "power_pdf",
                cumulative: "power_cdf",
                quantile: "power_quantile",
                sample: "power_sample",
            },
            DistributionKind::TruncatedNormal => EntryPoints {
                density: "truncated_normal_pdf",
                cumulative: "truncated_normal_cdf",
                quantile: "truncated_normal_quantile",
                sample: "truncated_normal_sample",
            },
        }
    }

    /// Density (mass for the discrete families) of `x`.
    pub fn density<'a>(
        self,
        x: Column<'a>,
        params: &[Column<'a>],
        log_prob: bool,
    ) -> Result<FloatArray<f64>, KernelError> {
        let fname = self.entry_points().density;
        with_family!(self, F, K => {
            density_kernel::<F, K>(fname, x, fixed_params(fname, params)?, log_prob)
        })
    }

    pub fn cumulative<'a>(
        self,
        x: Column<'a>,
        params: &[Column<'a>],
        lower_tail: bool,
        log_prob: bool,
    ) -> Result<FloatArray<f64>, KernelError> {
        let fname = self.entry_points().cumulative;
        with_family!(self, F, K => {
            cumulative_kernel::<F, K>(fname, x, fixed_params(fname, params)?, lower_tail, log_prob)
        })
    }

    pub fn quantile<'a>(
        self,
        p: Column<'a>,
        params: &[Column<'a>],
        lower_tail: bool,
        log_prob: bool,
    ) -> Result<FloatArray<f64>, KernelError> {
        let fname = self.entry_points().quantile;
        with_family!(self, F, K => {
            quantile_kernel::<F, K>(fname, p, fixed_params(fname, params)?, lower_tail, log_prob)
        })
    }

    pub fn sample<'a, R: Rng>(
        self,
        n: usize,
        params: &[Column<'a>],
        sampler: &mut Sampler<R>,
    ) -> Result<FloatArray<f64>, KernelError> {
        let fname = self.entry_points().sample;
        with_family!(self, F, K => {
            sample_kernel::<F, R, K>(fname, n, fixed_params(fname, params)?, sampler)
        })
    }
}

/// Converts a parameter slice to the family's fixed arity.
fn fixed_params<'a, const K: usize>(
    fname: &str,
    params: &[Column<'a>],
) -> Result<[Column<'a>; K], KernelError> {
    params.try_into().map_err(|_| {
        KernelError::InvalidArguments(format!(
            "{fname}: expected {K} parameters, got {}",
            params.len()
        ))
    })
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dunif" | "discrete_uniform" => Ok(DistributionKind::DiscreteUniform),
            "dweibull" | "discrete_weibull" => Ok(DistributionKind::DiscreteWeibull),
            "gompertz" => Ok(DistributionKind::Gompertz),
            "gumbel" => Ok(DistributionKind::Gumbel),
            "kumar" | "kumaraswamy" => Ok(DistributionKind::Kumaraswamy),
            "lomax" => Ok(DistributionKind::Lomax),
            "power" => Ok(DistributionKind::Power),
            "tnorm" | "truncated_normal" => Ok(DistributionKind::TruncatedNormal),
            other => Err(KernelError::InvalidArguments(format!(
                "unknown distribution '{other}'"
            ))),
        }
    }
}
