// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Compile-time constants controlling sampler behaviour.

use crate::distributions::shared::constants::SQRT_2PI;

/// Maximum number of rejected proposals the truncated normal sampler will draw
/// for a single variate before giving up with `KernelError::NonConvergence`.
///
/// For any truncation window holding a non-negligible share of the parent normal
/// the expected number of proposals is a small constant, so this is only reached
/// for windows deep in a tail where the wide-band branch almost never lands.
pub const TRUNCATED_NORMAL_MAX_REJECTIONS: usize = 1 << 22;

/// Width, in standard deviations, below which the truncated normal sampler uses a
/// uniform envelope instead of drawing from the parent normal: √(2π).
pub const NARROW_BAND_WIDTH: f64 = SQRT_2PI;
