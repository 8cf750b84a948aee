// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Lane and Value Helpers*
//!
//! Small helpers shared by the broadcasting driver and the scalar formulas.

use minarrow::Bitmask;

/// True when lane `idx` is null in `mask`, or when the value itself is NaN.
///
/// NaN inputs are treated as missing rather than invalid, so they propagate
/// without raising a domain warning.
#[inline(always)]
pub fn is_missing(value: f64, mask: Option<&Bitmask>, idx: usize) -> bool {
    if value.is_nan() {
        return true;
    }
    match mask {
        Some(m) => !m.get(idx),
        None => false,
    }
}

/// True for finite values with no fractional part.
#[inline(always)]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x.floor() == x
}
