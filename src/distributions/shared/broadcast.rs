// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Broadcasting Driver** - *Index-wise Modular Recycling*
//!
//! Every vectorised entry point aligns its inputs with one rule: the output has the
//! length of the longest input, and output lane `i` reads lane `i % len(v)` of every
//! input `v`. A length-1 input therefore behaves as a scalar without any special
//! casing. Zero-length inputs cannot be recycled and are rejected up front.
//!
//! ## Missing values
//! A lane is missing when its validity bit is cleared or when the value is NaN.
//! Missing lanes are reported as `None` by [`Broadcast::row`] so that kernels can
//! propagate them before any parameter-domain check is made.

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::errors::KernelError;
use crate::utils::is_missing;

/// Borrowed input vector: values plus an optional Arrow validity mask.
#[derive(Clone, Copy)]
pub struct Column<'a> {
    data: &'a [f64],
    mask: Option<&'a Bitmask>,
}

impl<'a> Column<'a> {
    /// Wraps `data` with an optional validity mask (bit set = valid).
    #[inline]
    pub fn new(data: &'a [f64], mask: Option<&'a Bitmask>) -> Self {
        Column { data, mask }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &'a [f64] {
        self.data
    }

    #[inline]
    pub fn mask(&self) -> Option<&'a Bitmask> {
        self.mask
    }

    /// Value at recycled position `i`, or `None` when that lane is missing.
    ///
    /// An empty column has no lanes, so every position reads as missing.
    #[inline(always)]
    pub fn recycled(&self, i: usize) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        let idx = recycle(i, self.data.len());
        let v = self.data[idx];
        if is_missing(v, self.mask, idx) {
            None
        } else {
            Some(v)
        }
    }
}

impl<'a> From<&'a [f64]> for Column<'a> {
    fn from(data: &'a [f64]) -> Self {
        Column::new(data, None)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Column<'a> {
    fn from(data: &'a [f64; N]) -> Self {
        Column::new(data.as_slice(), None)
    }
}

impl<'a> From<&'a Vec<f64>> for Column<'a> {
    fn from(data: &'a Vec<f64>) -> Self {
        Column::new(data.as_slice(), None)
    }
}

impl<'a> From<&'a Vec64<f64>> for Column<'a> {
    fn from(data: &'a Vec64<f64>) -> Self {
        Column::new(data.as_slice(), None)
    }
}

impl<'a> From<&'a FloatArray<f64>> for Column<'a> {
    fn from(arr: &'a FloatArray<f64>) -> Self {
        Column::new(&arr.data[..], arr.null_mask.as_ref())
    }
}

/// Source lane of output position `i` for an input of length `len`.
#[inline(always)]
pub fn recycle(i: usize, len: usize) -> usize {
    i % len
}

/// Output length of a recycled call: the longest input length.
///
/// Any zero-length input is a structural error, reported with its argument position.
pub fn broadcast_len(fname: &str, lens: &[usize]) -> Result<usize, KernelError> {
    if let Some(pos) = lens.iter().position(|&l| l == 0) {
        return Err(KernelError::EmptyInput(format!(
            "{fname}: argument {pos} has length 0"
        )));
    }
    Ok(lens.iter().copied().max().unwrap_or(0))
}

/// Recycling view over an optional subject column (x or p) and `K` parameter columns.
#[derive(Clone)]
pub struct Broadcast<'a, const K: usize> {
    subject: Option<Column<'a>>,
    params: [Column<'a>; K],
    len: usize,
}

impl<'a, const K: usize> Broadcast<'a, K> {
    /// Aligns a subject column against parameter columns.
    pub fn new(
        fname: &str,
        subject: Column<'a>,
        params: [Column<'a>; K],
    ) -> Result<Self, KernelError> {
        let mut lens = Vec::with_capacity(K + 1);
        lens.push(subject.len());
        lens.extend(params.iter().map(Column::len));
        let len = broadcast_len(fname, &lens)?;
        Ok(Broadcast {
            subject: Some(subject),
            params,
            len,
        })
    }

    /// Aligns parameter columns against a fixed output length, as used by samplers.
    ///
    /// `n` may be zero; the parameter columns may not.
    pub fn with_len(fname: &str, n: usize, params: [Column<'a>; K]) -> Result<Self, KernelError> {
        let lens: Vec<usize> = params.iter().map(Column::len).collect();
        broadcast_len(fname, &lens)?;
        Ok(Broadcast {
            subject: None,
            params,
            len: n,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parameter tuple at output position `i`, or `None` if any parameter lane is missing.
    #[inline(always)]
    pub fn params(&self, i: usize) -> Option<[f64; K]> {
        let mut out = [0.0; K];
        for (slot, col) in out.iter_mut().zip(self.params.iter()) {
            *slot = col.recycled(i)?;
        }
        Some(out)
    }

    /// Subject value and parameter tuple at output position `i`, or `None` when any
    /// contributing lane is missing. Without a subject column the value is NaN.
    #[inline(always)]
    pub fn row(&self, i: usize) -> Option<(f64, [f64; K])> {
        let x = match &self.subject {
            Some(col) => col.recycled(i)?,
            None => f64::NAN,
        };
        Some((x, self.params(i)?))
    }
}

/// Applies the log-scale and tail options of a quantile call to the probability
/// vector itself, before it is recycled against the parameters.
///
/// Each of the `len(p)` entries is transformed once: `exp` for log-scale input, then
/// `1 - p` for the upper tail (computed as `-expm1(log p)` when both are set).
/// Missing lanes stay NaN and keep their validity bit in `p`'s mask.
pub fn transform_probabilities(p: &[f64], lower_tail: bool, log_prob: bool) -> Vec<f64> {
    p.iter()
        .map(|&pi| match (lower_tail, log_prob) {
            (true, false) => pi,
            (true, true) => pi.exp(),
            (false, false) => 1.0 - pi,
            (false, true) => -pi.exp_m1(),
        })
        .collect()
}
