// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Errors raised when a distribution call cannot be vectorised at all.
//!
//! Per-lane problems are *not* errors. A missing input produces a null lane and an
//! out-of-domain parameter produces a NaN lane plus a single warning; only requests
//! that have no well-defined output shape reach this type.
//!
//! ## Error Categories
//! - **Argument Errors**: wrong parameter count, malformed component matrices
//! - **Length Errors**: zero-length inputs, mismatched mixture component counts
//! - **Convergence Errors**: the truncated normal rejection sampler exceeded its cap

use core::fmt;
use std::error::Error;

/// Error type for all distribution kernels.
///
/// Each variant carries a contextual message naming the kernel and the offending
/// argument.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),

    /// Component counts disagree between mixture parameter matrices.
    LengthMismatch(String),

    /// A zero-length input vector was supplied where recycling needs at least one value.
    EmptyInput(String),

    /// An iterative sampler gave up after its configured number of attempts.
    NonConvergence(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            KernelError::NonConvergence(msg) => write!(f, "Did not converge: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for component count mismatches between
/// two mixture parameter matrices.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Component count of the reference matrix
/// * `rhs` - Component count of the disagreeing matrix
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}
