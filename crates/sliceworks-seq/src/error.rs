// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for sliceworks-seq.
use thiserror::Error;

/// Errors returned by [`GrowableSeq`](crate::GrowableSeq) operations.
///
/// A failed operation never modifies the descriptor it was called on.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SeqError {
    /// Malformed construction parameters.
    #[error("invalid argument: capacity {capacity} is smaller than length {len}")]
    InvalidArgument {
        /// Requested length.
        len: usize,
        /// Requested capacity.
        capacity: usize,
    },

    /// An index or range fell outside the valid bounds.
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        /// Offending index (or range end).
        index: usize,
        /// The bound it had to respect.
        bound: usize,
    },
}
