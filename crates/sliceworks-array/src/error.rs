// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Error type for `FixedArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// Index at or past the fixed length.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Fixed length of the array.
        len: usize,
    },
}
