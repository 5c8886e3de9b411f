// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for sliceworks-text.
use thiserror::Error;

/// Errors that can occur when building or slicing a [`TextBuf`](crate::TextBuf).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum TextError {
    /// The byte range does not satisfy `start <= end <= len`.
    #[error("byte range {start}..{end} out of range for text of length {len}")]
    IndexOutOfRange {
        /// Range start.
        start: usize,
        /// Range end.
        end: usize,
        /// Length of the text being sliced.
        len: usize,
    },

    /// A range end falls inside a multi-byte UTF-8 sequence.
    #[error("byte index {index} is not a char boundary")]
    NotCharBoundary {
        /// Offending byte index.
        index: usize,
    },

    /// Input bytes are not valid UTF-8.
    #[error("invalid utf-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },
}
