// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size array with value semantics.
//!
//! `FixedArray<T, N>` stores its elements inline, so copying it copies the
//! data and two copies never alias. `len() == capacity() == N` at all times.
//! Use [`FixedArray::to_seq`] to obtain a growable, shareable sequence.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod error;
mod fixed_array;

#[cfg(test)]
mod tests;

pub use error::ArrayError;
pub use fixed_array::FixedArray;
