// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Arrays, growable sequences and immutable text with an explicit memory layout.
//!
//! # Crates
//!
//! - [`seq`]: `GrowableSeq<T>`, a (store, offset, len, capacity) descriptor
//!   with shared backing storage, views and amortized growth.
//! - [`array`] (feature `array`): `FixedArray<T, N>`, inline storage with
//!   value semantics.
//! - [`text`] (feature `text`): `TextBuf`, immutable shared text with
//!   zero-copy slicing.
//!
//! Both companion crates are on by default.
//!
//! # Quick Start
//!
//! ```rust
//! use sliceworks::seq::{GrowableSeq, SeqError};
//!
//! fn example() -> Result<(), SeqError> {
//!     let mut seq = GrowableSeq::<u8>::create(1, 1)?;
//!     let mut capacities = vec![seq.capacity()];
//!
//!     for value in 0..10 {
//!         seq.push(value);
//!         if capacities.last() != Some(&seq.capacity()) {
//!             capacities.push(seq.capacity());
//!         }
//!     }
//!
//!     assert_eq!(capacities, [1, 2, 4, 8, 16]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "array")]
pub use sliceworks_array as array;
pub use sliceworks_seq as seq;
#[cfg(feature = "text")]
pub use sliceworks_text as text;
