// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable sequence over a shared, reference-counted backing store.
//!
//! `GrowableSeq<T>` is an explicit (store, offset, len, capacity) descriptor.
//! Views share the store, appends within capacity write in place, and appends
//! past capacity move to a freshly allocated store chosen by [`GrowthPolicy`].
//!
//! # Core Guarantees
//!
//! - **`len <= capacity`** after every operation.
//! - **Growth never mutates the old store**: views created before a
//!   reallocation keep seeing the old contents.
//! - **Aliasing is part of the contract**: in-place writes through one view
//!   are visible through every view covering the same slots.
//! - **No partial failure**: an operation either completes or returns an
//!   error and leaves the descriptor as it was.
//!
//! # Example: Views and Growth
//!
//! ```rust
//! use sliceworks_seq::{GrowableSeq, SeqError};
//!
//! fn example() -> Result<(), SeqError> {
//!     let mut numbers = GrowableSeq::from(vec![2, 3, 5, 7, 11]);
//!     let middle = numbers.view(1, 3)?;
//!
//!     assert_eq!(middle.to_vec(), [3, 5]);
//!     assert_eq!(middle.capacity(), 4);
//!
//!     // In-place write, visible through the view.
//!     numbers.set(1, 30)?;
//!     assert_eq!(middle.get(0), Some(30));
//!
//!     // Overflowing append: new store, the view is cut loose.
//!     numbers.push(13);
//!     numbers.set(1, 300)?;
//!     assert_eq!(middle.get(0), Some(30));
//!     assert!(!numbers.shares_backing(&middle));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Releasing a Large Store
//!
//! ```rust
//! use sliceworks_seq::{GrowableSeq, SeqError};
//!
//! fn example() -> Result<(), SeqError> {
//!     let file: GrowableSeq<u8> = GrowableSeq::create(4096, 4096)?;
//!     let mut digits = file.view(100, 110)?;
//!     drop(file);
//!
//!     // The 10-byte view still pins all 4096 slots.
//!     assert_eq!(digits.capacity(), 3996);
//!
//!     digits.compact();
//!     assert_eq!(digits.capacity(), 10);
//!     assert_eq!(digits.backing_refs(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Reallocations emit `tracing` events at `TRACE` level; compacting away from
//! a store other views still hold emits a `DEBUG` event. The crate never
//! installs a subscriber.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod backing;
mod error;
mod growable_seq;
mod policy;

#[cfg(test)]
mod tests;

pub use error::SeqError;
pub use growable_seq::GrowableSeq;
pub use policy::{DEFAULT_DOUBLING_THRESHOLD, DEFAULT_LARGE_GROWTH_PERCENT, GrowthPolicy};
