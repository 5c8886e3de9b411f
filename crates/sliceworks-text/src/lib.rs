// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Immutable text buffer described by (shared text, start, len).
//!
//! Slicing a [`TextBuf`] never copies: every slice points into the same
//! reference-counted text. There is no capacity and no mutation, so sharing
//! is always safe. Converting to or from a
//! [`GrowableSeq<u8>`](sliceworks_seq::GrowableSeq) copies the bytes.
//!
//! # Example
//!
//! ```rust
//! use sliceworks_text::{TextBuf, TextError};
//!
//! fn example() -> Result<(), TextError> {
//!     let text = TextBuf::from("hello world");
//!     let hello = text.prefix(5)?;
//!     let world = text.suffix(6)?;
//!
//!     assert_eq!(hello, "hello");
//!     assert_eq!(world, "world");
//!     assert!(hello.shares_text(&text));
//!     assert_eq!(text.len(), 11);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod text_buf;

#[cfg(test)]
mod tests;

pub use error::TextError;
pub use text_buf::TextBuf;
