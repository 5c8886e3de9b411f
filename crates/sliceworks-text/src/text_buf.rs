// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Deref;

use sliceworks_seq::GrowableSeq;

use crate::error::TextError;

/// An immutable UTF-8 text buffer with zero-copy slicing.
///
/// `len()` counts bytes. Ranges are byte ranges and must fall on char
/// boundaries.
#[derive(Clone)]
pub struct TextBuf {
    text: Rc<str>,
    start: usize,
    len: usize,
}

impl TextBuf {
    /// Validates `bytes` as UTF-8 and takes ownership of them.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidUtf8`] if `bytes` is not valid UTF-8.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, TextError> {
        let text = String::from_utf8(bytes).map_err(|e| TextError::InvalidUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;

        Ok(Self::from(text))
    }

    /// Copies the live bytes of `seq` into a new text buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidUtf8`] if the bytes are not valid UTF-8.
    pub fn from_seq(seq: &GrowableSeq<u8>) -> Result<Self, TextError> {
        Self::from_utf8(seq.to_vec())
    }

    /// Returns the length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the text has a length of zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text[self.start..self.start + self.len]
    }

    /// Returns the text as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Returns a buffer over the byte range `[start, end)` without copying.
    ///
    /// # Errors
    ///
    /// - [`TextError::IndexOutOfRange`] unless `start <= end <= len`.
    /// - [`TextError::NotCharBoundary`] if either end splits a character.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, TextError> {
        if start > end || end > self.len {
            return Err(TextError::IndexOutOfRange {
                start,
                end,
                len: self.len,
            });
        }

        let text = self.as_str();
        for index in [start, end] {
            if !text.is_char_boundary(index) {
                return Err(TextError::NotCharBoundary { index });
            }
        }

        Ok(Self {
            text: Rc::clone(&self.text),
            start: self.start + start,
            len: end - start,
        })
    }

    /// Returns the first `end` bytes, `slice(0, end)`.
    pub fn prefix(&self, end: usize) -> Result<Self, TextError> {
        self.slice(0, end)
    }

    /// Returns everything from byte `start` on, `slice(start, len)`.
    pub fn suffix(&self, start: usize) -> Result<Self, TextError> {
        self.slice(start, self.len)
    }

    /// Returns `true` if both buffers point into the same text.
    pub fn shares_text(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.text, &other.text)
    }

    /// Copies the bytes into a new [`GrowableSeq`] with len = capacity.
    pub fn to_seq(&self) -> GrowableSeq<u8> {
        GrowableSeq::from(self.as_bytes())
    }
}

impl Default for TextBuf {
    fn default() -> Self {
        Self::from("")
    }
}

impl From<&str> for TextBuf {
    fn from(text: &str) -> Self {
        Self {
            text: Rc::from(text),
            start: 0,
            len: text.len(),
        }
    }
}

impl From<String> for TextBuf {
    fn from(text: String) -> Self {
        let len = text.len();
        Self {
            text: Rc::from(text),
            start: 0,
            len,
        }
    }
}

impl Deref for TextBuf {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for TextBuf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for TextBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextBuf {}

impl PartialEq<str> for TextBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl core::hash::Hash for TextBuf {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl core::fmt::Display for TextBuf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Debug for TextBuf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextBuf")
            .field("text", &self.as_str())
            .field("len", &self.len)
            .finish()
    }
}
