// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut};

use sliceworks_seq::GrowableSeq;

use crate::error::ArrayError;

/// A fixed-size array with value semantics.
///
/// The `N` elements live inline. Assigning or passing a `FixedArray` copies
/// every element, so a copy never observes writes made to the original.
/// Borrow it (`&mut FixedArray`) to share one instance instead.
///
/// Length and capacity are both `N`.
///
/// # Example
///
/// ```rust
/// use sliceworks_array::{ArrayError, FixedArray};
///
/// fn example() -> Result<(), ArrayError> {
///     let original = FixedArray::from_array([1, 2, 3]);
///     let mut copy = original;
///     copy.set(0, 10)?;
///
///     assert_eq!(original.as_slice(), [1, 2, 3]);
///     assert_eq!(copy.as_slice(), [10, 2, 3]);
///
///     // Through a reference, writes reach the original.
///     let mut shared = original;
///     let alias = &mut shared;
///     for value in alias.iter_mut() {
///         *value += 1;
///     }
///     assert_eq!(shared.as_slice(), [2, 3, 4]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    inner: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Creates a `FixedArray` with every element set to the zero value.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self {
            inner: core::array::from_fn(|_| T::default()),
        }
    }

    /// Wraps an existing array.
    pub const fn from_array(inner: [T; N]) -> Self {
        Self { inner }
    }

    /// Creates a `FixedArray` from `(index, value)` pairs; unlisted slots
    /// hold the zero value and later pairs override earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if any index is `>= N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sliceworks_array::FixedArray;
    ///
    /// let sparse = FixedArray::<i32, 5>::from_sparse(&[(2, 4), (4, 3)]).unwrap();
    /// assert_eq!(sparse.as_slice(), [0, 0, 4, 0, 3]);
    /// ```
    pub fn from_sparse(entries: &[(usize, T)]) -> Result<Self, ArrayError>
    where
        T: Clone + Default,
    {
        if let Some((index, _)) = entries.iter().find(|(index, _)| *index >= N) {
            return Err(ArrayError::IndexOutOfRange { index: *index, len: N });
        }

        let mut array = Self::new();
        for (index, value) in entries {
            array.inner[*index] = value.clone();
        }

        Ok(array)
    }

    /// Returns the number of elements in the array (always N).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the capacity of the array; a fixed array never grows, so
    /// this is always N.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the array contains no elements (always false unless N=0).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= N`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let slot = self
            .inner
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len: N })?;
        *slot = value;

        Ok(())
    }

    /// Returns a slice containing the entire array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns a mutable slice containing the entire array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Unwraps the inner array.
    pub fn into_inner(self) -> [T; N] {
        self.inner
    }

    /// Copies the elements into a new [`GrowableSeq`] with len = capacity = N.
    pub fn to_seq(&self) -> GrowableSeq<T>
    where
        T: Clone,
    {
        GrowableSeq::from(self.as_slice())
    }
}

impl<T, const N: usize> Default for FixedArray<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(inner: [T; N]) -> Self {
        Self::from_array(inner)
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
