// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::backing::Backing;
use crate::error::SeqError;
use crate::policy::GrowthPolicy;

/// A growable sequence described by (backing store, offset, len, capacity).
///
/// Several descriptors may share one backing store. Writes that stay inside
/// the current capacity happen in place and are visible through every view
/// covering those slots. A write that needs more capacity allocates a new
/// store, copies the live elements over and leaves the old store untouched,
/// so views created before the growth keep their contents.
///
/// Slots in `[len, capacity)` are allocated and hold `T::default()` (or
/// whatever was last written there) but are not part of the sequence.
///
/// # Example
///
/// ```rust
/// use sliceworks_seq::{GrowableSeq, SeqError};
///
/// fn example() -> Result<(), SeqError> {
///     let mut seq = GrowableSeq::from(vec![1, 2, 3, 4]);
///
///     seq.insert_at(2, &[0])?;
///     assert_eq!(seq.to_vec(), [1, 2, 0, 3, 4]);
///
///     seq.remove_at(2, 1)?;
///     assert_eq!(seq.to_vec(), [1, 2, 3, 4]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct GrowableSeq<T> {
    backing: Option<Rc<Backing<T>>>,
    offset: usize,
    len: usize,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> GrowableSeq<T> {
    /// Creates the nil sequence: no backing store, len 0, capacity 0.
    pub fn new() -> Self {
        Self {
            backing: None,
            offset: 0,
            len: 0,
            capacity: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Replaces the growth policy used by this descriptor.
    ///
    /// Views and appended descriptors inherit the policy.
    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the growth policy of this descriptor.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence has no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots reachable from this descriptor without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if no backing store was ever attached.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.backing.is_none()
    }

    /// Returns `true` if both descriptors point at the same backing store.
    pub fn shares_backing(&self, other: &Self) -> bool {
        match (&self.backing, &other.backing) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of descriptors (this one included) keeping the backing store alive.
    pub fn backing_refs(&self) -> usize {
        self.backing.as_ref().map_or(0, Rc::strong_count)
    }

    /// Runs `f` over the live elements.
    pub fn open<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        match &self.backing {
            Some(backing) => backing.with_range(self.offset, self.len, f),
            None => f(&[]),
        }
    }

    /// Runs `f` over the live elements mutably.
    ///
    /// Writes land in the shared store and are visible through other views.
    /// The closure must not access a view over the same store; doing so panics.
    pub fn open_mut<R>(&mut self, f: impl FnOnce(&mut [T]) -> R) -> R {
        let len = self.len;
        self.open_window_mut(|window| f(&mut window[..len]))
    }

    /// Runs `f` over every slot in `[0, capacity)`.
    fn open_window_mut<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        match &self.backing {
            Some(backing) => backing.with_range_mut(self.offset, self.capacity, f),
            None => f(&mut []),
        }
    }

    /// Creates a view over `[start, end)` sharing this backing store.
    ///
    /// The view's capacity extends to the end of this descriptor's capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] unless `start <= end <= len`.
    pub fn view(&self, start: usize, end: usize) -> Result<Self, SeqError> {
        check_range(start, end, self.len)?;
        Ok(self.descriptor(start, end - start, self.capacity - start))
    }

    /// Creates a view over `[start, end)` whose capacity stops at `max`.
    ///
    /// `end` may reach into the spare capacity, up to `max`. Limiting the
    /// capacity makes the next overflowing append reallocate instead of
    /// writing into slots other views can see.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] unless
    /// `start <= end <= max <= capacity`.
    pub fn view_with_capacity(
        &self,
        start: usize,
        end: usize,
        max: usize,
    ) -> Result<Self, SeqError> {
        if max > self.capacity {
            return Err(SeqError::IndexOutOfRange {
                index: max,
                bound: self.capacity,
            });
        }
        check_range(start, end, max)?;

        Ok(self.descriptor(start, end - start, max - start))
    }

    fn descriptor(&self, start: usize, len: usize, capacity: usize) -> Self {
        Self {
            backing: self.backing.clone(),
            offset: self.offset + start,
            len,
            capacity,
            policy: self.policy,
        }
    }

    /// Drops the first `count` elements by moving the offset.
    ///
    /// The leading slots stay allocated as long as any view holds the store;
    /// call [`compact`](Self::compact) to let them go.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `count > len`.
    pub fn remove_prefix(&mut self, count: usize) -> Result<(), SeqError> {
        check_count(count, self.len)?;

        self.offset += count;
        self.len -= count;
        self.capacity -= count;
        Ok(())
    }

    /// Drops the last `count` elements by shrinking the length.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `count > len`.
    pub fn remove_suffix(&mut self, count: usize) -> Result<(), SeqError> {
        check_count(count, self.len)?;

        self.len -= count;
        Ok(())
    }
}

impl<T> GrowableSeq<T>
where
    T: Clone + Default,
{
    /// Creates a sequence of `len` zero values backed by `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidArgument`] if `capacity < len`.
    pub fn create(len: usize, capacity: usize) -> Result<Self, SeqError> {
        if capacity < len {
            return Err(SeqError::InvalidArgument { len, capacity });
        }

        Ok(Self {
            backing: Some(Backing::zeroed(capacity)),
            offset: 0,
            len,
            capacity,
            policy: GrowthPolicy::default(),
        })
    }

    /// Creates an empty sequence backed by `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            backing: Some(Backing::zeroed(capacity)),
            offset: 0,
            len: 0,
            capacity,
            policy: GrowthPolicy::default(),
        }
    }

    /// Returns a copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.open(|live| live.get(index).cloned())
    }

    /// Overwrites the element at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SeqError> {
        if index >= self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                bound: self.len,
            });
        }

        self.open_window_mut(|window| window[index] = value);
        Ok(())
    }

    /// Copies the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.open(|live| live.to_vec())
    }

    /// Moves this descriptor onto a new store holding exactly `capacity`
    /// slots, with the live elements copied to the front.
    fn reallocate(&mut self, capacity: usize) {
        let fresh = Backing::zeroed(capacity);
        let len = self.len;
        fresh.with_range_mut(0, len, |dst| self.open(|live| dst.clone_from_slice(live)));

        self.backing = Some(fresh);
        self.offset = 0;
        self.capacity = capacity;
    }

    /// Grows to at least `min_capacity` following the growth policy.
    ///
    /// The old store is never written to; views over it keep their contents.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, min_capacity: usize) {
        let new_capacity = self.policy.next_capacity(self.capacity, min_capacity);

        trace!(
            len = self.len,
            old_capacity = self.capacity,
            new_capacity,
            "growing backing store"
        );

        self.reallocate(new_capacity);
    }

    #[inline(always)]
    fn maybe_grow_to(&mut self, min_capacity: usize) {
        if self.capacity >= min_capacity {
            return;
        }

        self.grow_to(min_capacity);
    }

    /// Appends `values` to this descriptor.
    ///
    /// Within capacity the values are written in place, so a sibling view
    /// covering `[len, len + values.len())` sees them. Past capacity the
    /// sequence moves to a new store first.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        if values.is_empty() {
            return;
        }

        let len = self.len;
        self.maybe_grow_to(len + values.len());
        self.open_window_mut(|window| {
            window[len..len + values.len()].clone_from_slice(values);
        });
        self.len += values.len();
    }

    /// Appends a single value.
    pub fn push(&mut self, value: T) {
        self.extend_from_slice(core::slice::from_ref(&value));
    }

    /// Returns a new descriptor with `values` appended, leaving `self` as is.
    ///
    /// The result shares the backing store of `self` unless it had to grow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sliceworks_seq::{GrowableSeq, SeqError};
    ///
    /// fn example() -> Result<(), SeqError> {
    ///     let base = GrowableSeq::<i32>::create(2, 3)?;
    ///
    ///     // Fits: written in place, same store.
    ///     let fits = base.append(&[4]);
    ///     assert!(fits.shares_backing(&base));
    ///
    ///     // Overflows: new store, base untouched.
    ///     let grown = base.append(&[4, 5, 6, 7, 8]);
    ///     assert!(!grown.shares_backing(&base));
    ///     assert_eq!(grown.to_vec(), [0, 0, 4, 5, 6, 7, 8]);
    ///     assert_eq!(base.len(), 2);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn append(&self, values: &[T]) -> Self {
        let mut next = self.clone();
        next.extend_from_slice(values);
        next
    }

    /// Inserts `values` before position `index`.
    ///
    /// Grows first if needed, then shifts `[index, len)` right by
    /// `values.len()` with a back-to-front element copy and writes the values
    /// into the gap. No temporary sequence is built.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `index > len`.
    pub fn insert_at(&mut self, index: usize, values: &[T]) -> Result<(), SeqError> {
        if index > self.len {
            return Err(SeqError::IndexOutOfRange {
                index,
                bound: self.len,
            });
        }
        if values.is_empty() {
            return Ok(());
        }

        let len = self.len;
        let count = values.len();
        self.maybe_grow_to(len + count);

        self.open_window_mut(|window| {
            // Back to front: every source slot is read before it is overwritten.
            for i in (index..len).rev() {
                window[i + count] = window[i].clone();
            }
            window[index..index + count].clone_from_slice(values);
        });
        self.len += count;

        Ok(())
    }

    /// Removes `count` elements starting at `index`.
    ///
    /// `[index + count, len)` moves left with a front-to-back copy. Removing
    /// a trailing run only shrinks the length.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `index + count > len`.
    pub fn remove_at(&mut self, index: usize, count: usize) -> Result<(), SeqError> {
        let end = index.saturating_add(count);
        if end > self.len {
            return Err(SeqError::IndexOutOfRange {
                index: end,
                bound: self.len,
            });
        }

        let len = self.len;
        if end < len {
            self.open_window_mut(|window| {
                for i in end..len {
                    window[i - count] = window[i].clone();
                }
            });
        }
        self.len -= count;

        Ok(())
    }

    /// Drops the last `count` elements after resetting their slots to the
    /// zero value, so whatever they own is dropped now instead of when the
    /// store goes away.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if `count > len`.
    pub fn release_suffix(&mut self, count: usize) -> Result<(), SeqError> {
        check_count(count, self.len)?;

        let new_len = self.len - count;
        let len = self.len;
        self.open_window_mut(|window| window[new_len..len].fill(T::default()));
        self.len = new_len;

        Ok(())
    }

    /// Inserts `values` in front of the sequence.
    ///
    /// Always allocates a store of exactly `values.len() + len` slots.
    pub fn prepend(&mut self, values: &[T]) {
        let len = self.len;
        let capacity = values.len() + len;
        let fresh = Backing::zeroed(capacity);

        fresh.with_range_mut(0, capacity, |dst| {
            dst[..values.len()].clone_from_slice(values);
            self.open(|live| dst[values.len()..].clone_from_slice(live));
        });
        trace!(len, new_capacity = capacity, "prepend reallocated");

        self.backing = Some(fresh);
        self.offset = 0;
        self.len = capacity;
        self.capacity = capacity;
    }

    /// Copies the live elements into a store sized exactly to `len` and
    /// drops this descriptor's hold on the old one.
    ///
    /// Use it when a small view would otherwise keep a large store alive.
    /// The nil sequence stays nil.
    pub fn compact(&mut self) {
        let Some(old) = &self.backing else {
            return;
        };

        let old_refs = Rc::strong_count(old);
        if old_refs > 1 {
            debug!(
                len = self.len,
                old_capacity = self.capacity,
                remaining_refs = old_refs - 1,
                "compacting away from a shared backing store"
            );
        }
        trace!(len = self.len, old_capacity = self.capacity, "compacting");

        self.reallocate(self.len);
    }

    /// Drops, in place, every element for which `predicate` returns `true`,
    /// keeping the rest in order. Returns the new length.
    ///
    /// The predicate names what to remove: a `true` result discards the
    /// element. Survivors are written from the front of the existing store
    /// and nothing is allocated, so other views over the same slots see the
    /// rewritten contents.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sliceworks_seq::GrowableSeq;
    ///
    /// let mut text = GrowableSeq::from(b"hello world".as_slice());
    /// let len = text.filter_in_place(|byte| *byte == b' ');
    ///
    /// assert_eq!(len, 10);
    /// assert_eq!(text.to_vec(), b"helloworld");
    /// assert_eq!(text.capacity(), 11);
    /// ```
    pub fn filter_in_place(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let len = self.len;
        let kept = self.open_window_mut(|window| {
            let mut kept = 0;
            for i in 0..len {
                if predicate(&window[i]) {
                    continue;
                }
                if kept != i {
                    window[kept] = window[i].clone();
                }
                kept += 1;
            }
            kept
        });
        self.len = kept;

        kept
    }
}

fn check_range(start: usize, end: usize, bound: usize) -> Result<(), SeqError> {
    if end > bound {
        return Err(SeqError::IndexOutOfRange { index: end, bound });
    }
    if start > end {
        return Err(SeqError::IndexOutOfRange {
            index: start,
            bound: end,
        });
    }

    Ok(())
}

fn check_count(count: usize, len: usize) -> Result<(), SeqError> {
    if count > len {
        return Err(SeqError::IndexOutOfRange {
            index: count,
            bound: len,
        });
    }

    Ok(())
}

impl<T> Clone for GrowableSeq<T> {
    /// Clones the descriptor. The clone is a view over the same store.
    fn clone(&self) -> Self {
        self.descriptor(0, self.len, self.capacity)
    }
}

impl<T> Default for GrowableSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for GrowableSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.open(|a| other.open(|b| a == b))
    }
}

impl<T: Eq> Eq for GrowableSeq<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableSeq<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.open(|live| live == other)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GrowableSeq<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.open(|live| {
            f.debug_struct("GrowableSeq")
                .field("data", &live)
                .field("len", &self.len)
                .field("capacity", &self.capacity)
                .finish()
        })
    }
}

impl<T> From<Vec<T>> for GrowableSeq<T> {
    /// Takes the elements as a literal: capacity equals length.
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            backing: Some(Backing::from_boxed(values.into_boxed_slice())),
            offset: 0,
            len,
            capacity: len,
            policy: GrowthPolicy::default(),
        }
    }
}

impl<T: Clone> From<&[T]> for GrowableSeq<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> FromIterator<T> for GrowableSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}
