// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

/// Contiguous block of slots shared by every view created over it.
///
/// The block never changes size. Growing a sequence means allocating a new
/// `Backing` and moving the descriptor over to it.
pub(crate) struct Backing<T> {
    slots: RefCell<Box<[T]>>,
}

impl<T> Backing<T> {
    pub(crate) fn from_boxed(slots: Box<[T]>) -> Rc<Self> {
        Rc::new(Self {
            slots: RefCell::new(slots),
        })
    }

    /// Allocates `size` slots holding the zero value.
    pub(crate) fn zeroed(size: usize) -> Rc<Self>
    where
        T: Default,
    {
        Self::from_boxed(core::iter::repeat_with(T::default).take(size).collect())
    }

    /// Runs `f` over `slots[offset..offset + len]`.
    pub(crate) fn with_range<R>(
        &self,
        offset: usize,
        len: usize,
        f: impl FnOnce(&[T]) -> R,
    ) -> R {
        let slots = self.slots.borrow();
        f(&slots[offset..offset + len])
    }

    /// Runs `f` over `slots[offset..offset + len]` mutably.
    ///
    /// Panics if the same store is already borrowed (re-entrant closure).
    pub(crate) fn with_range_mut<R>(
        &self,
        offset: usize,
        len: usize,
        f: impl FnOnce(&mut [T]) -> R,
    ) -> R {
        let mut slots = self.slots.borrow_mut();
        f(&mut slots[offset..offset + len])
    }
}
