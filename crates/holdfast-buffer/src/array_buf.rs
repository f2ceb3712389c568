// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// A single contiguous heap block of `T`, exclusively owned.
///
/// The buffer is either allocated (owns one block) or unallocated. There is
/// no copy constructor or copy assignment: the only ways a block leaves a
/// buffer are [`swap`](ArrayBuf::swap), [`release`](ArrayBuf::release) and
/// drop. Element access through [`Index`] carries the precondition that the
/// position lies within the allocated extent.
pub struct ArrayBuf<T> {
    inner: Option<Box<[T]>>,
}

impl<T> ArrayBuf<T> {
    /// Creates a buffer that owns no allocation.
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Allocates a block of `len` default-initialized elements.
    ///
    /// A `len` of 0 allocates nothing. Allocation failure follows the
    /// global allocator's out-of-memory path; it is not reported here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use holdfast_buffer::ArrayBuf;
    ///
    /// let buf = ArrayBuf::<u8>::new(3);
    /// assert_eq!(buf.as_slice(), &[0, 0, 0]);
    ///
    /// let none = ArrayBuf::<u8>::new(0);
    /// assert!(!none.is_allocated());
    /// ```
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }

        let mut block = Vec::with_capacity(len);
        block.resize_with(len, T::default);

        Self {
            inner: Some(block.into_boxed_slice()),
        }
    }

    /// Adopts an already-allocated block.
    ///
    /// Ownership moves into the buffer. A zero-length block normalizes to
    /// the unallocated state, preserving the "zero elements, no allocation"
    /// invariant.
    pub fn from_boxed(block: Box<[T]>) -> Self {
        if block.is_empty() {
            return Self::empty();
        }

        Self { inner: Some(block) }
    }

    /// Gives up ownership of the block, leaving the buffer unallocated.
    ///
    /// The caller becomes solely responsible for the returned block.
    /// Returns `None` if nothing was owned.
    #[must_use]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.inner.take()
    }

    /// Returns `true` if a block is currently owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the allocated extent in elements, 0 when unallocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |block| block.len())
    }

    /// Returns a non-owning view of the whole allocated extent.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_deref().unwrap_or(&[])
    }

    /// Returns a mutable non-owning view of the whole allocated extent.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_deref_mut().unwrap_or(&mut [])
    }

    /// Exchanges owned blocks with `other`. Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }
}

impl<T> Default for ArrayBuf<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> core::fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuf")
            .field("allocated", &self.is_allocated())
            .field("len", &self.len())
            .finish()
    }
}

impl<T> Index<usize> for ArrayBuf<T> {
    type Output = T;

    /// Precondition: `index` lies within the allocated extent.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayBuf<T> {
    /// Precondition: `index` lies within the allocated extent.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}
