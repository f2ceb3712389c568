// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-owner heap array blocks.
//!
//! [`ArrayBuf<T>`] owns at most one contiguous heap allocation of `T` — a
//! block of N elements or nothing. It has no notion of a live length versus
//! spare capacity; that bookkeeping belongs to the container built on top of
//! it (`holdfast-vec`). What it does guarantee:
//!
//! - **Exactly one owner.** `ArrayBuf` has no `Clone` impl; a block changes
//!   hands only through [`ArrayBuf::swap`] or [`ArrayBuf::release`], so two
//!   buffers can never end up freeing the same allocation.
//! - **Release on every exit path.** The owned block is freed when the
//!   buffer is dropped, unless ownership was transferred away first.
//! - **Zero-length means no allocation.** Constructing with an element
//!   count of 0 owns nothing.
//!
//! # Example
//!
//! ```rust
//! use holdfast_buffer::ArrayBuf;
//!
//! let mut buf = ArrayBuf::<u32>::new(4);
//! assert!(buf.is_allocated());
//! assert_eq!(buf.len(), 4);
//!
//! buf[0] = 42;
//! assert_eq!(buf[0], 42);
//!
//! // Transfer ownership out; the buffer is left unallocated.
//! let block = buf.release().expect("Failed to release block");
//! assert!(!buf.is_allocated());
//! assert_eq!(block.len(), 4);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod array_buf;

pub use array_buf::ArrayBuf;
