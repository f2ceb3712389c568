// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable sequence container over a single-owner heap block.
//!
//! [`HoldVec<T>`] is a dynamic array built directly on
//! `holdfast_buffer::ArrayBuf`: one exclusively owned contiguous
//! allocation, a live length, and the full value-semantics contract of a
//! dynamic array — random access, amortized-O(1) append, insertion and
//! removal at arbitrary positions, capacity reservation, resizing, and
//! total-order comparison.
//!
//! # Core guarantees
//!
//! - **Single owner**: the container owns exactly one backing block;
//!   ownership moves only via swap or move, never duplicates.
//! - **Construct-then-swap reallocation**: every growing operation builds
//!   the new block completely before swapping it in, so the container is
//!   never observable between states and the old block is released on
//!   every exit path.
//! - **One recoverable error path**: [`HoldVec::at`] / [`HoldVec::at_mut`]
//!   report [`HoldVecError::IndexOutOfRange`]; all other misuse is a
//!   documented precondition violation.
//!
//! # Example: building and growing
//!
//! ```rust
//! use holdfast_vec::HoldVec;
//!
//! let mut vec = HoldVec::from([1u32, 2, 3]);
//! assert_eq!(vec.capacity(), 3);
//!
//! // Full container: the next push doubles the capacity.
//! vec.push(4);
//! assert_eq!(vec.capacity(), 6);
//! assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
//! ```
//!
//! # Example: checked access
//!
//! ```rust
//! use holdfast_vec::{HoldVec, HoldVecError};
//!
//! fn example() -> Result<(), HoldVecError> {
//!     let mut vec = HoldVec::from([10u8, 20]);
//!
//!     *vec.at_mut(0)? = 11;
//!     assert_eq!(*vec.at(0)?, 11);
//!
//!     let result = vec.at(2);
//!     assert!(matches!(
//!         result,
//!         Err(HoldVecError::IndexOutOfRange { index: 2, len: 2 })
//!     ));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: reservation marker
//!
//! ```rust
//! use holdfast_vec::{HoldVec, Reserve};
//!
//! // Reserve(8) requests capacity; with_len(8) would create 8 elements.
//! let vec = HoldVec::<u64>::from(Reserve(8));
//! assert!(vec.is_empty());
//! assert_eq!(vec.capacity(), 8);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod hold_vec;

#[cfg(test)]
mod tests;

pub use error::HoldVecError;
pub use hold_vec::{HoldVec, Reserve};
