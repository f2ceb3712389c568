// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for holdfast-vec.
use thiserror::Error;

/// Error type for `HoldVec` operations.
///
/// Checked element access is the one recoverable path in the API; every
/// other misuse (indexing past the live range, removing from an empty
/// container through `remove`) is a documented precondition and panics.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HoldVecError {
    /// Checked access past the live element range.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested element position.
        index: usize,
        /// The live element count at the time of the call.
        len: usize,
    },
}
