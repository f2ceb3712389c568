// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::HoldVec;

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_equal_contents_compare_equal() {
    let a = HoldVec::from([1u8, 2, 3]);
    let b = HoldVec::from([1u8, 2, 3]);

    assert_eq!(a, b);
    assert!(!(a != b));
}

#[test]
fn test_capacity_does_not_affect_equality() {
    let a = HoldVec::from([1u8, 2]);
    let mut b: HoldVec<u8> = HoldVec::with_capacity(16);
    b.push(1);
    b.push(2);

    assert_eq!(a, b);
}

#[test]
fn test_unequal_lengths_compare_not_equal() {
    let a = HoldVec::from([1u8, 2]);
    let b = HoldVec::from([1u8, 2, 3]);

    assert_ne!(a, b);
}

#[test]
fn test_same_length_different_elements_compare_not_equal() {
    let a = HoldVec::from([1u8, 2, 3]);
    let b = HoldVec::from([1u8, 9, 3]);

    assert_ne!(a, b);
}

#[test]
fn test_container_equals_itself_by_identity_even_with_nan() {
    let vec = HoldVec::from([1.0f64, f64::NAN]);

    // Element-wise comparison would say NaN != NaN; identity wins.
    assert!(vec == vec);

    // A distinct copy really is element-wise unequal.
    let copy = vec.clone();
    assert!(vec != copy);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_prefix_is_less_than_longer_sequence() {
    let a = HoldVec::from([1u8, 2]);
    let b = HoldVec::from([1u8, 2, 3]);

    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
}

#[test]
fn test_first_differing_element_decides() {
    let a = HoldVec::from([2u8]);
    let b = HoldVec::from([1u8, 9]);

    assert!(a > b);
    assert!(b < a);
}

#[test]
fn test_empty_is_less_than_any_non_empty() {
    let a: HoldVec<u8> = HoldVec::new();
    let b = HoldVec::from([0u8]);

    assert!(a < b);
}

#[test]
fn test_equal_sequences_are_neither_less_nor_greater() {
    let a = HoldVec::from([1u8, 2]);
    let b = HoldVec::from([1u8, 2]);

    assert!(a <= b);
    assert!(a >= b);
    assert!(!(a < b));
    assert!(!(a > b));
    assert_eq!(a.cmp(&b), core::cmp::Ordering::Equal);
}
