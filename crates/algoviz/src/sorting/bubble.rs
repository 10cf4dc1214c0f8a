//! Instrumented bubble sort.
//!
//! ## Purpose
//!
//! This module implements bubble sort with full operation tracing. Each
//! pass compares adjacent positions left to right and swaps out-of-order
//! pairs; after every pass the last unsorted position is marked sorted.
//!
//! ## Design notes
//!
//! * **Early termination**: A pass that performs zero swaps ends the sort.
//!   The pass's Sorted marker is still emitted before stopping.
//! * **Event order**: Compare is recorded before the test; Swap only when
//!   the left element is strictly greater.
//!
//! ## Invariants
//!
//! * Exactly one Sorted event per completed pass.
//! * Every Swap snapshot reflects the sequence immediately after the
//!   exchange.
//!
//! ## Non-goals
//!
//! * This module does not validate input; empty and singleton inputs
//!   produce an empty or trivial trace.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::trace::Trace;

// ============================================================================
// Bubble Sort
// ============================================================================

/// Sort `input` with bubble sort, returning the full operation trace.
pub fn bubble_sort<T: Float>(input: &[T]) -> Trace<T> {
    let mut arr: Vec<T> = input.to_vec();
    let mut trace = Trace::new();
    let n = arr.len();

    for i in 0..n {
        let mut swapped = false;

        // Compare adjacent positions; the tail [n-i..] is already sorted.
        for j in 0..n - i - 1 {
            trace.record_compare(j, j + 1);
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                trace.record_swap(j, j + 1, &arr);
            }
        }

        // The largest remaining element settled at the end of the pass.
        trace.record_sorted(&[n - i - 1]);

        if !swapped {
            break;
        }
    }

    trace
}
