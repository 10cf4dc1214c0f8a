//! Instrumented selection sort.
//!
//! ## Purpose
//!
//! This module implements selection sort with full operation tracing. For
//! each position, the minimum of the remaining suffix is located and
//! swapped into place.
//!
//! ## Design notes
//!
//! * **Comparison indices**: Each candidate is compared against the
//!   position of the *current* minimum, so the recorded left index moves
//!   as smaller candidates are found.
//! * **Conditional swap**: A Swap is recorded only when the minimum moved;
//!   the Sorted marker for the position is emitted unconditionally.
//!
//! ## Invariants
//!
//! * Exactly one Sorted event per outer position, swap or not.

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
// Selection Sort
// ============================================================================

/// Sort `input` with selection sort, returning the full operation trace.
pub fn selection_sort<T: Float>(input: &[T]) -> Trace<T> {
    let mut arr: Vec<T> = input.to_vec();
    let mut trace = Trace::new();
    let n = arr.len();

    for i in 0..n {
        let mut min_idx = i;

        for j in i + 1..n {
            trace.record_compare(min_idx, j);
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
            trace.record_swap(i, min_idx, &arr);
        }

        trace.record_sorted(&[i]);
    }

    trace
}
