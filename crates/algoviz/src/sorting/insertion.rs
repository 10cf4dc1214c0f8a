//! Instrumented insertion sort.
//!
//! ## Purpose
//!
//! This module implements insertion sort with full operation tracing. Each
//! element is selected as a key and shifted leftward into the sorted
//! prefix, one overwrite per shift.
//!
//! ## Design notes
//!
//! * **Select events**: The key position is announced with a Select event
//!   before any shifting.
//! * **Shift pairs**: Each shift records one Compare (predecessor vs. key
//!   slot) followed by one Overwrite of the slot the predecessor moved
//!   into.
//! * **Final placement**: The key's resting Overwrite is recorded even
//!   when zero shifts occurred.
//!
//! ## Invariants
//!
//! * Comparisons are only recorded for successful shifts; the terminating
//!   failed comparison is not an event.

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
// Insertion Sort
// ============================================================================

/// Sort `input` with insertion sort, returning the full operation trace.
pub fn insertion_sort<T: Float>(input: &[T]) -> Trace<T> {
    let mut arr: Vec<T> = input.to_vec();
    let mut trace = Trace::new();
    let n = arr.len();

    for i in 1..n {
        let key = arr[i];
        let mut j = i;
        trace.record_select(i);

        // Shift greater predecessors one slot to the right.
        while j > 0 && arr[j - 1] > key {
            trace.record_compare(j - 1, j);
            arr[j] = arr[j - 1];
            let shifted = arr[j];
            trace.record_overwrite(j, shifted, &arr);
            j -= 1;
        }

        // Place the key, even when it never moved.
        arr[j] = key;
        trace.record_overwrite(j, key, &arr);
    }

    trace
}
