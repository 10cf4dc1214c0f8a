//! Instrumented merge sort.
//!
//! ## Purpose
//!
//! This module implements top-down merge sort with full operation tracing.
//! Ranges are split at the midpoint, sorted recursively, and merged
//! through a scratch buffer that is copied back one Overwrite at a time.
//!
//! ## Design notes
//!
//! * **Stability**: The merge step takes from the left run on ties
//!   (`<=`), so equal elements keep their input order.
//! * **Event order**: One Compare per head comparison while both runs are
//!   non-empty; remaining elements drain without comparisons. Overwrites
//!   are emitted in left-to-right destination order.
//! * **Midpoint**: `low + (high - low) / 2`, matching the recursive
//!   divide contract.
//!
//! ## Invariants
//!
//! * Every Overwrite snapshot reflects the original range after that
//!   single element was copied back.
//!
//! ## Non-goals
//!
//! * No Sorted or Select events are recorded; merge sort's progress is
//!   conveyed entirely through overwrites.

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
// Merge Sort
// ============================================================================

/// Sort `input` with merge sort, returning the full operation trace.
pub fn merge_sort<T: Float>(input: &[T]) -> Trace<T> {
    let mut arr: Vec<T> = input.to_vec();
    let mut trace = Trace::new();

    if arr.len() > 1 {
        let high = arr.len() - 1;
        sort_range(&mut arr, 0, high, &mut trace);
    }

    trace
}

/// Recursively sort the inclusive range `[low, high]`.
fn sort_range<T: Float>(arr: &mut [T], low: usize, high: usize, trace: &mut Trace<T>) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    sort_range(arr, low, mid, trace);
    sort_range(arr, mid + 1, high, trace);
    merge_runs(arr, low, mid, high, trace);
}

/// Merge the sorted runs `[low, mid]` and `[mid+1, high]`.
fn merge_runs<T: Float>(arr: &mut [T], low: usize, mid: usize, high: usize, trace: &mut Trace<T>) {
    let mut i = low;
    let mut j = mid + 1;
    let mut scratch: Vec<T> = Vec::with_capacity(high - low + 1);

    // Compare run heads; the left run wins ties to keep the sort stable.
    while i <= mid && j <= high {
        trace.record_compare(i, j);
        if arr[i] <= arr[j] {
            scratch.push(arr[i]);
            i += 1;
        } else {
            scratch.push(arr[j]);
            j += 1;
        }
    }

    // Drain whichever run still has elements.
    while i <= mid {
        scratch.push(arr[i]);
        i += 1;
    }
    while j <= high {
        scratch.push(arr[j]);
        j += 1;
    }

    // Copy back in destination order, one overwrite per element.
    for (offset, &value) in scratch.iter().enumerate() {
        arr[low + offset] = value;
        trace.record_overwrite(low + offset, value, arr);
    }
}
