//! Instrumented quicksort.
//!
//! ## Purpose
//!
//! This module implements quicksort with full operation tracing, using
//! the Lomuto partition scheme with the last element of each range as the
//! pivot.
//!
//! ## Design notes
//!
//! * **Pivot announcement**: The pivot position is recorded with a Select
//!   event before the partition scan.
//! * **Partition scan**: One Compare per scanned element against the
//!   pivot position; elements strictly less than the pivot are swapped to
//!   the boundary immediately, and that Swap is recorded even when the
//!   two indices coincide.
//! * **Pivot placement**: The closing Swap of the pivot into the boundary
//!   is always recorded, even when the pivot does not move.
//! * **Recursion**: Two-sided, excluding the pivot's final position.
//!
//! ## Invariants
//!
//! * Every Swap snapshot reflects the sequence immediately after the
//!   exchange, degenerate self-swaps included.

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
// Quicksort
// ============================================================================

/// Sort `input` with quicksort, returning the full operation trace.
pub fn quick_sort<T: Float>(input: &[T]) -> Trace<T> {
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

    let pivot_idx = partition(arr, low, high, trace);

    if pivot_idx > low {
        sort_range(arr, low, pivot_idx - 1, trace);
    }
    sort_range(arr, pivot_idx + 1, high, trace);
}

/// Lomuto partition of `[low, high]` around the last element.
///
/// Returns the pivot's final position.
fn partition<T: Float>(arr: &mut [T], low: usize, high: usize, trace: &mut Trace<T>) -> usize {
    let pivot = arr[high];
    trace.record_select(high);

    // Next slot of the less-than region.
    let mut boundary = low;

    for j in low..high {
        trace.record_compare(j, high);
        if arr[j] < pivot {
            arr.swap(boundary, j);
            trace.record_swap(boundary, j, arr);
            boundary += 1;
        }
    }

    // Move the pivot between the two regions.
    arr.swap(boundary, high);
    trace.record_swap(boundary, high, arr);

    boundary
}
