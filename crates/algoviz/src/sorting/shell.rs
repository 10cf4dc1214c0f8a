//! Instrumented shell sort.
//!
//! ## Purpose
//!
//! This module implements shell sort with full operation tracing: gapped
//! insertion passes with a halving gap sequence, letting elements travel
//! long distances in few moves.
//!
//! ## Design notes
//!
//! * **Gap sequence**: Starts at `n / 2` and halves (integer floor) each
//!   outer iteration until reaching 0 (exclusive).
//! * **Gapped shifts**: Compare/Overwrite pairs mirror insertion sort's
//!   shifting with stride `gap`; compare indices are `(j, j - gap)`.
//! * **No Select events**: Unlike insertion sort, the working element is
//!   not announced.
//!
//! ## Invariants
//!
//! * The final placing Overwrite is recorded for every worked position,
//!   even when no shift occurred.

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
// Shell Sort
// ============================================================================

/// Sort `input` with shell sort, returning the full operation trace.
pub fn shell_sort<T: Float>(input: &[T]) -> Trace<T> {
    let mut arr: Vec<T> = input.to_vec();
    let mut trace = Trace::new();
    let n = arr.len();

    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = arr[i];
            let mut j = i;

            // Gapped insertion: shift greater elements `gap` slots right.
            while j >= gap && arr[j - gap] > temp {
                trace.record_compare(j, j - gap);
                arr[j] = arr[j - gap];
                let shifted = arr[j];
                trace.record_overwrite(j, shifted, &arr);
                j -= gap;
            }

            arr[j] = temp;
            trace.record_overwrite(j, temp, &arr);
        }
        gap /= 2;
    }

    trace
}
