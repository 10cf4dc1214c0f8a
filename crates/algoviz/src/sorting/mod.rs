//! Layer 2: Sorting
//!
//! # Purpose
//!
//! This layer provides the six instrumented sorting algorithms. Each is a
//! pure function from an input slice to a [`Trace`]: the input is never
//! mutated, and the trace records every comparison, swap, and overwrite
//! the algorithm performed, in order.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Structures
//!   ↓
//! Layer 2: Sorting ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bubble sort with early termination.
pub mod bubble;

/// Insertion sort.
pub mod insertion;

/// Top-down merge sort.
pub mod merge;

/// Lomuto-partition quicksort.
pub mod quick;

/// Selection sort.
pub mod selection;

/// Shell sort with halving gaps.
pub mod shell;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::trace::Trace;

// ============================================================================
// Complexity Profiles
// ============================================================================

/// Time/space complexity classification for one sorting algorithm.
///
/// These are declared constants for informational display; nothing is
/// computed from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityProfile {
    /// Best-case time complexity.
    pub best_case: &'static str,

    /// Worst-case time complexity.
    pub worst_case: &'static str,

    /// Average-case time complexity.
    pub average_case: &'static str,

    /// Auxiliary space complexity.
    pub space: &'static str,

    /// One-line description of the algorithm's strategy.
    pub description: &'static str,
}

/// Profile for bubble sort.
const BUBBLE_PROFILE: ComplexityProfile = ComplexityProfile {
    best_case: "O(n)",
    worst_case: "O(n²)",
    average_case: "O(n²)",
    space: "O(1)",
    description: "Repeatedly swaps adjacent elements if they are in wrong order.",
};

/// Profile for selection sort.
const SELECTION_PROFILE: ComplexityProfile = ComplexityProfile {
    best_case: "O(n²)",
    worst_case: "O(n²)",
    average_case: "O(n²)",
    space: "O(1)",
    description: "Selects the smallest element and swaps it with the current position.",
};

/// Profile for insertion sort.
const INSERTION_PROFILE: ComplexityProfile = ComplexityProfile {
    best_case: "O(n)",
    worst_case: "O(n²)",
    average_case: "O(n²)",
    space: "O(1)",
    description: "Builds the sorted array one item at a time by inserting into correct position.",
};

/// Profile for shell sort.
const SHELL_PROFILE: ComplexityProfile = ComplexityProfile {
    best_case: "O(n log n)",
    worst_case: "O(n²)",
    average_case: "O(n log n)",
    space: "O(1)",
    description: "Improvement of insertion sort using gaps to move elements far apart.",
};

/// Profile for merge sort.
const MERGE_PROFILE: ComplexityProfile = ComplexityProfile {
    best_case: "O(n log n)",
    worst_case: "O(n log n)",
    average_case: "O(n log n)",
    space: "O(n)",
    description: "Divides array into halves, sorts them and merges them back.",
};

/// Profile for quicksort.
const QUICK_PROFILE: ComplexityProfile = ComplexityProfile {
    best_case: "O(n log n)",
    worst_case: "O(n²)",
    average_case: "O(n log n)",
    space: "O(log n)",
    description: "Partitions array around a pivot, then recursively sorts partitions.",
};

// ============================================================================
// Sort Algorithm Enum
// ============================================================================

/// Sorting algorithm selector.
///
/// Each variant dispatches to one instrumented algorithm and carries a
/// static [`ComplexityProfile`] for informational display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    /// Adjacent-exchange sort with zero-swap early termination.
    #[default]
    Bubble,

    /// Minimum-selection sort.
    Selection,

    /// Key-shifting insertion sort.
    Insertion,

    /// Gapped insertion sort with halving gap sequence.
    Shell,

    /// Stable top-down merge sort with left-biased tie-break.
    Merge,

    /// Last-element-pivot quicksort (Lomuto partition).
    Quick,
}

impl SortAlgorithm {
    /// All algorithms, in display order.
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the algorithm.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble",
            SortAlgorithm::Selection => "Selection",
            SortAlgorithm::Insertion => "Insertion",
            SortAlgorithm::Shell => "Shell",
            SortAlgorithm::Merge => "Merge",
            SortAlgorithm::Quick => "Quick",
        }
    }

    /// Get the static complexity profile.
    #[inline]
    pub const fn profile(&self) -> &'static ComplexityProfile {
        match self {
            SortAlgorithm::Bubble => &BUBBLE_PROFILE,
            SortAlgorithm::Selection => &SELECTION_PROFILE,
            SortAlgorithm::Insertion => &INSERTION_PROFILE,
            SortAlgorithm::Shell => &SHELL_PROFILE,
            SortAlgorithm::Merge => &MERGE_PROFILE,
            SortAlgorithm::Quick => &QUICK_PROFILE,
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run this algorithm on `input` and return its trace.
    ///
    /// The input is not mutated; the trace's last snapshot (when present)
    /// holds the fully sorted sequence. Runs to completion atomically:
    /// trace generation cannot be suspended or cancelled.
    pub fn run<T: Float>(&self, input: &[T]) -> Trace<T> {
        match self {
            SortAlgorithm::Bubble => bubble::bubble_sort(input),
            SortAlgorithm::Selection => selection::selection_sort(input),
            SortAlgorithm::Insertion => insertion::insertion_sort(input),
            SortAlgorithm::Shell => shell::shell_sort(input),
            SortAlgorithm::Merge => merge::merge_sort(input),
            SortAlgorithm::Quick => quick::quick_sort(input),
        }
    }
}
