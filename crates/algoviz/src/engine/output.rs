//! Output types for sort invocations.
//!
//! ## Purpose
//!
//! This module defines the `SortOutcome` struct which bundles everything
//! a presentation layer needs after one sort invocation: the trace, the
//! final sorted sequence, operation counts, and (with `std`) the elapsed
//! computation time.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Self-contained**: The input copy and the trace are kept together
//!   so the outcome can be replayed without the original call site.
//!
//! ## Invariants
//!
//! * `sorted` equals the result of replaying `trace` over `input`.
//! * `comparisons` and `moves` agree with the trace's event counts.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting or replay; it only stores
//!   results assembled by the API layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
#[cfg(feature = "std")]
use core::time::Duration;
use num_traits::Float;

// Internal dependencies
use crate::primitives::trace::Trace;
use crate::sorting::SortAlgorithm;

// ============================================================================
// Sort Outcome
// ============================================================================

/// Complete result of one sort invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome<T> {
    /// Algorithm that produced this outcome.
    pub algorithm: SortAlgorithm,

    /// Copy of the unsorted input sequence.
    pub input: Vec<T>,

    /// Fully sorted sequence (ascending).
    pub sorted: Vec<T>,

    /// Full operation trace, replayable in order.
    pub trace: Trace<T>,

    /// Number of comparisons performed.
    pub comparisons: usize,

    /// Number of moves performed (swaps plus overwrites).
    pub moves: usize,

    /// Wall-clock time spent generating the trace.
    #[cfg(feature = "std")]
    pub elapsed: Duration,
}

impl<T: Float> SortOutcome<T> {
    /// Number of elements sorted.
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Returns `true` if the input was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SortOutcome<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let profile = self.algorithm.profile();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:   {}", self.algorithm.name())?;
        writeln!(f, "  Data points: {}", self.input.len())?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Moves:       {}", self.moves)?;
        writeln!(
            f,
            "  Complexity:  best {}, average {}, worst {}, space {}",
            profile.best_case, profile.average_case, profile.worst_case, profile.space
        )?;

        #[cfg(feature = "std")]
        writeln!(f, "  Elapsed:     {:?}", self.elapsed)?;

        writeln!(f)?;
        writeln!(f, "Sorted Data:")?;
        write!(f, " ")?;
        for value in &self.sorted {
            write!(f, " {value}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}
