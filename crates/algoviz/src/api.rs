//! High-level API for the algorithm core.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for sorting:
//! a small [`Sorter`] facade that validates input, runs the selected
//! algorithm to completion, and assembles a [`SortOutcome`]. It also
//! re-exports the public types of the lower layers.
//!
//! ## Design notes
//!
//! * **Validated**: Input is checked (non-empty, all finite) before the
//!   core is reached; the core itself never raises.
//! * **Atomic**: Trace generation always runs to completion; there is no
//!   suspension or cancellation below this layer.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Invocation Flow**: Pick a [`SortAlgorithm`], construct a
//!   [`Sorter`], call [`sort`](Sorter::sort); or use the free-function
//!   shorthand [`sort`].

// External dependencies
use num_traits::Float;
#[cfg(feature = "std")]
use std::time::Instant;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::SortOutcome;
pub use crate::engine::replay::{replay, verify_snapshots, ReplayOutcome};
pub use crate::primitives::errors::AlgovizError;
pub use crate::primitives::trace::{Trace, TraceEvent};
pub use crate::sorting::{ComplexityProfile, SortAlgorithm};
pub use crate::structures::hash::{hash_key, HashIndex, DEFAULT_TABLE_SIZE};
pub use crate::structures::heap::{HeapOrder, PriorityHeap};
pub use crate::structures::tree::{SearchTree, TreeNode};

// ============================================================================
// Sorter Facade
// ============================================================================

/// Configured sort invocation facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sorter {
    algorithm: SortAlgorithm,
}

impl Sorter {
    /// Create a sorter for the given algorithm.
    pub fn new(algorithm: SortAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The configured algorithm.
    #[inline]
    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Sort `values`, returning the trace and derived results.
    ///
    /// Validates the input first: an empty sequence or any non-finite
    /// value is rejected before the algorithm runs. The trace is then
    /// generated atomically and replayed once to populate the outcome's
    /// sorted sequence and operation counts.
    pub fn sort<T: Float>(&self, values: &[T]) -> Result<SortOutcome<T>, AlgovizError> {
        Validator::validate_sequence(values)?;

        #[cfg(feature = "std")]
        let started = Instant::now();

        let trace = self.algorithm.run(values);

        #[cfg(feature = "std")]
        let elapsed = started.elapsed();

        let replayed = replay(values, &trace);

        Ok(SortOutcome {
            algorithm: self.algorithm,
            input: values.to_vec(),
            sorted: replayed.sequence,
            trace,
            comparisons: replayed.comparisons,
            moves: replayed.moves,
            #[cfg(feature = "std")]
            elapsed,
        })
    }
}

/// Sort `values` with `algorithm`; shorthand for a one-off [`Sorter`].
pub fn sort<T: Float>(
    algorithm: SortAlgorithm,
    values: &[T],
) -> Result<SortOutcome<T>, AlgovizError> {
    Sorter::new(algorithm).sort(values)
}
