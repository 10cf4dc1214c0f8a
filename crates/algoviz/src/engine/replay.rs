//! Trace replay and snapshot verification.
//!
//! ## Purpose
//!
//! This module reconstructs a sort from its trace: applying every
//! Swap/Overwrite snapshot in order yields the final sorted sequence,
//! while Compare/Sorted events accumulate into operation counts and
//! final-position marks. It also provides a strict verifier that checks
//! each snapshot against an independently re-applied operation.
//!
//! ## Design notes
//!
//! * **Snapshot-driven**: Replay trusts the recorded snapshots; it never
//!   re-runs the algorithm.
//! * **Pace-free**: Replay is a plain loop. Pacing replayed events (one
//!   per animation tick) belongs entirely to the presentation layer.
//!
//! ## Invariants
//!
//! * Replaying a trace over its original input yields a permutation of
//!   the input.
//! * Sorted marks are append-only; replay never un-marks a position.
//!
//! ## Non-goals
//!
//! * This module does not validate input data.
//! * This module does not render or animate anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeSet, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::trace::{Trace, TraceEvent};

// ============================================================================
// Replay Outcome
// ============================================================================

/// State reconstructed by replaying a trace over its input.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome<T> {
    /// Final sequence state after the last snapshot.
    pub sequence: Vec<T>,

    /// Positions marked as being in final sorted order.
    pub sorted_positions: BTreeSet<usize>,

    /// Number of Compare events.
    pub comparisons: usize,

    /// Number of Swap and Overwrite events.
    pub moves: usize,
}

// ============================================================================
// Replay
// ============================================================================

/// Replay `trace` over `initial`, reconstructing the final state.
pub fn replay<T: Float>(initial: &[T], trace: &Trace<T>) -> ReplayOutcome<T> {
    let mut sequence: Vec<T> = initial.to_vec();
    let mut sorted_positions = BTreeSet::new();
    let mut comparisons = 0;
    let mut moves = 0;

    for event in trace {
        match event {
            TraceEvent::Compare { .. } => comparisons += 1,
            TraceEvent::Swap { snapshot, .. } | TraceEvent::Overwrite { snapshot, .. } => {
                moves += 1;
                sequence.clear();
                sequence.extend_from_slice(snapshot);
            }
            TraceEvent::Select { .. } => {}
            TraceEvent::Sorted { positions } => {
                sorted_positions.extend(positions.iter().copied());
            }
        }
    }

    ReplayOutcome {
        sequence,
        sorted_positions,
        comparisons,
        moves,
    }
}

// ============================================================================
// Snapshot Verification
// ============================================================================

/// Check every Swap/Overwrite snapshot against an independently applied
/// operation.
///
/// Maintains a running copy of the sequence, applies each Swap by
/// exchanging its two positions and each Overwrite by writing its value,
/// then compares the result with the recorded snapshot. Returns `false`
/// on the first mismatch or out-of-bounds index.
pub fn verify_snapshots<T: Float>(initial: &[T], trace: &Trace<T>) -> bool {
    let mut state: Vec<T> = initial.to_vec();
    let len = state.len();

    for event in trace {
        match event {
            TraceEvent::Swap {
                left,
                right,
                snapshot,
            } => {
                if *left >= len || *right >= len {
                    return false;
                }
                state.swap(*left, *right);
                if state != *snapshot {
                    return false;
                }
            }
            TraceEvent::Overwrite {
                index,
                value,
                snapshot,
            } => {
                if *index >= len {
                    return false;
                }
                state[*index] = *value;
                if state != *snapshot {
                    return false;
                }
            }
            _ => {}
        }
    }

    true
}
