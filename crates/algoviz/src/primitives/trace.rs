//! Trace event model shared by all sorting algorithms.
//!
//! ## Purpose
//!
//! This module defines the event vocabulary that instrumented sorting
//! algorithms record: comparisons, swaps, overwrites, working-element
//! selections, and sorted-position markings. A completed trace is a full,
//! order-preserving record of the algorithm's elementary operations and is
//! sufficient to replay the sort stroke by stroke.
//!
//! ## Design notes
//!
//! * **Closed vocabulary**: Exactly five event kinds; fields not
//!   meaningful to a kind are absent rather than optional.
//! * **Snapshots**: Swap and Overwrite events carry a full copy of the
//!   working sequence taken immediately after the operation, so replay
//!   never has to re-derive intermediate states.
//! * **Immutability**: A trace is only appended to while the producing
//!   algorithm runs; consumers read it in order.
//!
//! ## Key concepts
//!
//! * **Compare**: Two positions were compared; no state changed.
//! * **Swap / Overwrite**: State changed; the snapshot is authoritative.
//! * **Select**: A position was chosen as a working element (insertion
//!   key or pivot).
//! * **Sorted**: Positions now known to be in final sorted order.
//!   Marking is append-only; positions are never un-marked.
//!
//! ## Invariants
//!
//! * Every Swap/Overwrite snapshot equals the exact sequence state
//!   immediately after that event is applied.
//! * Events appear in the order the algorithm performed them.
//!
//! ## Non-goals
//!
//! * This module does not replay traces (see `engine::replay`).
//! * This module does not pace or animate playback; that belongs to the
//!   presentation layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::slice::Iter;
use num_traits::Float;

// ============================================================================
// Trace Events
// ============================================================================

/// A single elementary operation recorded during a sort.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent<T> {
    /// Two positions were compared.
    Compare {
        /// First compared position.
        left: usize,
        /// Second compared position.
        right: usize,
    },

    /// The values at two positions were exchanged.
    Swap {
        /// First exchanged position.
        left: usize,
        /// Second exchanged position.
        right: usize,
        /// Full sequence state immediately after the exchange.
        snapshot: Vec<T>,
    },

    /// A value was written to one position.
    Overwrite {
        /// Position that was written.
        index: usize,
        /// Value now stored at `index`.
        value: T,
        /// Full sequence state immediately after the write.
        snapshot: Vec<T>,
    },

    /// A position was chosen as a working element (key or pivot).
    Select {
        /// Selected position.
        index: usize,
    },

    /// Positions now known to be in final sorted order.
    Sorted {
        /// Newly marked positions.
        positions: Vec<usize>,
    },
}

impl<T> TraceEvent<T> {
    /// Get the name of the event kind.
    #[inline]
    pub const fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Compare { .. } => "Compare",
            TraceEvent::Swap { .. } => "Swap",
            TraceEvent::Overwrite { .. } => "Overwrite",
            TraceEvent::Select { .. } => "Select",
            TraceEvent::Sorted { .. } => "Sorted",
        }
    }

    /// Returns `true` if this event mutated the working sequence.
    #[inline]
    pub const fn is_move(&self) -> bool {
        matches!(
            self,
            TraceEvent::Swap { .. } | TraceEvent::Overwrite { .. }
        )
    }

    /// The snapshot carried by this event, if any.
    #[inline]
    pub fn snapshot(&self) -> Option<&[T]> {
        match self {
            TraceEvent::Swap { snapshot, .. } | TraceEvent::Overwrite { snapshot, .. } => {
                Some(snapshot)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Trace
// ============================================================================

/// Ordered record of the elementary operations performed by one sort.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace<T> {
    events: Vec<TraceEvent<T>>,
}

impl<T: Float> Trace<T> {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Record a comparison of two positions.
    #[inline]
    pub fn record_compare(&mut self, left: usize, right: usize) {
        self.events.push(TraceEvent::Compare { left, right });
    }

    /// Record an exchange of two positions, snapshotting `state` after it.
    #[inline]
    pub fn record_swap(&mut self, left: usize, right: usize, state: &[T]) {
        self.events.push(TraceEvent::Swap {
            left,
            right,
            snapshot: state.to_vec(),
        });
    }

    /// Record a write of `value` at `index`, snapshotting `state` after it.
    #[inline]
    pub fn record_overwrite(&mut self, index: usize, value: T, state: &[T]) {
        self.events.push(TraceEvent::Overwrite {
            index,
            value,
            snapshot: state.to_vec(),
        });
    }

    /// Record the selection of a working element.
    #[inline]
    pub fn record_select(&mut self, index: usize) {
        self.events.push(TraceEvent::Select { index });
    }

    /// Record positions that reached their final sorted order.
    #[inline]
    pub fn record_sorted(&mut self, positions: &[usize]) {
        self.events.push(TraceEvent::Sorted {
            positions: positions.to_vec(),
        });
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// All recorded events, in execution order.
    #[inline]
    pub fn events(&self) -> &[TraceEvent<T>] {
        &self.events
    }

    /// Iterate over the recorded events in execution order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, TraceEvent<T>> {
        self.events.iter()
    }

    /// Number of recorded events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of recorded comparisons.
    pub fn comparisons(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Compare { .. }))
            .count()
    }

    /// Number of recorded moves (swaps plus overwrites).
    pub fn moves(&self) -> usize {
        self.events.iter().filter(|e| e.is_move()).count()
    }

    /// The last recorded snapshot, i.e. the final sequence state.
    ///
    /// `None` when the algorithm never mutated the sequence (already
    /// sorted input); the caller's input copy is then the final state.
    pub fn last_snapshot(&self) -> Option<&[T]> {
        self.events.iter().rev().find_map(TraceEvent::snapshot)
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a TraceEvent<T>;
    type IntoIter = Iter<'a, TraceEvent<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
