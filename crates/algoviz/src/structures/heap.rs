//! Binary heap with a fixed min/max ordering.
//!
//! ## Purpose
//!
//! This module provides the priority structure: a binary heap stored as a
//! flat sequence and interpreted as a complete binary tree via positional
//! indexing. The ordering mode (min or max) is chosen at construction and
//! fixed for the heap's lifetime.
//!
//! ## Design notes
//!
//! * **Indexing**: Position `p` has children at `2p + 1` and `2p + 2` and
//!   parent at `(p - 1) / 2`.
//! * **Snapshots**: Every mutating operation returns a fresh copy of the
//!   backing sequence so the caller can re-render it as a tree and a flat
//!   array without aliasing the live structure.
//! * **Tie rule**: When sifting down, the right child is chosen over the
//!   left only if it strictly outranks it; the left child wins ties.
//!
//! ## Invariants
//!
//! * For every position with a parent, the parent never ranks worse than
//!   the child under the configured ordering.
//!
//! ## Non-goals
//!
//! * No operation errors: extracting from an empty heap and deleting an
//!   absent value are no-ops. Callers own existence checks and
//!   user-facing messages.
//! * Single-writer only; no concurrent-access contract is provided.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Heap Ordering
// ============================================================================

/// Ordering mode of a [`PriorityHeap`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Smallest value at the root.
    #[default]
    Min,

    /// Largest value at the root.
    Max,
}

impl HeapOrder {
    /// Get the name of the ordering mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            HeapOrder::Min => "Min",
            HeapOrder::Max => "Max",
        }
    }
}

// ============================================================================
// Priority Heap
// ============================================================================

/// Binary heap over a flat sequence, min- or max-ordered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriorityHeap<T> {
    data: Vec<T>,
    order: HeapOrder,
}

impl<T: Float> PriorityHeap<T> {
    /// Create an empty heap with the given ordering mode.
    pub fn new(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The configured ordering mode.
    #[inline]
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// The root element (best-ranked), if the heap is non-empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The backing sequence in heap order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A fresh copy of the backing sequence.
    #[inline]
    pub fn snapshot(&self) -> Vec<T> {
        self.data.clone()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert `value` and return the post-operation snapshot.
    ///
    /// The value is appended to the end of the sequence and sifted upward
    /// until it no longer outranks its parent.
    pub fn insert(&mut self, value: T) -> Vec<T> {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        self.snapshot()
    }

    /// Remove the root and return the post-operation snapshot.
    ///
    /// The last element replaces the root and is sifted downward. Calling
    /// this on an empty heap is a no-op returning an empty snapshot; no
    /// extracted element is reported, so callers check [`len`](Self::len)
    /// beforehand.
    pub fn extract_root(&mut self) -> Vec<T> {
        let last = match self.data.pop() {
            Some(value) => value,
            None => return Vec::new(),
        };

        if !self.data.is_empty() {
            self.data[0] = last;
            self.sift_down(0);
        }

        self.snapshot()
    }

    /// Remove the first occurrence of `value` and return the snapshot.
    ///
    /// An absent value is a no-op returning the unchanged snapshot. When
    /// the found position is not the tail, the tail element replaces it
    /// and both an upward and a downward sift are attempted; the heap
    /// property guarantees at most one of them moves anything.
    pub fn delete(&mut self, value: T) -> Vec<T> {
        let index = match self.data.iter().position(|v| *v == value) {
            Some(index) => index,
            None => return self.snapshot(),
        };

        let last = match self.data.pop() {
            Some(value) => value,
            // Unreachable: position() found an element above.
            None => return self.snapshot(),
        };

        // The value was the tail element: truncation already removed it.
        if index == self.data.len() {
            return self.snapshot();
        }

        self.data[index] = last;
        self.sift_up(index);
        self.sift_down(index);

        self.snapshot()
    }

    // ========================================================================
    // Sift Operations
    // ========================================================================

    /// Returns `true` if `a` ranks strictly better than `b` under the
    /// configured ordering.
    #[inline]
    fn ranks_before(&self, a: T, b: T) -> bool {
        match self.order {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }

    /// Move the element at `index` upward until its parent ranks at least
    /// as well.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.ranks_before(self.data[index], self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` downward, swapping with the
    /// best-ranked child until neither child outranks it.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut candidate = None;

            if left < len && self.ranks_before(self.data[left], self.data[index]) {
                candidate = Some(left);
            }

            if right < len {
                // Right must strictly outrank the current candidate
                // (or the element itself); left wins ties.
                let rival = candidate.unwrap_or(index);
                if self.ranks_before(self.data[right], self.data[rival]) {
                    candidate = Some(right);
                }
            }

            match candidate {
                Some(child) => {
                    self.data.swap(index, child);
                    index = child;
                }
                None => break,
            }
        }
    }
}
