//! # Algoviz — Instrumented Algorithm Core
//!
//! A deterministic, replayable core for educational algorithm demonstrators.
//! Six classic sorting algorithms record every elementary operation they
//! perform (comparisons, swaps, overwrites, selections, sorted markings)
//! into an ordered **trace** that a presentation layer can replay at any
//! pace. Alongside the sorts, the crate provides three classic search
//! structures: a copy-on-write binary search tree, a min/max binary heap,
//! and a fixed-bucket string hash index.
//!
//! ## Quick Start
//!
//! ```rust
//! use algoviz::prelude::*;
//!
//! let data = vec![5.0, 2.0, 4.0, 6.0, 1.0, 3.0];
//!
//! let outcome = Sorter::new(Insertion).sort(&data)?;
//!
//! assert_eq!(outcome.sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! println!("{}", outcome);
//! # Result::<(), AlgovizError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:   Insertion
//!   Data points: 6
//!   Comparisons: 9
//!   Moves:       14
//!   Complexity:  best O(n), average O(n²), worst O(n²), space O(1)
//! ```
//!
//! ## Traces
//!
//! A [`prelude::Trace`] is an ordered sequence of five event kinds:
//! `Compare`, `Swap`, `Overwrite`, `Select`, and `Sorted`. Swap and
//! Overwrite events carry a full snapshot of the working sequence taken
//! immediately after the operation, so replaying the trace reconstructs
//! the sort stroke by stroke without re-running the algorithm:
//!
//! ```rust
//! use algoviz::prelude::*;
//!
//! let data = vec![3.0, 1.0, 2.0];
//! let trace = Quick.run(&data);
//!
//! let replayed = replay(&data, &trace);
//! assert_eq!(replayed.sequence, vec![1.0, 2.0, 3.0]);
//! ```
//!
//! ## Structures
//!
//! ```rust
//! use algoviz::prelude::*;
//!
//! // Copy-on-write binary search tree: mutation returns a new root.
//! let tree = SearchTree::new().insert(5.0).insert(3.0).insert(8.0);
//! assert!(tree.contains(8.0));
//! let smaller = tree.delete(3.0);
//! assert!(!smaller.contains(3.0));
//! assert!(tree.contains(3.0)); // the old root is untouched
//!
//! // Binary heap with a fixed ordering mode.
//! let mut heap = PriorityHeap::new(Max);
//! heap.insert(5.0);
//! heap.insert(3.0);
//! let snapshot = heap.insert(8.0);
//! assert_eq!(snapshot[0], 8.0);
//!
//! // Fixed-bucket string hash index (additive hash, 11 buckets).
//! let mut index = HashIndex::default();
//! index.insert("ab");
//! assert_eq!(index.bucket_index("ab"), 8);
//! ```
//!
//! ## Error Handling
//!
//! The structures never raise on a miss: a failed tree search returns
//! `None`, deleting an absent value is a no-op, and extracting from an
//! empty heap returns an empty snapshot. Only malformed *input* is an
//! error, and it is rejected before it reaches the core — see
//! [`prelude::AlgovizError`].
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (elapsed-time measurement in
//! sort outcomes is only available with `std`):
//!
//! ```toml
//! [dependencies]
//! algoviz = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type and the trace event vocabulary.
mod primitives;

// Layer 2: Sorting - the six instrumented sorting algorithms.
mod sorting;

// Layer 3: Structures - search tree, priority heap, hash index.
mod structures;

// Layer 4: Engine - validation, trace replay, and result assembly.
mod engine;

// High-level facade and public re-exports.
mod api;

// Standard algoviz prelude.
pub mod prelude {
    pub use crate::api::{
        hash_key, replay, sort, verify_snapshots, AlgovizError, ComplexityProfile, HashIndex,
        HeapOrder::{self, Max, Min},
        PriorityHeap, ReplayOutcome, SearchTree,
        SortAlgorithm::{self, Bubble, Insertion, Merge, Quick, Selection, Shell},
        SortOutcome, Sorter, Trace, TraceEvent, TreeNode, DEFAULT_TABLE_SIZE,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod sorting {
        pub use crate::sorting::*;
    }
    pub mod structures {
        pub use crate::structures::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
