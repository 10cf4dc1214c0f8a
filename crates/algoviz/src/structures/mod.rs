//! Layer 3: Structures
//!
//! # Purpose
//!
//! This layer provides the three classic search/index structures: a
//! copy-on-write binary search tree, a binary heap with a fixed min/max
//! ordering, and a fixed-bucket string hash index.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Structures ← You are here
//!   ↓
//! Layer 2: Sorting
//!   ↓
//! Layer 1: Primitives
//! ```

/// String hash index with open chaining.
pub mod hash;

/// Binary heap with configurable ordering.
pub mod heap;

/// Copy-on-write binary search tree.
pub mod tree;
