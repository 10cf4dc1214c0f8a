//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared vocabulary of the crate: the error type
//! and the trace event model recorded by every sorting algorithm. It has
//! zero internal dependencies within the crate.
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
//! Layer 2: Sorting
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Trace event model.
pub mod trace;
