//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the algorithm core and the public API: it
//! validates raw input before it reaches the core, replays completed
//! traces, and assembles the result type handed back to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Structures
//!   ↓
//! Layer 2: Sorting
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort result assembly.
pub mod output;

/// Trace replay and snapshot verification.
pub mod replay;

/// Input validation.
pub mod validator;
