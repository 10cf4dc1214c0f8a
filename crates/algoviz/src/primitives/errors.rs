//! Error types for algoviz operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when feeding
//! input into the algorithm core: malformed sequences, non-finite values,
//! empty hash keys, and invalid table sizes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending value or position.
//! * **Boundary-only**: The core structures themselves never raise; a
//!   failed search or delete is represented as an unchanged/absent result.
//!   Errors exist solely to reject bad input before it reaches the core.
//! * **No-std**: Supports `no_std` environments by using `alloc` for
//!   dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not model "not found" outcomes; absence is a value,
//!   not an error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for algoviz operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgovizError {
    /// Input sequence is empty; sorting requires at least one element.
    EmptyInput,

    /// Input contains a NaN or infinite value.
    InvalidNumericValue(String),

    /// Hash keys must be non-empty strings.
    EmptyKey,

    /// Hash table size must be at least 1 bucket.
    InvalidTableSize(usize),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgovizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::EmptyKey => write!(f, "Hash key is empty"),
            Self::InvalidTableSize(size) => {
                write!(f, "Invalid table size: {size} (must be at least 1)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AlgovizError {}
