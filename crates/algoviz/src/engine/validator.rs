//! Input validation for the algorithm core.
//!
//! ## Purpose
//!
//! This module provides validation functions for raw caller input:
//! sequences to be sorted, single numeric values for the tree and heap,
//! hash keys, and table sizes. The core itself assumes well-typed input,
//! so everything here runs *before* the core is reached.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Numeric validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Boundary discipline**: NotFound is never raised by the core; only
//!   malformed input is an error, and it is rejected here.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * Sequences that pass validation contain only finite values.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AlgovizError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for core input.
///
/// Provides static methods that return `Result<(), AlgovizError>` and
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sequence Validation
    // ========================================================================

    /// Validate a sequence of values for sorting.
    pub fn validate_sequence<T: Float>(values: &[T]) -> Result<(), AlgovizError> {
        // Check 1: Non-empty input
        if values.is_empty() {
            return Err(AlgovizError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(AlgovizError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_value<T: Float>(value: T, name: &str) -> Result<(), AlgovizError> {
        if !value.is_finite() {
            return Err(AlgovizError::InvalidNumericValue(format!(
                "{}={}",
                name,
                value.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Hash Input Validation
    // ========================================================================

    /// Validate a hash key.
    pub fn validate_key(key: &str) -> Result<(), AlgovizError> {
        if key.is_empty() {
            return Err(AlgovizError::EmptyKey);
        }
        Ok(())
    }

    /// Validate a hash table bucket count.
    pub fn validate_table_size(size: usize) -> Result<(), AlgovizError> {
        if size == 0 {
            return Err(AlgovizError::InvalidTableSize(size));
        }
        Ok(())
    }
}
