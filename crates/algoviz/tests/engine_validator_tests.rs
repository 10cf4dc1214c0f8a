//! Tests for input validation.
//!
//! These tests exercise the boundary checks that run before any input
//! reaches the algorithm core. The validator is internal, so this file
//! is gated on the `dev` feature.
//!
//! ## Test Organization
//!
//! 1. **Sequence Validation** - Empty and non-finite sequences
//! 2. **Value Validation** - Single-value finiteness with context names
//! 3. **Hash Input Validation** - Keys and table sizes

#![cfg(feature = "dev")]

use algoviz::internals::engine::validator::Validator;
use algoviz::prelude::*;

// ============================================================================
// Sequence Validation Tests
// ============================================================================

/// Test that a well-formed sequence passes.
#[test]
fn test_valid_sequence() {
    assert!(Validator::validate_sequence(&[1.0, -2.5, 0.0]).is_ok());
    assert!(Validator::validate_sequence(&[42.0]).is_ok());
}

/// Test that an empty sequence is rejected.
#[test]
fn test_empty_sequence_rejected() {
    let result = Validator::validate_sequence::<f64>(&[]);
    assert!(matches!(result, Err(AlgovizError::EmptyInput)));
}

/// Test that non-finite values are rejected with their position.
#[test]
fn test_non_finite_values_rejected() {
    let result = Validator::validate_sequence(&[1.0, f64::NAN, 3.0]);
    match result {
        Err(AlgovizError::InvalidNumericValue(detail)) => {
            assert!(detail.contains("values[1]"), "detail was {detail:?}");
        }
        other => panic!("expected InvalidNumericValue, got {other:?}"),
    }

    assert!(Validator::validate_sequence(&[f64::INFINITY]).is_err());
    assert!(Validator::validate_sequence(&[f64::NEG_INFINITY]).is_err());
}

/// Test that validation fails at the first bad value.
#[test]
fn test_fail_fast_on_first_violation() {
    let result = Validator::validate_sequence(&[f64::NAN, f64::INFINITY]);
    match result {
        Err(AlgovizError::InvalidNumericValue(detail)) => {
            assert!(detail.contains("values[0]"), "detail was {detail:?}");
        }
        other => panic!("expected InvalidNumericValue, got {other:?}"),
    }
}

// ============================================================================
// Value Validation Tests
// ============================================================================

/// Test single-value validation and its context name.
#[test]
fn test_single_value() {
    assert!(Validator::validate_value(3.5, "value").is_ok());

    let result = Validator::validate_value(f64::NAN, "key");
    match result {
        Err(AlgovizError::InvalidNumericValue(detail)) => {
            assert!(detail.starts_with("key="), "detail was {detail:?}");
        }
        other => panic!("expected InvalidNumericValue, got {other:?}"),
    }
}

// ============================================================================
// Hash Input Validation Tests
// ============================================================================

/// Test hash key validation.
#[test]
fn test_key_validation() {
    assert!(Validator::validate_key("ab").is_ok());
    assert!(matches!(
        Validator::validate_key(""),
        Err(AlgovizError::EmptyKey)
    ));
}

/// Test table size validation.
#[test]
fn test_table_size_validation() {
    assert!(Validator::validate_table_size(11).is_ok());
    assert!(Validator::validate_table_size(1).is_ok());
    assert!(matches!(
        Validator::validate_table_size(0),
        Err(AlgovizError::InvalidTableSize(0))
    ));
}
