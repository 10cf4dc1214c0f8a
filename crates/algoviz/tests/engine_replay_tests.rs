//! Tests for trace replay and snapshot verification.
//!
//! These tests exercise the replay engine across all six algorithms
//! rather than one trace shape at a time:
//! - Replaying a trace over its input yields the sorted permutation
//! - Counts derived by replay agree with the trace's own tallies
//! - Snapshot verification accepts honest traces and rejects doctored ones
//!
//! ## Test Organization
//!
//! 1. **Cross-Algorithm Replay** - Final state over varied inputs
//! 2. **Counts and Marks** - Comparisons, moves, sorted positions
//! 3. **Verification** - Honest and tampered traces

use algoviz::prelude::*;

/// Inputs covering the shapes the algorithms behave differently on.
fn fixtures() -> Vec<Vec<f64>> {
    vec![
        vec![],
        vec![42.0],
        vec![5.0, 2.0, 4.0, 6.0, 1.0, 3.0],
        vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![3.0, 1.0, 3.0, 2.0, 3.0, 1.0],
        vec![-2.5, 0.0, -7.0, 3.5, 0.0],
    ]
}

/// Sorted copy of `values` for comparison.
fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap());
    out
}

// ============================================================================
// Cross-Algorithm Replay Tests
// ============================================================================

/// Test that replaying any algorithm's trace reconstructs the sorted
/// sequence.
#[test]
fn test_replay_reaches_sorted_state() {
    for algorithm in SortAlgorithm::ALL {
        for input in fixtures() {
            let trace = algorithm.run(&input);
            let outcome = replay(&input, &trace);

            assert_eq!(
                outcome.sequence,
                sorted(&input),
                "{} failed on {input:?}",
                algorithm.name()
            );
        }
    }
}

/// Test that replay on a trivial trace leaves the input untouched.
#[test]
fn test_replay_of_empty_trace() {
    let input = [3.0, 1.0, 2.0];
    let trace: Trace<f64> = Trace::new();
    let outcome = replay(&input, &trace);

    assert_eq!(outcome.sequence, input.to_vec());
    assert_eq!(outcome.comparisons, 0);
    assert_eq!(outcome.moves, 0);
    assert!(outcome.sorted_positions.is_empty());
}

// ============================================================================
// Counts and Marks Tests
// ============================================================================

/// Test that replay's counts agree with the trace's own tallies.
#[test]
fn test_counts_match_trace_tallies() {
    for algorithm in SortAlgorithm::ALL {
        for input in fixtures() {
            let trace = algorithm.run(&input);
            let outcome = replay(&input, &trace);

            assert_eq!(outcome.comparisons, trace.comparisons());
            assert_eq!(outcome.moves, trace.moves());
        }
    }
}

/// Test that bubble and selection mark every position sorted.
///
/// Only these two emit per-position Sorted events. A reversed input
/// keeps bubble swapping on every pass, so its early termination cannot
/// cut the marking short; after replay the accumulated marks cover the
/// whole range.
#[test]
fn test_sorted_marks_cover_range() {
    let input = [5.0, 4.0, 3.0, 2.0, 1.0];

    for algorithm in [Bubble, Selection] {
        let trace = algorithm.run(&input);
        let outcome = replay(&input, &trace);

        let marked: Vec<usize> = outcome.sorted_positions.iter().copied().collect();
        assert_eq!(marked, vec![0, 1, 2, 3, 4], "{}", algorithm.name());
    }
}

// ============================================================================
// Verification Tests
// ============================================================================

/// Test that every honest trace passes verification.
#[test]
fn test_honest_traces_verify() {
    for algorithm in SortAlgorithm::ALL {
        for input in fixtures() {
            let trace = algorithm.run(&input);
            assert!(
                verify_snapshots(&input, &trace),
                "{} rejected on {input:?}",
                algorithm.name()
            );
        }
    }
}

/// Test that a doctored snapshot is rejected.
#[test]
fn test_tampered_snapshot_rejected() {
    let input = [2.0, 1.0];
    let mut trace = Trace::new();
    // The snapshot claims a state the swap cannot produce.
    trace.record_swap(0, 1, &[9.0, 9.0]);

    assert!(!verify_snapshots(&input, &trace));
}

/// Test that out-of-bounds indices are rejected.
#[test]
fn test_out_of_bounds_rejected() {
    let input = [2.0, 1.0];

    let mut swapped = Trace::new();
    swapped.record_swap(0, 5, &[1.0, 2.0]);
    assert!(!verify_snapshots(&input, &swapped));

    let mut written = Trace::new();
    written.record_overwrite(7, 3.0, &[2.0, 1.0]);
    assert!(!verify_snapshots(&input, &written));
}

/// Test that a mismatched overwrite value is rejected.
#[test]
fn test_wrong_overwrite_value_rejected() {
    let input = [2.0, 1.0];
    let mut trace = Trace::new();
    trace.record_overwrite(0, 5.0, &[4.0, 1.0]);

    assert!(!verify_snapshots(&input, &trace));
}
