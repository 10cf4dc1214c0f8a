//! Tests for the prelude surface.
//!
//! A single glob import must bring in every name a demonstrator frontend
//! needs: the sorting facade, the three structures, the replay helpers,
//! and the bare enum variants.

use algoviz::prelude::*;

/// Test that the prelude exposes the full public surface.
#[test]
fn test_prelude_covers_public_surface() {
    // Bare algorithm variants and the enum itself.
    let algorithms: [SortAlgorithm; 6] = [Bubble, Selection, Insertion, Shell, Merge, Quick];
    assert_eq!(algorithms, SortAlgorithm::ALL);

    // Sorting facade and outcome.
    let outcome: SortOutcome<f64> = sort(Bubble, &[2.0, 1.0]).expect("valid input");
    assert_eq!(outcome.sorted, vec![1.0, 2.0]);

    // Replay helpers over the raw trace type.
    let trace: Trace<f64> = Quick.run(&[2.0, 1.0]);
    let replayed: ReplayOutcome<f64> = replay(&[2.0, 1.0], &trace);
    assert_eq!(replayed.sequence, vec![1.0, 2.0]);
    assert!(verify_snapshots(&[2.0, 1.0], &trace));

    // Structures with bare ordering variants.
    let tree: SearchTree<f64> = SearchTree::new().insert(1.0);
    assert!(tree.root().map(TreeNode::value).is_some());

    let mut heap: PriorityHeap<f64> = PriorityHeap::new(Max);
    heap.insert(1.0);
    assert_eq!(heap.order(), HeapOrder::Max);
    let _ = PriorityHeap::<f64>::new(Min);

    let index = HashIndex::default();
    assert_eq!(index.table_size(), DEFAULT_TABLE_SIZE);
    assert_eq!(hash_key("ab", DEFAULT_TABLE_SIZE), 8);

    // Error and metadata types are nameable.
    let _: Option<AlgovizError> = None;
    let profile: &ComplexityProfile = Bubble.profile();
    assert!(!profile.description.is_empty());

    // Trace events are matchable by variant.
    assert!(trace
        .iter()
        .any(|e| matches!(e, TraceEvent::Swap { .. } | TraceEvent::Compare { .. })));
}
