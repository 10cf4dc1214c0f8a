//! Tests for the copy-on-write binary search tree.
//!
//! These tests verify the ordered tree store:
//! - Insert/search/delete semantics, including the silent-no-op policies
//! - The in-order successor rule for two-child deletion
//! - Copy-on-write independence of returned roots
//!
//! ## Test Organization
//!
//! 1. **Insert and Search** - Placement, misses, duplicate policy
//! 2. **Delete** - Leaf, one-child, two-child, root, and absent cases
//! 3. **Copy-on-Write** - Old roots are unaffected by later mutations
//! 4. **Invariants** - In-order traversal across operation sequences

use algoviz::prelude::*;

/// Build a tree from values, inserting left to right.
fn tree_of(values: &[f64]) -> SearchTree<f64> {
    values
        .iter()
        .fold(SearchTree::new(), |tree, &v| tree.insert(v))
}

// ============================================================================
// Insert and Search Tests
// ============================================================================

/// Test the worked reference sequence.
///
/// Inserting 5,3,8,1 then searching 8 finds it; deleting 3 removes only
/// 3, and 1 remains reachable.
#[test]
fn test_reference_sequence() {
    let tree = tree_of(&[5.0, 3.0, 8.0, 1.0]);

    assert!(tree.contains(8.0));

    let after = tree.delete(3.0);
    assert!(!after.contains(3.0));
    assert!(after.contains(1.0));
}

/// Test search on an empty tree and on a miss.
#[test]
fn test_search_misses() {
    let empty: SearchTree<f64> = SearchTree::new();
    assert!(empty.search(1.0).is_none());
    assert!(empty.is_empty());

    let tree = tree_of(&[2.0, 1.0, 3.0]);
    assert!(tree.search(9.0).is_none());
}

/// Test that search returns the node holding the value.
#[test]
fn test_search_returns_node() {
    let tree = tree_of(&[5.0, 3.0, 8.0]);

    let node = tree.search(3.0).expect("3 should be present");
    assert_eq!(node.value(), 3.0);

    // 3 is the left child of the root.
    let root = tree.root().expect("tree is non-empty");
    assert_eq!(root.value(), 5.0);
    assert_eq!(root.left().map(TreeNode::value), Some(3.0));
    assert_eq!(root.right().map(TreeNode::value), Some(8.0));
}

/// Test that inserting a duplicate value is a silent no-op.
#[test]
fn test_duplicate_insert_is_noop() {
    let tree = tree_of(&[5.0, 3.0, 8.0]);
    let again = tree.insert(3.0);

    assert_eq!(again.len(), 3);
    assert_eq!(again.in_order(), vec![3.0, 5.0, 8.0]);
}

/// Test insertion into an empty tree.
#[test]
fn test_insert_into_empty() {
    let tree = SearchTree::new().insert(7.0);
    assert_eq!(tree.root().map(TreeNode::value), Some(7.0));
    assert_eq!(tree.len(), 1);
}

// ============================================================================
// Delete Tests
// ============================================================================

/// Test deleting a leaf node.
#[test]
fn test_delete_leaf() {
    let tree = tree_of(&[5.0, 3.0, 8.0]);
    let after = tree.delete(3.0);

    assert_eq!(after.in_order(), vec![5.0, 8.0]);
}

/// Test deleting a node with one child.
#[test]
fn test_delete_one_child() {
    // 3 has a single left child 1.
    let tree = tree_of(&[5.0, 3.0, 1.0, 8.0]);
    let after = tree.delete(3.0);

    assert_eq!(after.in_order(), vec![1.0, 5.0, 8.0]);

    // 1 was spliced into 3's place.
    let root = after.root().expect("tree is non-empty");
    assert_eq!(root.left().map(TreeNode::value), Some(1.0));
}

/// Test deleting a node with two children.
///
/// The node's value is replaced by its in-order successor (the minimum
/// of the right subtree), which is then removed from that subtree.
#[test]
fn test_delete_two_children_uses_successor() {
    //        5
    //      /   \
    //     2     8
    //    / \   / \
    //   1   3 6   9
    //              \
    //               7  (under 6)
    let tree = tree_of(&[5.0, 2.0, 8.0, 1.0, 3.0, 6.0, 9.0, 7.0]);
    let after = tree.delete(5.0);

    // Successor of 5 is 6.
    let root = after.root().expect("tree is non-empty");
    assert_eq!(root.value(), 6.0);
    assert_eq!(after.in_order(), vec![1.0, 2.0, 3.0, 6.0, 7.0, 8.0, 9.0]);
}

/// Test deleting the root of a single-node tree.
#[test]
fn test_delete_only_node() {
    let tree = SearchTree::new().insert(4.0);
    let after = tree.delete(4.0);
    assert!(after.is_empty());
}

/// Test that deleting an absent value is a silent no-op.
#[test]
fn test_delete_absent_is_noop() {
    let tree = tree_of(&[5.0, 3.0, 8.0]);
    let after = tree.delete(42.0);

    assert_eq!(after.in_order(), tree.in_order());
}

// ============================================================================
// Copy-on-Write Tests
// ============================================================================

/// Test that previously returned roots are unaffected by later mutations.
#[test]
fn test_old_roots_stay_valid() {
    let v1 = tree_of(&[5.0, 3.0, 8.0]);
    let v2 = v1.insert(1.0);
    let v3 = v2.delete(8.0);

    assert_eq!(v1.in_order(), vec![3.0, 5.0, 8.0]);
    assert_eq!(v2.in_order(), vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(v3.in_order(), vec![1.0, 3.0, 5.0]);
}

// ============================================================================
// Invariant Tests
// ============================================================================

/// Test the in-order invariant across a mixed operation sequence.
///
/// After any sequence of inserts and deletes, the in-order traversal is
/// strictly increasing (sorted, no duplicates).
#[test]
fn test_in_order_invariant_across_sequence() {
    let inserts = [13.0, 7.0, 21.0, 3.0, 9.0, 17.0, 29.0, 1.0, 5.0, 11.0];
    let deletes = [7.0, 21.0, 1.0, 13.0];

    let mut tree = tree_of(&inserts);
    for &value in &deletes {
        tree = tree.delete(value);

        let values = tree.in_order();
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "in-order not strictly increasing after deleting {value}: {values:?}"
        );
    }

    assert_eq!(tree.len(), inserts.len() - deletes.len());
}
