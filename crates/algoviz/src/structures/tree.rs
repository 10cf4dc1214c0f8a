//! Copy-on-write binary search tree.
//!
//! ## Purpose
//!
//! This module provides an ordered tree store over numeric values with
//! copy-on-write mutation: `insert` and `delete` take the tree by
//! reference and return a new, structurally independent tree, so any
//! previously returned root stays valid for rendering.
//!
//! ## Design notes
//!
//! * **Ownership**: Children are exclusively owned by their parent
//!   (`Option<Box<_>>`); there are no parent back-references and no
//!   shared ownership.
//! * **Copy-on-write**: Mutation deep-clones the tree and mutates the
//!   clone. Structural sharing would be an equally valid strategy; full
//!   cloning keeps the ownership story trivial.
//! * **No duplicates**: Inserting an existing value is a silent no-op.
//!   This is a fixed policy of the store, not an error.
//!
//! ## Key concepts
//!
//! * **In-order successor**: Deleting a two-child node copies in the
//!   minimum of its right subtree, then deletes that value from the
//!   right subtree.
//!
//! ## Invariants
//!
//! * For every node, all left-subtree values are strictly less and all
//!   right-subtree values strictly greater than the node's value.
//! * In-order traversal is strictly increasing.
//!
//! ## Non-goals
//!
//! * No operation errors: a search miss is `None` and deleting an absent
//!   value returns an equivalent tree. Callers own user-facing "not
//!   found" reporting.
//! * This module does not balance the tree.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Tree Node
// ============================================================================

/// A single node of the search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    value: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

impl<T: Float> TreeNode<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored at this node.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Left child, if present.
    #[inline]
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Right child, if present.
    #[inline]
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }
}

// ============================================================================
// Search Tree
// ============================================================================

/// Ordered tree store with copy-on-write mutation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchTree<T> {
    root: Option<Box<TreeNode<T>>>,
}

impl<T: Float> SearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The root node, if the tree is non-empty.
    #[inline]
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Find the node holding `value`, or `None` on a miss or empty tree.
    pub fn search(&self, value: T) -> Option<&TreeNode<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value < node.value {
                current = node.left.as_deref();
            } else if value > node.value {
                current = node.right.as_deref();
            } else {
                return Some(node);
            }
        }
        None
    }

    /// Returns `true` if `value` is stored in the tree.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.search(value).is_some()
    }

    /// Collect all values in ascending order.
    pub fn in_order(&self) -> Vec<T> {
        let mut values = Vec::new();
        collect_in_order(self.root.as_deref(), &mut values);
        values
    }

    /// Number of values stored in the tree.
    pub fn len(&self) -> usize {
        count_nodes(self.root.as_deref())
    }

    // ========================================================================
    // Copy-on-Write Mutation
    // ========================================================================

    /// Return a new tree with `value` inserted as a leaf.
    ///
    /// Inserting an existing value yields an equivalent tree (silent
    /// no-op). The receiver is left untouched.
    pub fn insert(&self, value: T) -> SearchTree<T> {
        let mut next = self.clone();
        insert_into(&mut next.root, value);
        next
    }

    /// Return a new tree with `value` removed.
    ///
    /// Deleting an absent value yields an equivalent tree (silent no-op).
    /// The receiver is left untouched.
    pub fn delete(&self, value: T) -> SearchTree<T> {
        let mut next = self.clone();
        next.root = delete_from(next.root.take(), value);
        next
    }
}

// ============================================================================
// Recursive Helpers
// ============================================================================

/// Descend to the first empty slot and attach `value` as a new leaf.
fn insert_into<T: Float>(slot: &mut Option<Box<TreeNode<T>>>, value: T) {
    match slot {
        None => *slot = Some(Box::new(TreeNode::new(value))),
        Some(node) => {
            if value < node.value {
                insert_into(&mut node.left, value);
            } else if value > node.value {
                insert_into(&mut node.right, value);
            }
            // Equal: duplicate values are not stored.
        }
    }
}

/// Delete `value` from the subtree rooted at `node`, returning the new
/// subtree root.
fn delete_from<T: Float>(node: Option<Box<TreeNode<T>>>, value: T) -> Option<Box<TreeNode<T>>> {
    let mut node = node?;

    if value < node.value {
        node.left = delete_from(node.left.take(), value);
        Some(node)
    } else if value > node.value {
        node.right = delete_from(node.right.take(), value);
        Some(node)
    } else {
        match (node.left.take(), node.right.take()) {
            // Zero or one child: splice the (possibly absent) child in.
            (None, right) => right,
            (left, None) => left,

            // Two children: copy in the in-order successor, then delete
            // that value from the right subtree.
            (left, Some(right)) => {
                let successor = min_value(&right);
                node.value = successor;
                node.left = left;
                node.right = delete_from(Some(right), successor);
                Some(node)
            }
        }
    }
}

/// The minimum value of a non-empty subtree (leftmost node).
fn min_value<T: Float>(node: &TreeNode<T>) -> T {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current.value
}

fn collect_in_order<T: Float>(node: Option<&TreeNode<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        collect_in_order(node.left.as_deref(), out);
        out.push(node.value);
        collect_in_order(node.right.as_deref(), out);
    }
}

fn count_nodes<T>(node: Option<&TreeNode<T>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + count_nodes(node.left.as_deref()) + count_nodes(node.right.as_deref()),
    }
}
