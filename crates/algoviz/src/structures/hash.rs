//! String hash index with fixed buckets and open chaining.
//!
//! ## Purpose
//!
//! This module provides the additive string hash function and a
//! fixed-bucket-count table that chains same-hash keys in insertion
//! order.
//!
//! ## Design notes
//!
//! * **Additive hash**: The hash is the sum of the key's character code
//!   points modulo the table size, accumulated with a running modulo.
//!   This is a deliberately simple, non-avalanching hash — anagrams
//!   collide deterministically. A documented weakness, not a defect.
//! * **Fixed size**: The bucket count is chosen at construction (the
//!   reference configuration uses 11) and never changes; there is no
//!   resizing.
//! * **Duplicates**: Duplicate keys are stored as separate entries,
//!   preserving insertion order.
//!
//! ## Invariants
//!
//! * `hash_key` is deterministic: the same key always lands in the same
//!   bucket.
//! * Bucket contents are append-only; keys are never removed.
//!
//! ## Non-goals
//!
//! * No key removal and no collision handling beyond simple append.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::errors::AlgovizError;

// ============================================================================
// Hash Function
// ============================================================================

/// Number of buckets in the reference configuration.
pub const DEFAULT_TABLE_SIZE: usize = 11;

/// Hash a string key into a bucket index for a table of `size` buckets.
///
/// Computes the sum of the key's character code points modulo `size`,
/// keeping the accumulator reduced at every step. Returns 0 for a
/// degenerate zero-size table.
pub fn hash_key(key: &str, size: usize) -> usize {
    if size == 0 {
        return 0;
    }

    let mut hash = 0usize;
    for c in key.chars() {
        hash = (hash + c as usize) % size;
    }
    hash
}

// ============================================================================
// Hash Index
// ============================================================================

/// Fixed-bucket string index with open chaining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashIndex {
    buckets: Vec<Vec<String>>,
}

impl Default for HashIndex {
    /// An index with the reference bucket count of 11.
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); DEFAULT_TABLE_SIZE],
        }
    }
}

impl HashIndex {
    /// Create an index with `size` buckets.
    ///
    /// A zero bucket count is rejected as
    /// [`InvalidTableSize`](AlgovizError::InvalidTableSize).
    pub fn new(size: usize) -> Result<Self, AlgovizError> {
        if size == 0 {
            return Err(AlgovizError::InvalidTableSize(size));
        }
        Ok(Self {
            buckets: vec![Vec::new(); size],
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The fixed number of buckets.
    #[inline]
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// The bucket index `key` hashes to.
    #[inline]
    pub fn bucket_index(&self, key: &str) -> usize {
        hash_key(key, self.buckets.len())
    }

    /// The chain stored in bucket `index`, if it exists.
    pub fn bucket(&self, index: usize) -> Option<&[String]> {
        self.buckets.get(index).map(Vec::as_slice)
    }

    /// All buckets in index order.
    #[inline]
    pub fn buckets(&self) -> &[Vec<String>] {
        &self.buckets
    }

    /// Total number of stored keys across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// A fresh copy of the full bucket table.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.buckets.clone()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append `key` to its hashed bucket and return the post-operation
    /// bucket table.
    ///
    /// Duplicate keys are stored as separate entries in insertion order.
    pub fn insert(&mut self, key: &str) -> Vec<Vec<String>> {
        let index = self.bucket_index(key);
        self.buckets[index].push(key.to_string());
        self.snapshot()
    }
}
