//! Structural statistics for a B-tree.

use std::fmt;

/// Counters for the rebalancing work a tree has performed.
///
/// Updated by insert and delete; read with [`BTree::stats`](crate::BTree::stats).
/// A delete of an absent key can still bump `borrows_*` and `merges`,
/// because preparation happens on the way down.
///
/// # Example
/// ```
/// use interchangedb_btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for k in 1..=4 {
///     tree.insert(k);
/// }
///
/// let stats = tree.stats();
/// assert_eq!(stats.splits, 1);
/// assert_eq!(stats.root_splits, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BTreeStats {
    /// Nodes split during insertion (root splits included).
    pub splits: u64,

    /// Splits of the root, each adding one level.
    pub root_splits: u64,

    /// Rotations that took a key from the left sibling.
    pub borrows_left: u64,

    /// Rotations that took a key from the right sibling.
    pub borrows_right: u64,

    /// Sibling merges during deletion.
    pub merges: u64,

    /// Empty roots replaced by their only child, each removing one level.
    pub root_collapses: u64,
}

impl BTreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rotations in either direction.
    pub fn borrows(&self) -> u64 {
        self.borrows_left + self.borrows_right
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for BTreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {} (root: {}), borrows: {} (left: {}, right: {}), merges: {}, collapses: {} }}",
            self.splits,
            self.root_splits,
            self.borrows(),
            self.borrows_left,
            self.borrows_right,
            self.merges,
            self.root_collapses
        )
    }
}
