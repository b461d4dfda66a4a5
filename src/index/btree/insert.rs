//! Insertion with eager, top-down splitting.
//!
//! Every full node met on the way down is split before it is entered, so
//! the leaf that finally receives the key always has room and no split
//! ever has to propagate back up.

use tracing::trace;

use super::node::Node;
use super::stats::BTreeStats;
use crate::common::BTreeConfig;

/// Insert `key` below `root`, growing the tree by one level first if the
/// root is full.
pub(super) fn insert<K: Ord>(
    root: &mut Node<K>,
    key: K,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) {
    if root.n() == config.max_keys() {
        split_root(root, config, stats);
    }
    insert_non_full(root, key, config, stats);
}

/// Wrap the full root in a new empty root and split it.
fn split_root<K>(root: &mut Node<K>, config: &BTreeConfig, stats: &mut BTreeStats) {
    let old_root = std::mem::take(root);
    *root = Node::with_child(old_root);
    root.split_child(0, config.min_degree);

    stats.splits += 1;
    stats.root_splits += 1;
    trace!(
        left = root.children[0].n(),
        right = root.children[1].n(),
        "split root"
    );
}

/// Insert into a node known to have room for one more key.
fn insert_non_full<K: Ord>(
    node: &mut Node<K>,
    key: K,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) {
    let mut i = node.find_index(&key);

    if node.is_leaf() {
        node.keys.insert(i, key);
        return;
    }

    if node.children[i].n() == config.max_keys() {
        node.split_child(i, config.min_degree);
        stats.splits += 1;
        trace!(index = i, parent = node.n(), "split child");

        // The promoted key now sits at `i`; larger keys belong to the new
        // right sibling.
        if node.keys[i] < key {
            i += 1;
        }
    }

    insert_non_full(&mut node.children[i], key, config, stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(t: usize, keys: impl IntoIterator<Item = i32>) -> (Node<i32>, BTreeStats) {
        let config = BTreeConfig::default().with_min_degree(t);
        let mut root = Node::new();
        let mut stats = BTreeStats::new();
        for key in keys {
            insert(&mut root, key, &config, &mut stats);
        }
        (root, stats)
    }

    #[test]
    fn test_insert_into_leaf_root_keeps_order() {
        let (root, stats) = build(2, [3, 1, 2]);
        assert!(root.is_leaf());
        assert_eq!(root.keys(), &[1, 2, 3]);
        assert_eq!(stats.splits, 0);
    }

    #[test]
    fn test_fourth_key_splits_root() {
        let (root, stats) = build(2, [1, 2, 3, 4]);
        assert_eq!(root.keys(), &[2]);
        assert_eq!(root.children()[0].keys(), &[1]);
        assert_eq!(root.children()[1].keys(), &[3, 4]);
        assert_eq!(stats.root_splits, 1);
    }

    #[test]
    fn test_split_shifts_target_to_right_sibling() {
        // Root [2] with children [1] and [3, 4, 5]; inserting 6 must split
        // the right child and land in the new right-most sibling.
        let (root, stats) = build(2, [1, 2, 3, 4, 5, 6]);
        assert_eq!(root.keys(), &[2, 4]);
        assert_eq!(root.children()[0].keys(), &[1]);
        assert_eq!(root.children()[1].keys(), &[3]);
        assert_eq!(root.children()[2].keys(), &[5, 6]);
        assert_eq!(stats.splits, 2);
        assert_eq!(stats.root_splits, 1);
    }

    #[test]
    fn test_split_keeps_target_on_left() {
        // Root [20] over [10] and [30, 40, 50]; inserting 35 splits the
        // right child around 40 and stays in its left half.
        let (root, _) = build(2, [10, 20, 30, 40, 50, 35]);
        assert_eq!(root.keys(), &[20, 40]);
        assert_eq!(root.children()[1].keys(), &[30, 35]);
        assert_eq!(root.children()[2].keys(), &[50]);
    }

    #[test]
    fn test_insert_larger_degree() {
        let (root, stats) = build(3, 1..=6);
        assert_eq!(root.keys(), &[3]);
        assert_eq!(root.children()[0].keys(), &[1, 2]);
        assert_eq!(root.children()[1].keys(), &[4, 5, 6]);
        assert_eq!(stats.root_splits, 1);
    }
}
