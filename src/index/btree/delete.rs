//! Top-down deletion.
//!
//! The descent never enters a child holding only `t - 1` keys: such a
//! child first borrows a key from a sibling or is merged with one. This
//! preparation is driven by occupancy alone, so it also runs on the path
//! to a key that turns out to be absent.
//!
//! Three cases, checked at every node on the path:
//! 1. Leaf: remove the key (or the extreme key being extracted).
//! 2. Internal node holding the key: replace it with its in-order
//!    predecessor or successor, or merge the two children around it.
//! 3. Internal node without the key: make sure the child to descend into
//!    can spare a key, then descend.

use tracing::trace;

use super::node::Node;
use super::stats::BTreeStats;
use crate::common::BTreeConfig;

/// What a descent is looking for.
enum Target<'a, K> {
    /// A specific key.
    Key(&'a K),
    /// The largest key of the subtree (in-order predecessor extraction).
    Max,
    /// The smallest key of the subtree (in-order successor extraction).
    Min,
}

impl<K> Clone for Target<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Target<'_, K> {}

impl<K: Ord> Target<'_, K> {
    /// Child (or key) position to follow in `node`.
    fn position(&self, node: &Node<K>) -> usize {
        match self {
            Target::Key(key) => node.find_index(key),
            Target::Max => node.n(),
            Target::Min => 0,
        }
    }

    fn direction(&self) -> &'static str {
        match self {
            Target::Key(_) => "key",
            Target::Max => "max",
            Target::Min => "min",
        }
    }
}

/// Delete `key` from the tree rooted at `root`, returning it if present.
pub(super) fn delete<K: Ord>(
    root: &mut Node<K>,
    key: &K,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) -> Option<K> {
    let removed = descend(root, Target::Key(key), config, stats);
    collapse_root(root, stats);
    removed
}

/// Remove and return the largest key below `node`.
///
/// `node` must already hold more than `t - 1` keys (or be the root).
fn extract_max<K: Ord>(
    node: &mut Node<K>,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) -> Option<K> {
    descend(node, Target::Max, config, stats)
}

/// Remove and return the smallest key below `node`.
fn extract_min<K: Ord>(
    node: &mut Node<K>,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) -> Option<K> {
    descend(node, Target::Min, config, stats)
}

/// Replace an emptied internal root with its only child.
///
/// A merge can drain the root of its last key; at most one such merge
/// happens per delete since the merged child ends up with `2t - 1` keys.
fn collapse_root<K>(root: &mut Node<K>, stats: &mut BTreeStats) {
    if root.n() == 0 && root.children.len() == 1 {
        if let Some(child) = root.children.pop() {
            *root = child;
            stats.root_collapses += 1;
            trace!(keys = root.n(), "collapsed root");
        }
    }
}

fn descend<K: Ord>(
    node: &mut Node<K>,
    target: Target<'_, K>,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) -> Option<K> {
    let i = target.position(node);

    // Case 1
    if node.is_leaf() {
        return match target {
            Target::Key(key) => node.has_key_at(i, key).then(|| node.keys.remove(i)),
            Target::Max => node.keys.pop(),
            Target::Min => (!node.keys.is_empty()).then(|| node.keys.remove(0)),
        };
    }

    // Case 2
    if let Target::Key(key) = target {
        if node.has_key_at(i, key) {
            return remove_separator(node, i, key, config, stats);
        }
    }

    // Case 3
    let i = if node.children[i].n() == config.min_keys() {
        fill_child(node, i, target, config, stats)
    } else {
        i
    };
    descend(&mut node.children[i], target, config, stats)
}

/// Remove `node.keys[i]`, which equals `key`, from an internal node.
///
/// When neither child can spare a key, the separator is pulled down into
/// the merged child (`2t - 1` keys) and deleted from there, so the merged
/// node keeps one more child than keys.
fn remove_separator<K: Ord>(
    node: &mut Node<K>,
    i: usize,
    key: &K,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) -> Option<K> {
    let min_keys = config.min_keys();

    let replacement = if node.children[i].n() > min_keys {
        extract_max(&mut node.children[i], config, stats)
    } else if node.children[i + 1].n() > min_keys {
        extract_min(&mut node.children[i + 1], config, stats)
    } else {
        node.merge_children(i);
        stats.merges += 1;
        trace!(
            index = i,
            merged = node.children[i].n(),
            "merged children around deleted key"
        );
        return descend(&mut node.children[i], Target::Key(key), config, stats);
    };

    replacement.map(|key| std::mem::replace(&mut node.keys[i], key))
}

/// Give child `i`, which holds exactly `t - 1` keys, a spare key.
///
/// Borrows from the left sibling, then the right one; failing both, merges
/// with the left sibling if there is one and the right one otherwise.
/// Returns the index the enriched child ends up at.
fn fill_child<K: Ord>(
    node: &mut Node<K>,
    i: usize,
    target: Target<'_, K>,
    config: &BTreeConfig,
    stats: &mut BTreeStats,
) -> usize {
    let min_keys = config.min_keys();

    if i > 0 && node.children[i - 1].n() > min_keys {
        node.rotate_from_left(i);
        stats.borrows_left += 1;
        trace!(index = i, target = target.direction(), "borrowed from left sibling");
        return i;
    }

    if i < node.n() && node.children[i + 1].n() > min_keys {
        node.rotate_from_right(i);
        stats.borrows_right += 1;
        trace!(index = i, target = target.direction(), "borrowed from right sibling");
        return i;
    }

    let left = i.saturating_sub(1);
    node.merge_children(left);
    stats.merges += 1;
    trace!(
        index = left,
        merged = node.children[left].n(),
        target = target.direction(),
        "merged with sibling"
    );
    left
}
