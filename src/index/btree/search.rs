//! Point lookup.

use super::node::Node;

/// Location of a key found by [`BTree::search`](crate::BTree::search).
///
/// Borrows the tree, so it cannot outlive the next mutation.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a, K> {
    node: &'a Node<K>,
    index: usize,
}

impl<'a, K> SearchHit<'a, K> {
    /// The node holding the key.
    pub fn node(&self) -> &'a Node<K> {
        self.node
    }

    /// Position of the key within [`node`](Self::node).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The key itself.
    pub fn key(&self) -> &'a K {
        &self.node.keys[self.index]
    }
}

/// Descend from `root` until `key` is found or a leaf rules it out.
pub(super) fn search<'a, K: Ord>(root: &'a Node<K>, key: &K) -> Option<SearchHit<'a, K>> {
    let mut node = root;
    loop {
        let index = node.find_index(key);
        if node.has_key_at(index, key) {
            return Some(SearchHit { node, index });
        }
        if node.is_leaf() {
            return None;
        }
        node = &node.children[index];
    }
}
