//! B-tree node and its structural primitives.
//!
//! A node is a sorted run of keys plus, when internal, one more child than
//! it has keys. Children are owned inline by their parent; dropping a child
//! from `children` drops its whole subtree.

use std::fmt;

/// One node of the tree.
///
/// ```text
///            keys:     [ k0 | k1 | k2 ]
///          children: [ c0 | c1 | c2 | c3 ]
///
///   every key in c_i lies strictly between k_{i-1} and k_i
/// ```
///
/// Nodes are only handed out by shared reference (through
/// [`BTree::root`](crate::BTree::root) or a
/// [`SearchHit`](crate::SearchHit)); all mutation goes through the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(super) keys: Vec<K>,
    pub(super) children: Vec<Node<K>>,
}

impl<K> Node<K> {
    /// Create an empty leaf.
    pub(super) fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty internal node wrapping a single child.
    ///
    /// Used when the root grows; the caller splits the child right away.
    pub(super) fn with_child(child: Node<K>) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
        }
    }

    /// Number of keys held by this node.
    #[inline]
    pub fn n(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Split the full child at `i`, promoting its middle key into `self`.
    ///
    /// The child must hold exactly `2t - 1` keys. Afterwards child `i`
    /// keeps keys `[0, t-1)` and children `[0, t)`, a new right sibling at
    /// `i + 1` takes keys `[t, 2t-1)` and children `[t, 2t)`, and the key
    /// formerly at `t - 1` sits at `self.keys[i]`.
    pub(super) fn split_child(&mut self, i: usize, t: usize) {
        let left = &mut self.children[i];
        debug_assert_eq!(left.n(), 2 * t - 1, "split_child on a non-full node");

        let right_keys = left.keys.split_off(t);
        let right_children = if left.is_leaf() {
            Vec::new()
        } else {
            left.children.split_off(t)
        };
        let middle = left.keys.remove(t - 1);

        self.keys.insert(i, middle);
        self.children.insert(
            i + 1,
            Node {
                keys: right_keys,
                children: right_children,
            },
        );
    }

    /// Rotate one key from child `i - 1` through the separator into child `i`.
    ///
    /// The separator `keys[i-1]` becomes the first key of child `i`, the
    /// left sibling's last key replaces it, and the left sibling's last
    /// child (if any) becomes child `i`'s first child.
    pub(super) fn rotate_from_left(&mut self, i: usize) {
        let sibling = &mut self.children[i - 1];
        let Some(up) = sibling.keys.pop() else {
            return;
        };
        let moved_child = sibling.children.pop();
        let down = std::mem::replace(&mut self.keys[i - 1], up);

        let curr = &mut self.children[i];
        curr.keys.insert(0, down);
        if let Some(child) = moved_child {
            curr.children.insert(0, child);
        }
    }

    /// Rotate one key from child `i + 1` through the separator into child `i`.
    pub(super) fn rotate_from_right(&mut self, i: usize) {
        let sibling = &mut self.children[i + 1];
        if sibling.keys.is_empty() {
            return;
        }
        let up = sibling.keys.remove(0);
        let moved_child = if sibling.is_leaf() {
            None
        } else {
            Some(sibling.children.remove(0))
        };
        let down = std::mem::replace(&mut self.keys[i], up);

        let curr = &mut self.children[i];
        curr.keys.push(down);
        if let Some(child) = moved_child {
            curr.children.push(child);
        }
    }

    /// Merge child `i + 1` into child `i`, pulling the separator down
    /// between them: `child[i] = child[i] + [keys[i]] + child[i+1]`.
    pub(super) fn merge_children(&mut self, i: usize) {
        let (separator, right) = self.take_right_of(i);
        let left = &mut self.children[i];
        left.keys.push(separator);
        left.keys.extend(right.keys);
        left.children.extend(right.children);
    }

    /// Detach `keys[i]` and `children[i + 1]` from this node.
    fn take_right_of(&mut self, i: usize) -> (K, Node<K>) {
        let separator = self.keys.remove(i);
        let right = self.children.remove(i + 1);
        (separator, right)
    }

    /// Number of keys in the subtree rooted here.
    pub(super) fn subtree_len(&self) -> usize {
        self.n() + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

impl<K: Ord> Node<K> {
    /// Leftmost position where `key` could be inserted (first key `>= key`).
    #[inline]
    pub(super) fn find_index(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Whether `keys[i]` exists and equals `key`.
    #[inline]
    pub(super) fn has_key_at(&self, i: usize, key: &K) -> bool {
        self.keys.get(i) == Some(key)
    }
}

impl<K> Default for Node<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys separated by single spaces.
impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
