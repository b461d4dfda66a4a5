//! The B-tree itself.

use std::fmt;

use tracing::debug;

use super::node::Node;
use super::search::{self, SearchHit};
use super::stats::BTreeStats;
use super::{delete, insert, validate};
use crate::common::{BTreeConfig, DuplicatePolicy, Result};

/// An in-memory B-tree of minimum degree `t` over totally ordered keys.
///
/// # Shape
/// ```text
///                     ┌─────────┐
///                     │   20    │            root: 0..=2t-1 keys
///                     └─┬─────┬─┘
///             ┌─────────┘     └─────────┐
///        ┌────┴────┐               ┌────┴────┐
///        │  5  10  │               │ 30  40  │  others: t-1..=2t-1 keys
///        └─────────┘               └─────────┘
/// ```
///
/// Inserts split full nodes on the way down; deletes top up minimal
/// nodes on the way down. All leaves stay at the same depth.
///
/// # Thread Safety
/// Not synchronized. Mutation needs `&mut self`; wrap the tree in a
/// [`SharedBTree`](crate::SharedBTree) to share it between threads.
///
/// # Example
/// ```
/// use interchangedb_btree::BTree;
///
/// let mut tree = BTree::new(2)?;
/// for k in [5, 1, 9, 3, 7] {
///     tree.insert(k);
/// }
/// assert!(tree.contains(&7));
///
/// tree.delete(&7);
/// assert!(tree.search(&7).is_none());
/// assert_eq!(tree.len(), 4);
/// # Ok::<(), interchangedb_btree::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BTree<K> {
    config: BTreeConfig,
    root: Node<K>,
    stats: BTreeStats,
}

impl<K: Ord> BTree<K> {
    /// Create an empty tree with minimum degree `t` and default settings.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `t < 2`
    pub fn new(t: usize) -> Result<Self> {
        Self::with_config(BTreeConfig::default().with_min_degree(t))
    }

    /// Create an empty tree from an explicit configuration.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `config.min_degree < 2`
    pub fn with_config(config: BTreeConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            min_degree = config.min_degree,
            duplicates = ?config.duplicates,
            "created B-tree"
        );

        Ok(Self {
            config,
            root: Node::new(),
            stats: BTreeStats::new(),
        })
    }

    /// Find `key`, returning the node holding it and its position there.
    pub fn search(&self, key: &K) -> Option<SearchHit<'_, K>> {
        search::search(&self.root, key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Insert `key`, returning whether it was added.
    ///
    /// Under [`DuplicatePolicy::Ignore`] a key already present is left
    /// alone and `false` is returned. Under [`DuplicatePolicy::Reinsert`]
    /// the key is always inserted, even if that repeats it.
    pub fn insert(&mut self, key: K) -> bool {
        if self.config.duplicates == DuplicatePolicy::Ignore && self.contains(&key) {
            return false;
        }
        insert::insert(&mut self.root, key, &self.config, &mut self.stats);
        true
    }

    /// Delete `key`, returning whether it was present.
    ///
    /// Deleting an absent key leaves the key set unchanged, but nodes on
    /// the search path may still have been rebalanced.
    pub fn delete(&mut self, key: &K) -> bool {
        delete::delete(&mut self.root, key, &self.config, &mut self.stats).is_some()
    }
}

impl<K> BTree<K> {
    /// Total number of keys, counted by walking every node.
    pub fn len(&self) -> usize {
        self.root.subtree_len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.n() == 0
    }

    /// Number of levels; a lone leaf root has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.children.first() {
            height += 1;
            node = child;
        }
        height
    }

    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    pub fn min_degree(&self) -> usize {
        self.config.min_degree
    }

    pub fn config(&self) -> &BTreeConfig {
        &self.config
    }

    /// Rebalancing counters accumulated since creation or the last reset.
    pub fn stats(&self) -> BTreeStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl<K: Clone> BTree<K> {
    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        fn walk<K: Clone>(node: &Node<K>, out: &mut Vec<K>) {
            for (i, key) in node.keys.iter().enumerate() {
                if let Some(child) = node.children.get(i) {
                    walk(child, out);
                }
                out.push(key.clone());
            }
            if let Some(last) = node.children.get(node.n()) {
                walk(last, out);
            }
        }

        let mut out = Vec::with_capacity(self.len());
        walk(&self.root, &mut out);
        out
    }
}

impl<K: Ord + fmt::Debug> BTree<K> {
    /// Verify the structural invariants of the whole tree.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first broken invariant
    pub fn check_invariants(&self) -> Result<()> {
        validate::check(&self.root, &self.config)
    }
}

impl<K: fmt::Display> BTree<K> {
    /// Indented dump of the tree, one node per line.
    ///
    /// Same output as the `Display` impl; meant for diagnostics only.
    pub fn debug_dump(&self) -> String {
        self.to_string()
    }
}

/// One line per node in pre-order, indented with one tab per level.
impl<K: fmt::Display> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<K: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            node: &Node<K>,
            level: usize,
        ) -> fmt::Result {
            for _ in 0..level {
                f.write_str("\t")?;
            }
            write!(f, "{}", node)?;
            for child in &node.children {
                f.write_str("\n")?;
                write_node(f, child, level + 1)?;
            }
            Ok(())
        }

        write_node(f, &self.root, 0)
    }
}
