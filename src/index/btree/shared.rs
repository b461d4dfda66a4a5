//! A B-tree guarded by a single lock.

use parking_lot::Mutex;

use super::stats::BTreeStats;
use super::tree::BTree;
use crate::common::{BTreeConfig, Result};

/// A [`BTree`] that can be shared between threads.
///
/// Every operation takes one `Mutex` for its whole duration, so
/// operations are serialized at tree granularity. There is no per-node
/// locking.
///
/// # Usage
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use interchangedb_btree::SharedBTree;
///
/// let tree = Arc::new(SharedBTree::new(3)?);
/// let handles: Vec<_> = (0..4)
///     .map(|w| {
///         let tree = Arc::clone(&tree);
///         thread::spawn(move || {
///             for k in 0..100 {
///                 tree.insert(w * 100 + k);
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(tree.len(), 400);
/// # Ok::<(), interchangedb_btree::Error>(())
/// ```
#[derive(Debug)]
pub struct SharedBTree<K> {
    inner: Mutex<BTree<K>>,
}

impl<K: Ord> SharedBTree<K> {
    /// # Errors
    /// - `Error::InvalidConfiguration` if `t < 2`
    pub fn new(t: usize) -> Result<Self> {
        Ok(Self::from_tree(BTree::new(t)?))
    }

    /// # Errors
    /// - `Error::InvalidConfiguration` if `config.min_degree < 2`
    pub fn with_config(config: BTreeConfig) -> Result<Self> {
        Ok(Self::from_tree(BTree::with_config(config)?))
    }

    pub fn from_tree(tree: BTree<K>) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }

    pub fn insert(&self, key: K) -> bool {
        self.inner.lock().insert(key)
    }

    pub fn delete(&self, key: &K) -> bool {
        self.inner.lock().delete(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> BTreeStats {
        self.inner.lock().stats()
    }

    /// Run `f` against the tree while holding the lock.
    ///
    /// Use this for anything that needs a consistent view across several
    /// reads, such as a search followed by inspection of the hit.
    pub fn with_tree<R>(&self, f: impl FnOnce(&BTree<K>) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn into_inner(self) -> BTree<K> {
        self.inner.into_inner()
    }
}
