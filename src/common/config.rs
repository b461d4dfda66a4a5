//! Configuration for the B-tree index.

use crate::common::{Error, Result};

/// Smallest legal minimum degree.
///
/// With `t = 2` every node holds 1..=3 keys (a 2-3-4 tree).
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by [`BTreeConfig::default`].
pub const DEFAULT_MIN_DEGREE: usize = 2;

/// What `insert` does with a key that is already in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Leave the tree untouched; `insert` reports `false`.
    #[default]
    Ignore,

    /// Insert the key again without checking.
    ///
    /// Keys within a node may then repeat, so `check_invariants` fails.
    Reinsert,
}

/// Tree parameters, validated once at construction.
///
/// # Example
/// ```
/// use interchangedb_btree::{BTreeConfig, DuplicatePolicy};
///
/// let config = BTreeConfig::default()
///     .with_min_degree(3)
///     .with_duplicates(DuplicatePolicy::Reinsert);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.min_keys(), 2);
/// assert_eq!(config.max_keys(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BTreeConfig {
    /// Minimum degree `t`.
    pub min_degree: usize,

    /// Handling of keys that are already present.
    pub duplicates: DuplicatePolicy,
}

impl BTreeConfig {
    pub fn with_min_degree(mut self, min_degree: usize) -> Self {
        self.min_degree = min_degree;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `min_degree < 2`
    pub fn validate(&self) -> Result<()> {
        if self.min_degree < MIN_DEGREE {
            return Err(Error::InvalidConfiguration {
                min_degree: self.min_degree,
                minimum: MIN_DEGREE,
            });
        }
        Ok(())
    }

    /// Fewest keys a non-root node may hold (`t - 1`).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.min_degree - 1
    }

    /// Most keys any node may hold (`2t - 1`).
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.min_degree - 1
    }
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self {
            min_degree: DEFAULT_MIN_DEGREE,
            duplicates: DuplicatePolicy::default(),
        }
    }
}
