//! Structural invariant checks.

use std::fmt::Debug;

use super::node::Node;
use crate::common::{BTreeConfig, Error, Result};

/// Verify every B-tree invariant below `root`:
///
/// - keys within a node are strictly increasing
/// - non-root nodes hold `t-1 ..= 2t-1` keys, the root `0 ..= 2t-1`
/// - internal nodes have one more child than keys
/// - every key lies strictly between the separators bounding its subtree
/// - all leaves sit at the same depth
pub(super) fn check<K: Ord + Debug>(root: &Node<K>, config: &BTreeConfig) -> Result<()> {
    let mut checker = Checker {
        config,
        leaf_depth: None,
    };
    checker.visit(root, 0, None, None)
}

struct Checker<'a> {
    config: &'a BTreeConfig,
    leaf_depth: Option<usize>,
}

impl Checker<'_> {
    fn visit<K: Ord + Debug>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<()> {
        let n = node.n();

        if n > self.config.max_keys() {
            return Err(violation(format!(
                "node at depth {} holds {} keys, max is {}",
                depth,
                n,
                self.config.max_keys()
            )));
        }
        if depth > 0 && n < self.config.min_keys() {
            return Err(violation(format!(
                "node at depth {} holds {} keys, min is {}",
                depth,
                n,
                self.config.min_keys()
            )));
        }

        if let Some(pair) = node.keys.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(violation(format!(
                "keys not strictly increasing at depth {}: {:?} before {:?}",
                depth, pair[0], pair[1]
            )));
        }

        if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
            if first <= lower {
                return Err(violation(format!(
                    "key {:?} at depth {} not above separator {:?}",
                    first, depth, lower
                )));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
            if last >= upper {
                return Err(violation(format!(
                    "key {:?} at depth {} not below separator {:?}",
                    last, depth, upper
                )));
            }
        }

        if node.is_leaf() {
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(violation(format!(
                    "leaf at depth {}, expected {}",
                    depth, expected
                ))),
            };
        }

        if node.children.len() != n + 1 {
            return Err(violation(format!(
                "internal node at depth {} has {} keys but {} children",
                depth,
                n,
                node.children.len()
            )));
        }

        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { node.keys.get(i - 1) };
            let child_upper = if i == n { upper } else { node.keys.get(i) };
            self.visit(child, depth + 1, child_lower, child_upper)?;
        }
        Ok(())
    }
}

fn violation(message: String) -> Error {
    Error::InvariantViolation(message)
}
