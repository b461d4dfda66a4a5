//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - The tree: search, insert, delete, size, dump
//! - [`Node`] - A node; read-only outside this module
//! - [`SearchHit`] - Where a searched key lives
//! - [`SharedBTree`] - A tree behind one lock
//! - [`BTreeStats`] - Rebalancing counters
//!
//! The balancing algorithms live in `insert` (split on the way down) and
//! `delete` (borrow/merge on the way down).

mod delete;
mod insert;
mod node;
mod search;
mod shared;
mod stats;
mod tree;
mod validate;

pub use node::Node;
pub use search::SearchHit;
pub use shared::SharedBTree;
pub use stats::BTreeStats;
pub use tree::BTree;
