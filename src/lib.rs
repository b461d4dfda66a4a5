//! InterchangeDB B-tree - an in-memory ordered index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        interchangedb-btree                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        SharedBTree (index/btree/shared)  [optional]     │   │
//! │  │           one parking_lot::Mutex per tree                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               BTree (index/btree/tree)                   │   │
//! │  │   search │ insert │ delete │ len │ dump │ invariants     │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  insert: split full nodes on the way down        │   │   │
//! │  │   │  delete: borrow / merge minimal nodes on the way │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Node (index/btree/node)                  │   │
//! │  │      sorted keys + owned children, split/rotate/merge    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Configuration and error types
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use interchangedb_btree::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! for k in 1..=4 {
//!     tree.insert(k);
//! }
//!
//! // Inserting the fourth key split the root around 2.
//! assert_eq!(tree.root().keys(), &[2]);
//! assert_eq!(tree.len(), 4);
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE};
pub use common::{BTreeConfig, DuplicatePolicy, Error, Result};

pub use index::btree::{BTree, BTreeStats, Node, SearchHit, SharedBTree};
