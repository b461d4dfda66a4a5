//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with top-down balancing

pub mod btree;
