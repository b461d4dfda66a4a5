//! Common types shared across the index.
//!
//! - Configuration (minimum degree, duplicate handling)
//! - Error types

pub mod config;
pub mod error;

pub use config::{BTreeConfig, DuplicatePolicy};
pub use error::{Error, Result};
