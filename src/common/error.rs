//! Error types for the B-tree index.

use thiserror::Error;

/// Result of fallible index operations (construction and validation).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the index.
///
/// Tree operations themselves are total: searching for an absent key
/// returns `None` and deleting one is a no-op. Errors only come from
/// construction and from the invariant checker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The minimum degree is below the smallest legal value.
    ///
    /// Raised by [`BTreeConfig::validate`](crate::BTreeConfig::validate)
    /// before any tree is built.
    #[error("invalid configuration: min_degree {min_degree} must be at least {minimum}")]
    InvalidConfiguration { min_degree: usize, minimum: usize },

    /// A structural invariant does not hold.
    ///
    /// This indicates a bug (or a duplicate inserted under
    /// `DuplicatePolicy::Reinsert`).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
