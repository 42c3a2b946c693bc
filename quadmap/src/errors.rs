//! Error types for quadtree construction.
//!
//! Only construction can fail. Operational rejections (a key outside
//! the overall bounds, a duplicate key, a missing key on removal) are
//! expressed through ordinary return values so callers can treat them
//! as control flow.

use crate::region::Region;
use thiserror::Error;

/// Errors that can occur when building a quadtree.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadMapError {
    /// The overall bounds have zero width or height, which would make
    /// every insertion fail the bounds check.
    #[error("bounds must have positive area, got {0}")]
    ZeroAreaBounds(Region),

    /// A bucket capacity below 1 would split every leaf on its first
    /// insertion, or never admit an entry at all.
    #[error("bucket capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// A maximum depth below 1 would forbid any subdivision.
    #[error("maximum depth must be at least 1, got {0}")]
    InvalidMaxDepth(usize),
}

/// Result type for quadtree construction.
pub type QuadMapResult<T> = Result<T, QuadMapError>;
