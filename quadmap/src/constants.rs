//! Default tuning constants for the quadtree.

/// Number of child slots per node, one per quadrant.
pub const QUADRANT_COUNT: usize = 4;

/// Default number of entries a leaf bucket may hold before it splits.
pub const DEFAULT_BUCKET_CAPACITY: usize = 4;

/// Default maximum subdivision depth (the root sits at depth 0).
///
/// A leaf at this depth never splits; its bucket is allowed to
/// overflow so that identical or float-adjacent keys cannot force
/// unbounded recursive subdivision.
pub const DEFAULT_MAX_DEPTH: usize = 16;
