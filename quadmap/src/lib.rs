//! # Quadmap - Mutable Point Quadtree Index
//!
//! This crate provides a mutable spatial index over 2D point keys: a
//! region-partitioning quadtree that maps coordinates to values and
//! supports point lookup, window (range) queries, insertion, and
//! deletion, subdividing regions adaptively as they fill up.
//!
//! ## Features
//!
//! - **Point Keys**: exact-coordinate lookup, insertion, and removal
//! - **Window Queries**: axis-aligned range search with intersection pruning
//! - **Adaptive Splitting**: leaf buckets split once they exceed capacity
//! - **Lazy Children**: quadrants are materialized only when first used
//! - **Pruning**: emptied subtrees are detached after deletion
//! - **Depth Cap**: degenerate key clusters fall back to an overflowing
//!   bucket instead of recursing without bound
//! - **Snapshot Views**: restartable key/value/entry iterators
//!
//! ## Quick Start
//!
//! ```rust
//! use quadmap::{QuadMap, Region};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an index over a 100 x 100 area with 4 entries per bucket
//! let mut map = QuadMap::new(Region::new(0.0, 0.0, 100.0, 100.0), 4)?;
//!
//! // Insert values at point keys
//! map.insert((10.0, 20.0), "a");
//! map.insert((80.0, 15.0), "b");
//!
//! // Exact lookup
//! assert_eq!(map.get((10.0, 20.0)), Some(&"a"));
//!
//! // Window query
//! let hits = map.query(Region::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(hits, vec![&"a"]);
//!
//! // Removal hands the value back
//! assert_eq!(map.remove((80.0, 15.0)), Some("b"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`region`] - Axis-aligned rectangle value type and geometric predicates
//! - [`point`] - The 2D point key type
//! - [`tree`] - The [`QuadMap`] facade, builder, and statistics
//! - [`iters`] - Snapshot iterators over keys, values, and entries
//! - [`errors`] - Error types and result definitions
//! - [`constants`] - Default tuning constants

pub mod constants;
pub mod errors;
pub mod iters;
pub mod point;
pub mod region;
pub mod tree;

mod node;

pub use errors::{QuadMapError, QuadMapResult};
pub use iters::{Entries, Keys, Values};
pub use point::Point;
pub use region::Region;
pub use tree::{QuadMap, QuadMapBuilder, QuadMapStats};
