//! The public quadtree facade and its builder.

use crate::constants::{DEFAULT_BUCKET_CAPACITY, DEFAULT_MAX_DEPTH};
use crate::errors::{QuadMapError, QuadMapResult};
use crate::iters::{Entries, Keys, Values};
use crate::node::Node;
use crate::point::Point;
use crate::region::Region;

/// A mutable quadtree map from 2D point keys to values.
///
/// `QuadMap` owns the root node and the overall bounding region,
/// validates every key against those bounds, and maintains the entry
/// count. All tree algorithms live in the node layer; the facade
/// guards the invariants.
///
/// # Characteristics
///
/// - **Bounded**: keys outside the overall region are soft-rejected,
///   never an error
/// - **No Overwrite**: inserting an existing key returns `false` and
///   leaves the stored value untouched
/// - **Adaptive**: leaves split once their bucket exceeds the
///   configured capacity, down to the configured maximum depth
/// - **Single-Threaded**: mutation is in-place through `&mut self`;
///   every operation is a bounded synchronous call
///
/// # Examples
///
/// ```rust
/// use quadmap::{QuadMap, Region};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut map = QuadMap::new(Region::new(0.0, 0.0, 100.0, 100.0), 4)?;
///
/// assert!(map.insert((1.0, 1.0), "a"));
/// assert!(!map.insert((1.0, 1.0), "b")); // duplicate key, soft reject
/// assert!(!map.insert((250.0, 1.0), "c")); // out of bounds, soft reject
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get((1.0, 1.0)), Some(&"a"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuadMap<V> {
    root: Node<V>,
    bounds: Region,
    capacity: usize,
    max_depth: usize,
    len: usize,
}

impl<V> QuadMap<V> {
    /// Creates a quadtree over the given bounds with the given bucket
    /// capacity and default maximum depth.
    ///
    /// # Errors
    ///
    /// Returns [`QuadMapError::ZeroAreaBounds`] if the bounds have no
    /// area and [`QuadMapError::InvalidCapacity`] if `capacity < 1`.
    pub fn new(bounds: Region, capacity: usize) -> QuadMapResult<QuadMap<V>> {
        QuadMap::builder().bounds(bounds).capacity(capacity).build()
    }

    /// Returns a builder for configuring bounds, capacity, maximum
    /// depth, and initial entries.
    pub fn builder() -> QuadMapBuilder<V> {
        QuadMapBuilder::new()
    }

    /// Returns the number of entries currently stored. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the overall bounding region.
    pub fn bounds(&self) -> Region {
        self.bounds
    }

    /// Returns the bucket capacity a leaf may hold before splitting.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the maximum subdivision depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Looks up the value stored under an exactly matching key.
    ///
    /// A key outside the overall bounds short-circuits to `None`
    /// without touching the tree.
    pub fn get(&self, point: impl Into<Point>) -> Option<&V> {
        let point = point.into();
        if !self.bounds.contains(point) {
            return None;
        }
        self.root.get(point)
    }

    /// Checks whether a key is present.
    pub fn contains_key(&self, point: impl Into<Point>) -> bool {
        self.get(point).is_some()
    }

    /// Inserts a value under a point key.
    ///
    /// Returns `true` on success. Returns `false` — leaving the tree
    /// untouched — when the key lies outside the overall bounds or is
    /// already present; existing values are never overwritten.
    pub fn insert(&mut self, point: impl Into<Point>, value: V) -> bool {
        let point = point.into();
        if !self.bounds.contains(point) {
            return false;
        }
        let inserted = self.root.insert(point, value, self.capacity, self.max_depth);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the entry stored under the key, handing the value back
    /// to the caller.
    ///
    /// Emptied subtrees along the removal path are pruned. Returns
    /// `None` for a missing or out-of-bounds key.
    pub fn remove(&mut self, point: impl Into<Point>) -> Option<V> {
        let point = point.into();
        if !self.bounds.contains(point) {
            return None;
        }
        let removed = self.root.remove(point);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Collects every value whose key lies inside the query window.
    ///
    /// Subtrees whose regions do not intersect the window are pruned
    /// from the search. The window is an ordinary [`Region`], so
    /// negative extents have already been normalized by its
    /// constructor. Result order is unspecified but deterministic for
    /// a fixed tree shape.
    pub fn query(&self, window: Region) -> Vec<&V> {
        let mut results = Vec::new();
        self.root.query(&window, &mut results);
        results
    }

    /// Empties the tree, preserving bounds, capacity, and maximum
    /// depth.
    pub fn clear(&mut self) {
        log::debug!("clearing quadtree over {} ({} entries)", self.bounds, self.len);
        self.root = Node::new(self.bounds, 0);
        self.len = 0;
    }

    /// Returns the current tree depth (1 for a tree that is a single
    /// leaf).
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns a snapshot iterator over the point keys.
    ///
    /// The snapshot is taken when this method is called; call again
    /// for a fresh traversal.
    pub fn keys(&self) -> Keys {
        let mut points = Vec::with_capacity(self.len);
        self.root.for_each_entry(&mut |point, _| points.push(point));
        Keys::new(points)
    }

    /// Returns a snapshot iterator over borrowed values.
    pub fn values(&self) -> Values<'_, V> {
        let mut values = Vec::with_capacity(self.len);
        self.root.for_each_entry(&mut |_, value| values.push(value));
        Values::new(values)
    }

    /// Returns a snapshot iterator over `(Point, &V)` pairs.
    pub fn entries(&self) -> Entries<'_, V> {
        let mut entries = Vec::with_capacity(self.len);
        self.root
            .for_each_entry(&mut |point, value| entries.push((point, value)));
        Entries::new(entries)
    }

    /// Eagerly visits every entry in the tree's deterministic
    /// traversal order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Point, &V),
    {
        self.root.for_each_entry(&mut f);
    }

    /// Collects the region of every live node, parents before
    /// children.
    ///
    /// This is the traversal a rendering layer uses to draw region
    /// boundaries; an empty tree yields just the overall bounds.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        self.root.collect_regions(&mut regions);
        regions
    }

    /// Gathers structural statistics about the current tree shape.
    pub fn stats(&self) -> QuadMapStats {
        let mut stats = QuadMapStats {
            entries: self.len as u64,
            tree_height: self.height() as u32,
            ..QuadMapStats::default()
        };
        self.root.survey(
            &mut stats.node_count,
            &mut stats.leaf_count,
            &mut stats.largest_bucket,
        );
        stats
    }
}

/// Structural statistics about a quadtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadMapStats {
    /// Number of stored entries.
    pub entries: u64,
    /// Current tree depth (1 = a single leaf).
    pub tree_height: u32,
    /// Total live nodes, internal and leaf.
    pub node_count: u64,
    /// Live leaf nodes.
    pub leaf_count: u64,
    /// Entry count of the fullest leaf bucket. Exceeds the configured
    /// capacity only for buckets pinned at the maximum depth.
    pub largest_bucket: usize,
}

/// Builder for [`QuadMap`].
///
/// Collects bounds, bucket capacity, maximum depth, and optional
/// initial entries, then validates the configuration in
/// [`build`](QuadMapBuilder::build).
///
/// # Examples
///
/// ```rust
/// use quadmap::{Point, QuadMap, Region};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let map: QuadMap<u32> = QuadMap::builder()
///     .bounds(Region::new(0.0, 0.0, 640.0, 480.0))
///     .capacity(8)
///     .max_depth(12)
///     .entries([(Point::new(10.0, 10.0), 1), (Point::new(20.0, 20.0), 2)])
///     .build()?;
///
/// assert_eq!(map.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct QuadMapBuilder<V> {
    bounds: Region,
    capacity: usize,
    max_depth: usize,
    entries: Vec<(Point, V)>,
}

impl<V> QuadMapBuilder<V> {
    fn new() -> QuadMapBuilder<V> {
        QuadMapBuilder {
            bounds: Region::default(),
            capacity: DEFAULT_BUCKET_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
            entries: Vec::new(),
        }
    }

    /// Sets the overall bounding region. Required: the default
    /// zero-area region fails validation.
    pub fn bounds(mut self, bounds: Region) -> QuadMapBuilder<V> {
        self.bounds = bounds;
        self
    }

    /// Sets the number of entries a leaf bucket may hold before it
    /// splits.
    pub fn capacity(mut self, capacity: usize) -> QuadMapBuilder<V> {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum subdivision depth. Leaves at this depth hold
    /// overflowing buckets instead of splitting.
    pub fn max_depth(mut self, max_depth: usize) -> QuadMapBuilder<V> {
        self.max_depth = max_depth;
        self
    }

    /// Adds initial entries, bulk-loaded on build via repeated
    /// insertion under the same soft-rejection rules as
    /// [`QuadMap::insert`].
    pub fn entries<I>(mut self, entries: I) -> QuadMapBuilder<V>
    where
        I: IntoIterator<Item = (Point, V)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Validates the configuration and builds the tree.
    ///
    /// # Errors
    ///
    /// - [`QuadMapError::ZeroAreaBounds`] if the bounds have zero
    ///   width or height
    /// - [`QuadMapError::InvalidCapacity`] if the capacity is below 1
    /// - [`QuadMapError::InvalidMaxDepth`] if the maximum depth is
    ///   below 1
    pub fn build(self) -> QuadMapResult<QuadMap<V>> {
        if !self.bounds.has_area() {
            return Err(QuadMapError::ZeroAreaBounds(self.bounds));
        }
        if self.capacity < 1 {
            return Err(QuadMapError::InvalidCapacity(self.capacity));
        }
        if self.max_depth < 1 {
            return Err(QuadMapError::InvalidMaxDepth(self.max_depth));
        }

        let mut map = QuadMap {
            root: Node::new(self.bounds, 0),
            bounds: self.bounds,
            capacity: self.capacity,
            max_depth: self.max_depth,
            len: 0,
        };
        let offered = self.entries.len();
        for (point, value) in self.entries {
            if !map.insert(point, value) {
                log::trace!("initial entry at {} rejected during bulk load", point);
            }
        }
        log::debug!(
            "built quadtree over {} (capacity {}, max depth {}, loaded {}/{} initial entries)",
            map.bounds,
            map.capacity,
            map.max_depth,
            map.len,
            offered
        );
        Ok(map)
    }
}

impl<V> Default for QuadMapBuilder<V> {
    fn default() -> QuadMapBuilder<V> {
        QuadMapBuilder::new()
    }
}
