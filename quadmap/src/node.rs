//! The recursive quadtree node.
//!
//! A node is a leaf while all four child slots are empty and holds
//! its entries directly; once split it becomes internal and routes
//! every operation to the child quadrant that covers the key. Pruning
//! after removals can return an internal node to the leaf state.

use crate::constants::QUADRANT_COUNT;
use crate::point::Point;
use crate::region::Region;

/// A single tree node covering one region of the overall bounds.
///
/// Children are materialized lazily: a quadrant slot stays `None`
/// until the first key routed into it, so the live tree shape mirrors
/// the occupied parts of the plane rather than a dense grid. Each
/// child region exactly quarters its parent.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    region: Region,
    depth: usize,
    children: [Option<Box<Node<V>>>; QUADRANT_COUNT],
    entries: Vec<(Point, V)>,
}

impl<V> Node<V> {
    pub(crate) fn new(region: Region, depth: usize) -> Node<V> {
        Node {
            region,
            depth,
            children: [None, None, None, None],
            entries: Vec::new(),
        }
    }

    pub(crate) fn region(&self) -> Region {
        self.region
    }

    /// A node is a leaf iff every child slot is empty. Entries live
    /// only at leaves; internal nodes push them down on split.
    fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| child.is_none())
    }

    /// Structurally empty: a leaf holding no entries. Parents use this
    /// after a removal to decide whether to prune the child slot.
    pub(crate) fn is_empty(&self) -> bool {
        self.is_leaf() && self.entries.is_empty()
    }

    /// Looks up the value stored under an exactly matching key.
    pub(crate) fn get(&self, point: Point) -> Option<&V> {
        if self.is_leaf() {
            return self
                .entries
                .iter()
                .find(|(key, _)| *key == point)
                .map(|(_, value)| value);
        }
        match &self.children[self.region.quadrant_of(point)] {
            Some(child) => child.get(point),
            None => None,
        }
    }

    /// Inserts a key-value pair, splitting the leaf if the bucket
    /// exceeds `capacity` afterwards. Returns `false` without touching
    /// anything when the key is already present.
    pub(crate) fn insert(
        &mut self,
        point: Point,
        value: V,
        capacity: usize,
        max_depth: usize,
    ) -> bool {
        if !self.is_leaf() {
            let quadrant = self.region.quadrant_of(point);
            return self
                .child_or_materialize(quadrant)
                .insert(point, value, capacity, max_depth);
        }
        if self.entries.iter().any(|(key, _)| *key == point) {
            return false;
        }
        self.entries.push((point, value));
        self.split(capacity, max_depth);
        true
    }

    fn child_or_materialize(&mut self, quadrant: usize) -> &mut Box<Node<V>> {
        let region = self.region.quadrant_region(quadrant);
        let depth = self.depth + 1;
        self.children[quadrant].get_or_insert_with(|| Box::new(Node::new(region, depth)))
    }

    /// Redistributes an overfull leaf bucket into child quadrants.
    ///
    /// No-op while the bucket is within capacity or the node sits at
    /// the maximum depth (where the bucket is allowed to overflow).
    /// Freshly populated children are split recursively, since a
    /// cluster of nearby keys can land entirely in one quadrant and
    /// overfill it again.
    fn split(&mut self, capacity: usize, max_depth: usize) {
        if self.entries.len() <= capacity || self.depth >= max_depth {
            return;
        }
        log::trace!(
            "splitting node at depth {} over {} ({} entries)",
            self.depth,
            self.region,
            self.entries.len()
        );
        let entries = std::mem::take(&mut self.entries);
        for (point, value) in entries {
            let quadrant = self.region.quadrant_of(point);
            self.child_or_materialize(quadrant).entries.push((point, value));
        }
        for child in self.children.iter_mut().flatten() {
            child.split(capacity, max_depth);
        }
    }

    /// Removes the entry stored under the key and returns its value.
    ///
    /// After a removal inside a child subtree, an emptied child slot
    /// is cleared so the parent reverts toward leaf status. Pruning is
    /// local to each level; siblings are never merged.
    pub(crate) fn remove(&mut self, point: Point) -> Option<V> {
        if self.is_leaf() {
            let index = self.entries.iter().position(|(key, _)| *key == point)?;
            return Some(self.entries.remove(index).1);
        }
        let quadrant = self.region.quadrant_of(point);
        let removed = self.children[quadrant].as_mut()?.remove(point)?;
        if self.children[quadrant]
            .as_ref()
            .is_some_and(|child| child.is_empty())
        {
            self.children[quadrant] = None;
        }
        Some(removed)
    }

    /// Collects every value whose key lies inside the window,
    /// descending only into children whose regions intersect it.
    pub(crate) fn query<'a>(&'a self, window: &Region, results: &mut Vec<&'a V>) {
        if self.is_leaf() {
            for (key, value) in &self.entries {
                if window.contains(*key) {
                    results.push(value);
                }
            }
            return;
        }
        for child in self.children.iter().flatten() {
            if child.region.intersects(window) {
                child.query(window, results);
            }
        }
    }

    /// Tree height: 1 for a leaf, 1 + the tallest populated child
    /// otherwise.
    pub(crate) fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|child| child.height())
            .max()
            .unwrap_or(0)
    }

    /// Visits every entry, own bucket first and then the populated
    /// children in slot order. The order is deterministic for a fixed
    /// tree shape.
    pub(crate) fn for_each_entry<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(Point, &'a V),
    {
        for (point, value) in &self.entries {
            f(*point, value);
        }
        for child in self.children.iter().flatten() {
            child.for_each_entry(f);
        }
    }

    /// Collects the region of every live node in preorder.
    pub(crate) fn collect_regions(&self, regions: &mut Vec<Region>) {
        regions.push(self.region);
        for child in self.children.iter().flatten() {
            child.collect_regions(regions);
        }
    }

    /// Accumulates structural counters for [`crate::QuadMapStats`].
    pub(crate) fn survey(&self, nodes: &mut u64, leaves: &mut u64, largest_bucket: &mut usize) {
        *nodes += 1;
        if self.is_leaf() {
            *leaves += 1;
            *largest_bucket = (*largest_bucket).max(self.entries.len());
        }
        for child in self.children.iter().flatten() {
            child.survey(nodes, leaves, largest_bucket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_node() -> Node<i32> {
        Node::new(Region::new(0.0, 0.0, 100.0, 100.0), 0)
    }

    #[test]
    fn test_leaf_insert_and_get() {
        let mut node = unit_node();
        assert!(node.insert(Point::new(10.0, 10.0), 1, 4, 16));
        assert!(node.insert(Point::new(20.0, 20.0), 2, 4, 16));

        assert_eq!(node.get(Point::new(10.0, 10.0)), Some(&1));
        assert_eq!(node.get(Point::new(20.0, 20.0)), Some(&2));
        assert_eq!(node.get(Point::new(30.0, 30.0)), None);
        assert_eq!(node.height(), 1);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut node = unit_node();
        assert!(node.insert(Point::new(10.0, 10.0), 1, 4, 16));
        assert!(!node.insert(Point::new(10.0, 10.0), 99, 4, 16));

        // The original value stays untouched.
        assert_eq!(node.get(Point::new(10.0, 10.0)), Some(&1));
    }

    #[test]
    fn test_split_on_capacity_overflow() {
        let mut node = unit_node();
        // All four quadrants get one entry; the fifth insert overflows
        // a capacity of 4 and forces the split.
        let points = [
            Point::new(10.0, 10.0),
            Point::new(10.0, 90.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 90.0),
            Point::new(40.0, 40.0),
        ];
        for (i, point) in points.into_iter().enumerate() {
            assert!(node.insert(point, i as i32, 4, 16));
        }

        assert!(!node.is_leaf());
        assert!(node.entries.is_empty());
        assert_eq!(node.height(), 2);
        for (i, point) in points.into_iter().enumerate() {
            assert_eq!(node.get(point), Some(&(i as i32)));
        }
    }

    #[test]
    fn test_clustered_split_recurses() {
        let mut node = unit_node();
        // All in the top-left quadrant, close together: the first
        // split routes everything into one child, which must split
        // again until buckets fit.
        for i in 0..5 {
            let offset = 1.0 + i as f64;
            assert!(node.insert(Point::new(offset, offset), i, 4, 16));
        }

        assert!(node.height() > 2);

        let mut nodes = 0;
        let mut leaves = 0;
        let mut largest = 0;
        node.survey(&mut nodes, &mut leaves, &mut largest);
        assert!(largest <= 4, "leaf bucket exceeds capacity: {largest}");
    }

    #[test]
    fn test_max_depth_caps_subdivision() {
        let mut node = unit_node();
        // Keys closer together than 100 / 2^3 can still be separated,
        // but depth 3 forbids further splits: the bucket overflows.
        for i in 0..10 {
            let offset = i as f64 * 1e-6;
            assert!(node.insert(Point::new(1.0 + offset, 1.0), i, 4, 3));
        }

        assert!(node.height() <= 4);
        let mut nodes = 0;
        let mut leaves = 0;
        let mut largest = 0;
        node.survey(&mut nodes, &mut leaves, &mut largest);
        assert!(largest > 4, "expected an overflowing bucket at the depth cap");
    }

    #[test]
    fn test_remove_from_leaf() {
        let mut node = unit_node();
        node.insert(Point::new(10.0, 10.0), 1, 4, 16);
        node.insert(Point::new(20.0, 20.0), 2, 4, 16);

        assert_eq!(node.remove(Point::new(10.0, 10.0)), Some(1));
        assert_eq!(node.remove(Point::new(10.0, 10.0)), None);
        assert_eq!(node.get(Point::new(20.0, 20.0)), Some(&2));
    }

    #[test]
    fn test_remove_prunes_emptied_child() {
        let mut node = unit_node();
        let points = [
            Point::new(10.0, 10.0),
            Point::new(10.0, 90.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 90.0),
            Point::new(60.0, 60.0),
        ];
        for (i, point) in points.into_iter().enumerate() {
            node.insert(point, i as i32, 4, 16);
        }
        assert!(!node.is_leaf());

        // Quadrant 0 held only (10, 10); removing it must clear the slot.
        assert_eq!(node.remove(Point::new(10.0, 10.0)), Some(0));
        assert!(node.children[0].is_none());

        // Sibling subtrees are untouched.
        assert_eq!(node.get(Point::new(10.0, 90.0)), Some(&1));
        assert_eq!(node.get(Point::new(90.0, 90.0)), Some(&3));
    }

    #[test]
    fn test_remove_missing_key_through_empty_slot() {
        let mut node = unit_node();
        for i in 0..5 {
            node.insert(Point::new(60.0 + i as f64 * 8.0, 60.0), i, 4, 16);
        }
        assert!(!node.is_leaf());

        // Quadrant 0 was never materialized; the lookup short-circuits.
        assert_eq!(node.remove(Point::new(10.0, 10.0)), None);
        assert_eq!(node.get(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_pruned_node_accepts_direct_inserts_again() {
        let mut node = unit_node();
        let points = [
            Point::new(10.0, 10.0),
            Point::new(10.0, 90.0),
            Point::new(90.0, 10.0),
            Point::new(90.0, 90.0),
            Point::new(60.0, 60.0),
        ];
        for (i, point) in points.into_iter().enumerate() {
            node.insert(point, i as i32, 4, 16);
        }
        for point in points {
            node.remove(point);
        }

        // Every child pruned: the node behaves as an empty leaf.
        assert!(node.is_empty());
        assert!(node.insert(Point::new(50.0, 50.0), 42, 4, 16));
        assert!(!node.entries.is_empty());
    }

    #[test]
    fn test_query_filters_by_window() {
        let mut node = unit_node();
        for i in 0..8 {
            node.insert(Point::new(i as f64 * 12.0 + 1.0, i as f64 * 12.0 + 1.0), i, 2, 16);
        }

        let mut results = Vec::new();
        node.query(&Region::new(0.0, 0.0, 30.0, 30.0), &mut results);
        let mut hits: Vec<i32> = results.into_iter().copied().collect();
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1, 2]);

        let mut results = Vec::new();
        node.query(&Region::new(200.0, 200.0, 10.0, 10.0), &mut results);
        assert!(results.is_empty());
    }

    #[test]
    fn test_for_each_entry_is_deterministic() {
        let mut node = unit_node();
        for i in 0..6 {
            node.insert(Point::new(i as f64 * 15.0 + 1.0, 50.0), i, 2, 16);
        }

        let mut first = Vec::new();
        node.for_each_entry(&mut |point, value| first.push((point, *value)));
        let mut second = Vec::new();
        node.for_each_entry(&mut |point, value| second.push((point, *value)));

        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_collect_regions_covers_live_nodes() {
        let mut node = unit_node();
        let mut regions = Vec::new();
        node.collect_regions(&mut regions);
        assert_eq!(regions, vec![Region::new(0.0, 0.0, 100.0, 100.0)]);

        for i in 0..5 {
            node.insert(Point::new(1.0 + i as f64, 1.0 + i as f64), i, 4, 16);
        }
        regions.clear();
        node.collect_regions(&mut regions);
        assert!(regions.len() > 1);
        assert_eq!(regions[0], Region::new(0.0, 0.0, 100.0, 100.0));
    }
}
