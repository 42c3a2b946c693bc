//! Snapshot iterators over a quadtree's contents.
//!
//! Each sequence view is derived freshly from the tree at the moment
//! it is requested: the traversal is materialized up front, so the
//! iterator is finite, restartable (call the accessor again for a new
//! one), and immune to the invalidation hazards of live cursors over
//! a structure that splits and prunes. The order is the tree's
//! deterministic leaf-visit order for its current shape.

use crate::point::Point;
use std::vec;

/// Iterator over the point keys of a [`crate::QuadMap`].
///
/// Returned by [`crate::QuadMap::keys`]. Keys are copied out, so this
/// iterator does not borrow the tree.
pub struct Keys {
    inner: vec::IntoIter<Point>,
}

impl Keys {
    pub(crate) fn new(points: Vec<Point>) -> Keys {
        Keys {
            inner: points.into_iter(),
        }
    }
}

impl Iterator for Keys {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys {}

/// Iterator over borrowed values of a [`crate::QuadMap`].
///
/// Returned by [`crate::QuadMap::values`].
pub struct Values<'a, V> {
    inner: vec::IntoIter<&'a V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(values: Vec<&'a V>) -> Values<'a, V> {
        Values {
            inner: values.into_iter(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

/// Iterator over `(Point, &V)` pairs of a [`crate::QuadMap`].
///
/// Returned by [`crate::QuadMap::entries`].
pub struct Entries<'a, V> {
    inner: vec::IntoIter<(Point, &'a V)>,
}

impl<'a, V> Entries<'a, V> {
    pub(crate) fn new(entries: Vec<(Point, &'a V)>) -> Entries<'a, V> {
        Entries {
            inner: entries.into_iter(),
        }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (Point, &'a V);

    fn next(&mut self) -> Option<(Point, &'a V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}
