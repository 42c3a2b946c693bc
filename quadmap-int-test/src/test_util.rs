use quadmap::{Point, QuadMap, QuadMapResult, Region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The bounds most scenario tests run against.
pub fn test_bounds() -> Region {
    Region::new(0.0, 0.0, 100.0, 100.0)
}

/// Creates the standard test tree: 100 x 100 bounds, the given bucket
/// capacity, values are `u64` ids.
pub fn test_tree(capacity: usize) -> QuadMapResult<QuadMap<u64>> {
    QuadMap::new(test_bounds(), capacity)
}

/// Generates `count` distinct points inside `bounds` from a seeded
/// generator, so scenarios are reproducible.
pub fn scattered_points(seed: u64, count: usize, bounds: Region) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points: Vec<Point> = Vec::with_capacity(count);
    while points.len() < count {
        let point = Point::new(
            rng.gen_range(bounds.left()..bounds.right()),
            rng.gen_range(bounds.top()..bounds.bottom()),
        );
        if !points.contains(&point) {
            points.push(point);
        }
    }
    points
}

/// Fills a tree with the given points, assigning each its index as the
/// value. Panics if any insertion is rejected; callers pass in-bounds,
/// distinct points.
pub fn populate(map: &mut QuadMap<u64>, points: &[Point]) {
    for (i, point) in points.iter().enumerate() {
        assert!(map.insert(*point, i as u64), "rejected insert at {point}");
    }
}
