use std::hash::Hash;

/// A 2D point used as the key type of the quadtree.
///
/// Two points are the same key exactly when both coordinates are
/// bitwise equal; there is no tolerance or snapping. `Point` is a
/// plain `Copy` value type.
///
/// # Examples
///
/// ```rust
/// use quadmap::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p, Point::from((3.0, 4.0)));
/// assert_ne!(p, Point::new(3.0, 4.000001));
/// ```
#[derive(Clone, Copy, PartialEq, Default, Debug, serde::Deserialize, serde::Serialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point { x, y }
    }
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}
