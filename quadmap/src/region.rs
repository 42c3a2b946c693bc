use crate::point::Point;
use std::hash::Hash;

/// An axis-aligned rectangle represented by an origin and extents.
///
/// `Region` is used both as a node's spatial extent and as a query
/// window. It is an immutable value type: every predicate borrows, and
/// all construction goes through [`Region::new`], which normalizes
/// negative extents by translating the origin so that the stored
/// width and height are always non-negative.
///
/// Containment is half-open: a point belongs to a region if
/// `left <= x < right` and `top <= y < bottom`, so the four quadrants
/// of a region partition it with no gaps or overlaps.
///
/// # Examples
///
/// ```rust
/// use quadmap::{Point, Region};
///
/// let region = Region::new(0.0, 0.0, 100.0, 100.0);
///
/// assert!(region.contains(Point::new(0.0, 0.0)));
/// assert!(!region.contains(Point::new(100.0, 50.0)));
///
/// // Negative extents flip the origin
/// assert_eq!(Region::new(10.0, 10.0, -10.0, -10.0), Region::new(0.0, 0.0, 10.0, 10.0));
/// ```
#[derive(Clone, Copy, PartialEq, Default, Debug, serde::Deserialize, serde::Serialize)]
pub struct Region {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Eq for Region {}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Region {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x
            .total_cmp(&other.x)
            .then(self.y.total_cmp(&other.y))
            .then(self.width.total_cmp(&other.width))
            .then(self.height.total_cmp(&other.height))
    }
}

impl Hash for Region {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({}, {}, {}, {})", self.x, self.y, self.width, self.height)
    }
}

impl Region {
    /// Creates a new region from an origin and extents.
    ///
    /// Negative extents are normalized by translating the origin, so
    /// width and height are always stored non-negative. Zero-area
    /// regions are valid values; [`crate::QuadMap`] rejects them only
    /// as overall bounds.
    ///
    /// # Arguments
    ///
    /// * `x` - Origin X coordinate (left edge after normalization)
    /// * `y` - Origin Y coordinate (top edge after normalization)
    /// * `width` - Horizontal extent
    /// * `height` - Vertical extent
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Region {
        let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        Region { x, y, width, height }
    }

    /// Returns the left edge (minimum X).
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Returns the top edge (minimum Y).
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Returns the right edge (exclusive maximum X).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge (exclusive maximum Y).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns the width of the region.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the region.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the area of the region.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the center point of the region.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Checks whether the region has positive area.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Checks if this region contains a point.
    ///
    /// The test is half-open: the left and top edges are inside, the
    /// right and bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        self.left() <= point.x
            && point.x < self.right()
            && self.top() <= point.y
            && point.y < self.bottom()
    }

    /// Checks if this region overlaps another with positive area.
    ///
    /// A region always intersects itself; beyond that identity
    /// short-circuit, mere edge contact does not count as an
    /// intersection.
    pub fn intersects(&self, other: &Region) -> bool {
        if self == other {
            return true;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Returns the index of the quadrant the point falls into,
    /// relative to this region's center.
    ///
    /// Bit 1 encodes the horizontal half (0 = left), bit 0 the
    /// vertical half (0 = top).
    pub fn quadrant_of(&self, point: Point) -> usize {
        let (cx, cy) = self.center();
        let bit_left = usize::from(point.x >= cx);
        let bit_top = usize::from(point.y >= cy);
        bit_left << 1 | bit_top
    }

    /// Returns the sub-region covered by the given quadrant index.
    ///
    /// The four quadrant regions exactly quarter this region.
    pub fn quadrant_region(&self, quadrant: usize) -> Region {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        let dx = ((quadrant & 2) >> 1) as f64;
        let dy = (quadrant & 1) as f64;
        Region::new(
            self.x + dx * half_width,
            self.y + dy * half_height,
            half_width,
            half_height,
        )
    }
}
