//! Bounding rectangle defined by two opposite corners

use super::point::Point;

/// An axis-aligned rectangle in world or array space
///
/// The corners are stored as given. Source coordinate systems may be
/// upside down, so `p1` is not guaranteed to be the minimum corner;
/// use the `min_*`/`max_*` accessors when ordering matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// First corner
    pub p1: Point,
    /// Opposite corner
    pub p2: Point,
}

impl Bounds {
    /// Create new bounds from two opposite corners
    pub fn new(p1: Point, p2: Point) -> Self {
        Bounds { p1, p2 }
    }

    /// Create new bounds from corner coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Smallest bounds enclosing all the given points
    ///
    /// Returns `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Bounds::from_coords(min_x, min_y, max_x, max_y))
    }

    /// Parse bounds from a string (format: "x1,y1,x2,y2")
    pub fn from_string(bounds_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = bounds_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Bounds must have 4 comma-separated values".to_string());
        }

        let mut values = [0.0f64; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| format!("Invalid bounds value '{}'", part.trim()))?;
        }

        Ok(Bounds::from_coords(values[0], values[1], values[2], values[3]))
    }

    /// Minimum X over both corners
    pub fn min_x(&self) -> f64 {
        self.p1.x.min(self.p2.x)
    }

    /// Maximum X over both corners
    pub fn max_x(&self) -> f64 {
        self.p1.x.max(self.p2.x)
    }

    /// Minimum Y over both corners
    pub fn min_y(&self) -> f64 {
        self.p1.y.min(self.p2.y)
    }

    /// Maximum Y over both corners
    pub fn max_y(&self) -> f64 {
        self.p1.y.max(self.p2.y)
    }

    /// Get the (unsigned) width of the bounds
    pub fn width(&self) -> f64 {
        (self.p1.x - self.p2.x).abs()
    }

    /// Get the (unsigned) height of the bounds
    pub fn height(&self) -> f64 {
        (self.p1.y - self.p2.y).abs()
    }

    /// Get the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            (self.p1.x + self.p2.x) / 2.0,
            (self.p1.y + self.p2.y) / 2.0,
        )
    }

    /// Check if these bounds contain a point (edges included)
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x() && point.x <= self.max_x() &&
            point.y >= self.min_y() && point.y <= self.max_y()
    }

    /// Clamp a point into these bounds
    pub fn clamp(&self, point: &Point) -> Point {
        Point::new(
            point.x.max(self.min_x()).min(self.max_x()),
            point.y.max(self.min_y()).min(self.max_y()),
        )
    }
}
