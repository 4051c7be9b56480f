//! Point structure for representing coordinates

/// A point in either world or array space
///
/// In array space `x` is the column and `y` is the row, both zero-based.
/// Equality is exact floating-point equality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (column in array space)
    pub x: f64,
    /// Y coordinate (row in array space)
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Parse a point from a string (format: "x,y")
    pub fn from_string(point_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(format!("Point must have 2 comma-separated values, got '{}'", point_str));
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| format!("Invalid x value '{}'", parts[0].trim()))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| format!("Invalid y value '{}'", parts[1].trim()))?;

        Ok(Point::new(x, y))
    }

    /// Floor both components
    pub fn floor(&self) -> Self {
        Point::new(self.x.floor(), self.y.floor())
    }

    /// Reflect this point through `center`
    pub fn mirrored_through(&self, center: &Point) -> Self {
        Point::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }
}
