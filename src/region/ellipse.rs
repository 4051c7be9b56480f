//! Filled ellipse region

use log::debug;

use crate::coordinate::{Bounds, Cell, CellBounds, CoordTransform, Point};

use super::rasterize::{discrete_bounds, rasterize_interior};

/// Ellipse inscribed in a world-space rectangle, with an explicit center
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseRegion {
    /// Top-left corner of the bounding rectangle
    pub top_left: Point,
    /// Bottom-right corner of the bounding rectangle
    pub bottom_right: Point,
    /// Center of the ellipse
    pub center: Point,
}

/// Ellipse parameters after flooring into array space
#[derive(Debug, Clone, Copy)]
struct DiscreteEllipse {
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl DiscreteEllipse {
    fn is_degenerate(&self) -> bool {
        self.a == 0.0 || self.b == 0.0
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if self.a == 0.0 {
            return x == self.cx && y >= self.y_range.0 && y <= self.y_range.1;
        }
        if self.b == 0.0 {
            return y == self.cy && x >= self.x_range.0 && x <= self.x_range.1;
        }

        // The quarter-cell offset rounds off the rasterized outline at low resolution
        let dx = (x - self.cx) - 1.0 / (4.0 * self.a);
        let dy = (y - self.cy) - 1.0 / (4.0 * self.b);
        (dx * dx) / (self.a * self.a) + (dy * dy) / (self.b * self.b) < 1.0
    }
}

impl EllipseRegion {
    /// Create an ellipse from its bounding corners and center
    pub fn new(top_left: Point, bottom_right: Point, center: Point) -> Self {
        EllipseRegion { top_left, bottom_right, center }
    }

    /// Create an ellipse centered in its bounding rectangle
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        let center = Bounds::new(top_left, bottom_right).center();
        EllipseRegion::new(top_left, bottom_right, center)
    }

    /// Control points as `[top_left, bottom_right, center]`
    pub fn control_points(&self) -> Vec<Point> {
        vec![self.top_left, self.bottom_right, self.center]
    }

    /// World-space bounding box
    pub fn bounds_wc(&self) -> Bounds {
        Bounds::new(self.top_left, self.bottom_right)
    }

    fn discretize(&self, transform: &CoordTransform) -> DiscreteEllipse {
        let c = transform.map_to_array(&self.center).floor();
        let tl = transform.map_to_array(&self.top_left).floor();
        let br = transform.map_to_array(&self.bottom_right).floor();

        DiscreteEllipse {
            cx: c.x,
            cy: c.y,
            a: c.x - tl.x,
            b: c.y - tl.y,
            x_range: (tl.x.min(br.x), tl.x.max(br.x)),
            y_range: (tl.y.min(br.y), tl.y.max(br.y)),
        }
    }

    /// Test whether the cell holding `world` belongs to the ellipse
    pub fn is_inside(&self, transform: &CoordTransform, world: &Point) -> bool {
        let cell = transform.map_to_array(world).floor();
        self.discretize(transform).contains(cell.x, cell.y)
    }

    /// Cells covered by the ellipse
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let ellipse = self.discretize(transform);
        let bounds = discrete_bounds(&self.bounds_wc(), transform);

        if ellipse.is_degenerate() {
            debug!("Ellipse collapsed to a single row or column: a={}, b={}", ellipse.a, ellipse.b);
            return Self::degenerate_cells(&ellipse, bounds);
        }

        rasterize_interior(bounds, transform, |p| {
            let cell = transform.map_to_array(p).floor();
            ellipse.contains(cell.x, cell.y)
        })
    }

    fn degenerate_cells(ellipse: &DiscreteEllipse, bounds: Option<CellBounds>) -> Vec<Cell> {
        let Some(bounds) = bounds else {
            return Vec::new();
        };

        // Walk the fixed column (or row) inside the clamped bounding box
        bounds.cells()
            .filter(|cell| ellipse.contains(cell.col as f64, cell.row as f64))
            .collect()
    }
}
