//! Axis-aligned box region

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};

use super::rasterize::{discrete_bounds, rasterize_interior};

/// Rectangle given by two opposite corners in world coordinates
///
/// Every cell of the discrete bounding box is selected. Zero-width or
/// zero-height boxes reduce to a line or a single cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxRegion {
    /// Top-left corner
    pub top_left: Point,
    /// Bottom-right corner
    pub bottom_right: Point,
}

impl BoxRegion {
    /// Create a new box from two opposite corners
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        BoxRegion { top_left, bottom_right }
    }

    /// Control points as `[top_left, bottom_right]`
    pub fn control_points(&self) -> Vec<Point> {
        vec![self.top_left, self.bottom_right]
    }

    /// World-space bounding box
    pub fn bounds_wc(&self) -> Bounds {
        Bounds::new(self.top_left, self.bottom_right)
    }

    /// Box membership is the bounding box itself
    pub fn is_inside(&self, _world: &Point) -> bool {
        true
    }

    /// All cells of the discrete bounding box
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        rasterize_interior(discrete_bounds(&self.bounds_wc(), transform), transform, |p| self.is_inside(p))
    }
}
