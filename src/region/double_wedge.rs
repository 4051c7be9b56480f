//! Double wedge: a wedge together with its point reflection

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};

use super::wedge::WedgeRegion;

/// Two opposing wedges sharing a center and outer ellipse
///
/// The second wedge is the first rotated by 180 degrees, so a double
/// wedge looks like a bow tie.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleWedgeRegion {
    /// The wedge the reflection is derived from
    pub wedge: WedgeRegion,
}

impl DoubleWedgeRegion {
    /// Create a double wedge from its primary wedge
    pub fn new(wedge: WedgeRegion) -> Self {
        DoubleWedgeRegion { wedge }
    }

    /// Create a double wedge from angles, like `WedgeRegion::from_angles`
    pub fn from_angles(
        center: Point,
        outer_top_left: Point,
        outer_bottom_right: Point,
        start_angle: f64,
        arc_span: f64,
    ) -> Self {
        DoubleWedgeRegion::new(WedgeRegion::from_angles(
            center,
            outer_top_left,
            outer_bottom_right,
            start_angle,
            arc_span,
        ))
    }

    /// Control points of the primary wedge
    pub fn control_points(&self) -> Vec<Point> {
        self.wedge.control_points()
    }

    /// World-space bounding box of the outer ellipse
    pub fn bounds_wc(&self) -> Bounds {
        self.wedge.bounds_wc()
    }

    /// Test whether a world point lies in either wedge
    pub fn is_inside(&self, world: &Point) -> bool {
        self.wedge.is_inside(world) || self.wedge.opposite().is_inside(world)
    }

    /// Cells of both wedges, row-major and without duplicates
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let mut cells = self.wedge.selected_cells(transform);
        cells.extend(self.wedge.opposite().selected_cells(transform));

        // Boundary cells near the apex are produced by both halves
        cells.sort_unstable_by_key(|cell| (cell.row, cell.col));
        cells.dedup();
        cells
    }
}
