//! Ring region between two nested ellipses

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};

use super::rasterize::{axis_term, discrete_bounds, rasterize_interior};

/// Ring bounded by an inner and an outer ellipse sharing one center
///
/// A cell belongs to the ring when it lies on or outside the inner
/// ellipse and on or inside the outer one.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnularRegion {
    /// Shared center
    pub center: Point,
    /// Inner ellipse top-left corner
    pub inner_top_left: Point,
    /// Inner ellipse bottom-right corner
    pub inner_bottom_right: Point,
    /// Outer ellipse top-left corner
    pub outer_top_left: Point,
    /// Outer ellipse bottom-right corner
    pub outer_bottom_right: Point,
}

#[derive(Debug, Clone, Copy)]
struct DiscreteRing {
    cx: f64,
    cy: f64,
    inner: (f64, f64),
    outer: (f64, f64),
}

impl DiscreteRing {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);

        // A collapsed inner ellipse has no interior to exclude
        let outside_inner = self.inner.0 == 0.0 || self.inner.1 == 0.0 ||
            axis_term(dx, self.inner.0) + axis_term(dy, self.inner.1) >= 1.0;
        let inside_outer = axis_term(dx, self.outer.0) + axis_term(dy, self.outer.1) <= 1.0;

        outside_inner && inside_outer
    }
}

impl AnnularRegion {
    /// Create a ring from its center and both ellipse rectangles
    pub fn new(
        center: Point,
        inner_top_left: Point,
        inner_bottom_right: Point,
        outer_top_left: Point,
        outer_bottom_right: Point,
    ) -> Self {
        AnnularRegion {
            center,
            inner_top_left,
            inner_bottom_right,
            outer_top_left,
            outer_bottom_right,
        }
    }

    /// Circular ring with the given inner and outer radii
    pub fn circular(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        let corner = |r: f64, sign: f64| Point::new(center.x + sign * r, center.y + sign * r);
        AnnularRegion::new(
            center,
            corner(inner_radius, -1.0),
            corner(inner_radius, 1.0),
            corner(outer_radius, -1.0),
            corner(outer_radius, 1.0),
        )
    }

    /// Control points as `[center, inner_tl, inner_br, outer_tl, outer_br]`
    pub fn control_points(&self) -> Vec<Point> {
        vec![
            self.center,
            self.inner_top_left,
            self.inner_bottom_right,
            self.outer_top_left,
            self.outer_bottom_right,
        ]
    }

    /// World-space bounding box of the outer ellipse
    pub fn bounds_wc(&self) -> Bounds {
        Bounds::new(self.outer_top_left, self.outer_bottom_right)
    }

    fn discretize(&self, transform: &CoordTransform) -> DiscreteRing {
        let c = transform.map_to_array(&self.center).floor();
        let inner = transform.map_to_array(&self.inner_top_left).floor();
        let outer = transform.map_to_array(&self.outer_top_left).floor();

        DiscreteRing {
            cx: c.x,
            cy: c.y,
            inner: (c.x - inner.x, c.y - inner.y),
            outer: (c.x - outer.x, c.y - outer.y),
        }
    }

    /// Test whether the cell holding `world` belongs to the ring
    pub fn is_inside(&self, transform: &CoordTransform, world: &Point) -> bool {
        let cell = transform.map_to_array(world).floor();
        self.discretize(transform).contains(cell.x, cell.y)
    }

    /// Cells covered by the ring
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let ring = self.discretize(transform);
        rasterize_interior(discrete_bounds(&self.bounds_wc(), transform), transform, |p| {
            let cell = transform.map_to_array(p).floor();
            ring.contains(cell.x, cell.y)
        })
    }
}
