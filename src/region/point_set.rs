//! Point region: independent control points, one cell each

use std::collections::HashSet;

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};

use super::rasterize::clamp_to_bounds;

/// A non-empty list of world points, each selecting the cell it falls in
#[derive(Debug, Clone, PartialEq)]
pub struct PointRegion {
    points: Vec<Point>,
}

impl PointRegion {
    /// Create a point region
    ///
    /// # Panics
    /// Panics if `points` is empty.
    pub fn new(points: Vec<Point>) -> Self {
        assert!(!points.is_empty(), "a point region needs at least one point");
        PointRegion { points }
    }

    /// Region holding a single point
    pub fn single(point: Point) -> Self {
        PointRegion { points: vec![point] }
    }

    /// The control points, in insertion order
    pub fn control_points(&self) -> Vec<Point> {
        self.points.clone()
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a point region holds at least one point
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// World-space box enclosing every point
    pub fn bounds_wc(&self) -> Bounds {
        // Construction guarantees at least one point
        Bounds::enclosing(&self.points).unwrap_or_else(|| Bounds::new(Point::default(), Point::default()))
    }

    /// Union of two point regions, skipping exact duplicate points
    pub fn merged(&self, other: &PointRegion) -> PointRegion {
        let mut points = self.points.clone();
        for p in &other.points {
            if !points.contains(p) {
                points.push(*p);
            }
        }
        PointRegion { points }
    }

    /// Cells holding the points, first occurrence order, without duplicates
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let mut seen = HashSet::new();
        let cells: Vec<Cell> = self.points.iter()
            .filter_map(|p| {
                let a = transform.map_to_array(p).floor();
                Cell::from_floored(a.x, a.y)
            })
            .filter(|cell| seen.insert(*cell))
            .collect();

        clamp_to_bounds(&self.bounds_wc(), transform, cells)
    }
}
