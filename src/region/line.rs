//! Straight line region

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};

use super::rasterize::{clamp_to_bounds, clip_to_grid};

/// Largest step count whose indices are still exact as `f64`
const MAX_STEPS: f64 = 9_007_199_254_740_992.0;

/// Line segment between two world points
///
/// Cells are produced by uniform stepping in array space: the number of
/// steps is the larger of the column and row deltas, and every step is
/// floored to a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRegion {
    /// First endpoint
    pub start: Point,
    /// Second endpoint
    pub end: Point,
}

impl LineRegion {
    /// Create a new line between two points
    pub fn new(start: Point, end: Point) -> Self {
        LineRegion { start, end }
    }

    /// Control points as `[start, end]`
    pub fn control_points(&self) -> Vec<Point> {
        vec![self.start, self.end]
    }

    /// World-space bounding box
    pub fn bounds_wc(&self) -> Bounds {
        Bounds::new(self.start, self.end)
    }

    /// Cells touched by the line, from start to end
    ///
    /// Only the steps that land on the grid are walked, so an endpoint far
    /// outside the grid costs nothing extra.
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let a = transform.map_to_array(&self.start);
        let b = transform.map_to_array(&self.end);

        let steps = (b.x.floor() - a.x.floor()).abs()
            .max((b.y.floor() - a.y.floor()).abs());
        if !steps.is_finite() || steps >= MAX_STEPS {
            return Vec::new();
        }

        let Some((t0, t1)) = clip_to_grid(&a, &b, transform) else {
            return Vec::new();
        };

        let (first, last) = if steps == 0.0 {
            (0, 0)
        } else {
            ((t0 * steps).floor() as u64, (t1 * steps).ceil().min(steps) as u64)
        };

        let mut cells: Vec<Cell> = Vec::new();
        for i in first..=last {
            let x = a.x + (b.x - a.x) * i as f64 / steps.max(1.0);
            let y = a.y + (b.y - a.y) * i as f64 / steps.max(1.0);

            if let Some(cell) = Cell::from_floored(x.floor(), y.floor()) {
                if cells.last() != Some(&cell) {
                    cells.push(cell);
                }
            }
        }

        clamp_to_bounds(&self.bounds_wc(), transform, cells)
    }
}
