//! Shared interior rasterization
//!
//! Every shape with an interior is turned into cells the same way: walk
//! the shape's discrete bounding box, map each cell center back into
//! world space and keep the cell when the center passes the shape's
//! membership predicate. Cost is proportional to the bounding box area.

use log::debug;

use crate::coordinate::{Bounds, Cell, CellBounds, CoordTransform, Point};

/// Discrete bounding box of a world rectangle under `transform`
///
/// Corners are mapped into array space, ordered per axis, widened with
/// floor/ceil so the integer box contains the shape, then clamped to the
/// destination grid. Returns `None` when nothing of the rectangle lands
/// on the grid.
pub(crate) fn discrete_bounds(bounds_wc: &Bounds, transform: &CoordTransform) -> Option<CellBounds> {
    let a = transform.map_to_array(&bounds_wc.p1);
    let b = transform.map_to_array(&bounds_wc.p2);

    let (lo_x, hi_x) = (a.x.min(b.x).floor(), a.x.max(b.x).ceil());
    let (lo_y, hi_y) = (a.y.min(b.y).floor(), a.y.max(b.y).ceil());

    let (n_cols, n_rows) = (transform.n_cols(), transform.n_rows());
    if n_cols == 0 || n_rows == 0 {
        return None;
    }
    let (last_col, last_row) = ((n_cols - 1) as f64, (n_rows - 1) as f64);

    if !(hi_x >= 0.0 && lo_x <= last_col && hi_y >= 0.0 && lo_y <= last_row) {
        return None;
    }

    Some(CellBounds::new(
        lo_x.max(0.0) as u32,
        lo_y.max(0.0) as u32,
        hi_x.min(last_col) as u32,
        hi_y.min(last_row) as u32,
    ))
}

/// Keep the cells of `bounds` whose world-space centers satisfy `is_inside`
///
/// Cells come back in row-major order.
pub(crate) fn rasterize_interior<F>(
    bounds: Option<CellBounds>,
    transform: &CoordTransform,
    mut is_inside: F,
) -> Vec<Cell>
where
    F: FnMut(&Point) -> bool,
{
    let Some(bounds) = bounds else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    for cell in bounds.cells() {
        let center = Point::new(cell.col as f64 + 0.5, cell.row as f64 + 0.5);
        let world = transform.map_to_world(&center);
        if is_inside(&world) {
            cells.push(cell);
        }
    }

    debug!("Rasterized {} of {} candidate cells in {}", cells.len(), bounds.area(), bounds);
    cells
}

/// Squared normalized distance along one ellipse axis
///
/// A zero semi-axis collapses the ellipse onto a segment: offsets along
/// that axis are then either exactly on it or infinitely far away.
pub(crate) fn axis_term(offset: f64, semi_axis: f64) -> f64 {
    if semi_axis == 0.0 {
        if offset == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        (offset * offset) / (semi_axis * semi_axis)
    }
}

/// Drop candidate cells that fall outside the shape's discrete bounds
///
/// The discrete bounds are already clipped to the destination grid, so
/// this also discards cells pushed off the array by rounding.
pub(crate) fn clamp_to_bounds(bounds_wc: &Bounds, transform: &CoordTransform, cells: Vec<Cell>) -> Vec<Cell> {
    match discrete_bounds(bounds_wc, transform) {
        Some(limit) => cells.into_iter().filter(|cell| limit.contains(cell)).collect(),
        None => Vec::new(),
    }
}

/// Parameter range `[t0, t1]` of the segment `a + t * (b - a)` that lies
/// on the destination grid, in array space
///
/// Liang-Barsky clipping against `[0, n_cols] x [0, n_rows]`. `None` when
/// the segment misses the grid.
pub(crate) fn clip_to_grid(a: &Point, b: &Point, transform: &CoordTransform) -> Option<(f64, f64)> {
    let (width, height) = (transform.n_cols() as f64, transform.n_rows() as f64);
    let (dx, dy) = (b.x - a.x, b.y - a.y);

    let edges = [
        (-dx, a.x),
        (dx, width - a.x),
        (-dy, a.y),
        (dy, height - a.y),
    ];

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 || q.is_nan() {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }

    if t0 > t1 || t0.is_nan() || t1.is_nan() {
        return None;
    }
    Some((t0, t1))
}
