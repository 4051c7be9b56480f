//! Geometric regions and their discrete cell coverage
//!
//! A `Region` is one shape defined by world-space control points. It
//! never stores a transform: every query takes the transform as a
//! parameter, so the same region can be evaluated against different
//! grids.

mod annular;
mod double_wedge;
mod ellipse;
mod kind;
mod line;
mod point_set;
pub(crate) mod rasterize;
mod rectangle;
mod table_block;
mod wedge;

#[cfg(test)]
mod tests;

pub use self::annular::AnnularRegion;
pub use self::double_wedge::DoubleWedgeRegion;
pub use self::ellipse::EllipseRegion;
pub use self::kind::ShapeKind;
pub use self::line::LineRegion;
pub use self::point_set::PointRegion;
pub use self::rectangle::BoxRegion;
pub use self::table_block::TableBlockRegion;
pub use self::wedge::WedgeRegion;

use log::debug;

use crate::coordinate::{Bounds, Cell, CellBounds, CoordTransform, Point};
use crate::errors::{RegionError, RegionResult};

/// One geometric shape
///
/// Equality is exact: two regions are equal only when they are the same
/// kind with bit-identical control points. Near-duplicate shapes built
/// from slightly different floats compare unequal.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Axis-aligned rectangle
    Box(BoxRegion),
    /// Filled ellipse
    Ellipse(EllipseRegion),
    /// Ring between two ellipses
    Annular(AnnularRegion),
    /// Elliptical sector
    Wedge(WedgeRegion),
    /// Sector plus its reflection
    DoubleWedge(DoubleWedgeRegion),
    /// Line segment
    Line(LineRegion),
    /// Independent points
    Point(PointRegion),
    /// Cell rectangle in array space
    TableBlock(TableBlockRegion),
}

impl Region {
    /// Build a region from a shape kind and its raw control-point slots
    ///
    /// Slot layouts:
    /// - box: `[top_left, bottom_right]`
    /// - ellipse: `[top_left, bottom_right, center]`
    /// - annulus: `[center, inner_tl, inner_br, outer_tl, outer_br]`
    /// - wedge, double-wedge: `[center, arc_start, arc_end, outer_tl, outer_br, (start_deg, span_deg)]`
    /// - line: `[start, end]`
    /// - point: one or more points
    /// - table: `[corner1, corner2]` in (column, row) space
    pub fn from_control_points(kind: ShapeKind, points: &[Point]) -> RegionResult<Region> {
        let count_ok = match kind.slot_count() {
            Some(n) => points.len() == n,
            None => !points.is_empty(),
        };
        if !count_ok {
            let expected = match kind.slot_count() {
                Some(n) => n.to_string(),
                None => "at least 1".to_string(),
            };
            return Err(RegionError::InvalidControlPoints { kind, expected, found: points.len() });
        }

        let p = points;
        let region = match kind {
            ShapeKind::Box => Region::Box(BoxRegion::new(p[0], p[1])),
            ShapeKind::Ellipse => Region::Ellipse(EllipseRegion::new(p[0], p[1], p[2])),
            ShapeKind::Annular => Region::Annular(AnnularRegion::new(p[0], p[1], p[2], p[3], p[4])),
            ShapeKind::Wedge => Region::Wedge(Self::wedge_from_slots(p)),
            ShapeKind::DoubleWedge => Region::DoubleWedge(DoubleWedgeRegion::new(Self::wedge_from_slots(p))),
            ShapeKind::Line => Region::Line(LineRegion::new(p[0], p[1])),
            ShapeKind::Point => Region::Point(PointRegion::new(p.to_vec())),
            ShapeKind::TableBlock => Region::TableBlock(TableBlockRegion::new(p[0], p[1])),
        };

        Ok(region)
    }

    fn wedge_from_slots(p: &[Point]) -> WedgeRegion {
        WedgeRegion::new(p[0], p[1], p[2], p[3], p[4], p[5].x, p[5].y)
    }

    /// The shape family of this region
    pub fn kind(&self) -> ShapeKind {
        match self {
            Region::Box(_) => ShapeKind::Box,
            Region::Ellipse(_) => ShapeKind::Ellipse,
            Region::Annular(_) => ShapeKind::Annular,
            Region::Wedge(_) => ShapeKind::Wedge,
            Region::DoubleWedge(_) => ShapeKind::DoubleWedge,
            Region::Line(_) => ShapeKind::Line,
            Region::Point(_) => ShapeKind::Point,
            Region::TableBlock(_) => ShapeKind::TableBlock,
        }
    }

    /// Control points in slot order (see `from_control_points`)
    pub fn control_points(&self) -> Vec<Point> {
        match self {
            Region::Box(r) => r.control_points(),
            Region::Ellipse(r) => r.control_points(),
            Region::Annular(r) => r.control_points(),
            Region::Wedge(r) => r.control_points(),
            Region::DoubleWedge(r) => r.control_points(),
            Region::Line(r) => r.control_points(),
            Region::Point(r) => r.control_points(),
            Region::TableBlock(r) => r.control_points(),
        }
    }

    /// World-space bounding box
    ///
    /// For table blocks the result is already in array space.
    pub fn bounds_wc(&self) -> Bounds {
        match self {
            Region::Box(r) => r.bounds_wc(),
            Region::Ellipse(r) => r.bounds_wc(),
            Region::Annular(r) => r.bounds_wc(),
            Region::Wedge(r) => r.bounds_wc(),
            Region::DoubleWedge(r) => r.bounds_wc(),
            Region::Line(r) => r.bounds_wc(),
            Region::Point(r) => r.bounds_wc(),
            Region::TableBlock(r) => r.bounds_wc(),
        }
    }

    /// Integer bounding box on the transform's grid
    ///
    /// `None` when the shape misses the grid entirely. Table blocks
    /// ignore the transform and report their own cell rectangle.
    pub fn discrete_bounds(&self, transform: &CoordTransform) -> Option<CellBounds> {
        match self {
            Region::TableBlock(r) => r.cell_bounds(),
            _ => rasterize::discrete_bounds(&self.bounds_wc(), transform),
        }
    }

    /// Membership test for a world point
    ///
    /// Lines, points and table blocks have no interior and always
    /// return `false`.
    pub fn is_inside(&self, transform: &CoordTransform, world: &Point) -> bool {
        match self {
            Region::Box(r) => r.is_inside(world),
            Region::Ellipse(r) => r.is_inside(transform, world),
            Region::Annular(r) => r.is_inside(transform, world),
            Region::Wedge(r) => r.is_inside(world),
            Region::DoubleWedge(r) => r.is_inside(world),
            Region::Line(_) | Region::Point(_) | Region::TableBlock(_) => false,
        }
    }

    /// Cells covered by this region on the transform's grid
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let cells = match self {
            Region::Box(r) => r.selected_cells(transform),
            Region::Ellipse(r) => r.selected_cells(transform),
            Region::Annular(r) => r.selected_cells(transform),
            Region::Wedge(r) => r.selected_cells(transform),
            Region::DoubleWedge(r) => r.selected_cells(transform),
            Region::Line(r) => r.selected_cells(transform),
            Region::Point(r) => r.selected_cells(transform),
            Region::TableBlock(r) => r.selected_cells(),
        };

        debug!("{} region selects {} cells", self.kind(), cells.len());
        cells
    }

    /// Discard cells outside this region's discrete bounds
    pub fn clamp_to_bounds(&self, transform: &CoordTransform, cells: Vec<Cell>) -> Vec<Cell> {
        match self.discrete_bounds(transform) {
            Some(limit) => cells.into_iter().filter(|cell| limit.contains(cell)).collect(),
            None => Vec::new(),
        }
    }

    /// Borrow the table block, if this is one
    pub fn as_table_block(&self) -> Option<&TableBlockRegion> {
        match self {
            Region::TableBlock(r) => Some(r),
            _ => None,
        }
    }

    /// Mutably borrow the table block, if this is one
    pub fn as_table_block_mut(&mut self) -> Option<&mut TableBlockRegion> {
        match self {
            Region::TableBlock(r) => Some(r),
            _ => None,
        }
    }
}

impl From<BoxRegion> for Region {
    fn from(r: BoxRegion) -> Self {
        Region::Box(r)
    }
}

impl From<EllipseRegion> for Region {
    fn from(r: EllipseRegion) -> Self {
        Region::Ellipse(r)
    }
}

impl From<AnnularRegion> for Region {
    fn from(r: AnnularRegion) -> Self {
        Region::Annular(r)
    }
}

impl From<WedgeRegion> for Region {
    fn from(r: WedgeRegion) -> Self {
        Region::Wedge(r)
    }
}

impl From<DoubleWedgeRegion> for Region {
    fn from(r: DoubleWedgeRegion) -> Self {
        Region::DoubleWedge(r)
    }
}

impl From<LineRegion> for Region {
    fn from(r: LineRegion) -> Self {
        Region::Line(r)
    }
}

impl From<PointRegion> for Region {
    fn from(r: PointRegion) -> Self {
        Region::Point(r)
    }
}

impl From<TableBlockRegion> for Region {
    fn from(r: TableBlockRegion) -> Self {
        Region::TableBlock(r)
    }
}
