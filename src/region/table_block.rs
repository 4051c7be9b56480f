//! Table block: a cell rectangle given directly in array coordinates

use crate::coordinate::{Bounds, Cell, CellBounds, Point};

/// Rectangle of cells for spreadsheet-style selection
///
/// The corners are already (column, row) positions, so no transform is
/// applied. The `selected` flag is caller state carried alongside the
/// block; it does not affect which cells the block covers and is not
/// part of equality.
#[derive(Debug, Clone)]
pub struct TableBlockRegion {
    /// First corner (column, row)
    pub corner1: Point,
    /// Opposite corner (column, row)
    pub corner2: Point,
    selected: bool,
}

impl PartialEq for TableBlockRegion {
    fn eq(&self, other: &Self) -> bool {
        self.corner1 == other.corner1 && self.corner2 == other.corner2
    }
}

impl TableBlockRegion {
    /// Create a table block; the selected flag starts set
    pub fn new(corner1: Point, corner2: Point) -> Self {
        TableBlockRegion { corner1, corner2, selected: true }
    }

    /// Create a table block from integer cell corners
    pub fn from_cells(col1: u32, row1: u32, col2: u32, row2: u32) -> Self {
        TableBlockRegion::new(
            Point::new(col1 as f64, row1 as f64),
            Point::new(col2 as f64, row2 as f64),
        )
    }

    /// Control points as `[corner1, corner2]`
    pub fn control_points(&self) -> Vec<Point> {
        vec![self.corner1, self.corner2]
    }

    /// Bounds of the corners, in array space
    pub fn bounds_wc(&self) -> Bounds {
        Bounds::new(self.corner1, self.corner2)
    }

    /// The covered cells as an inclusive rectangle
    ///
    /// Negative coordinates are cut off at zero; `None` when the block
    /// lies entirely at negative coordinates.
    pub fn cell_bounds(&self) -> Option<CellBounds> {
        let bounds = self.bounds_wc();
        let (max_col, max_row) = (bounds.max_x().floor(), bounds.max_y().floor());
        if !(max_col >= 0.0 && max_row >= 0.0) {
            return None;
        }

        let min = Cell::from_floored(bounds.min_x().floor().max(0.0), bounds.min_y().floor().max(0.0))?;
        let max = Cell::from_floored(max_col, max_row)?;
        Some(CellBounds::new(min.col, min.row, max.col, max.row))
    }

    /// Every cell of the block in row-major order
    pub fn selected_cells(&self) -> Vec<Cell> {
        self.cell_bounds()
            .map(|bounds| bounds.cells().collect())
            .unwrap_or_default()
    }

    /// Whether the caller marked this block as selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the caller's selected flag
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Flip the caller's selected flag
    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}
