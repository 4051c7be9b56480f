//! Discrete array cells and integer cell rectangles

use std::fmt;

/// A discrete (column, row) cell of the selected array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based column index
    pub col: u32,
    /// Zero-based row index
    pub row: u32,
}

impl Cell {
    /// Create a new cell
    pub fn new(col: u32, row: u32) -> Self {
        Cell { col, row }
    }

    /// Build a cell from floored array coordinates, rejecting negatives
    pub(crate) fn from_floored(col: f64, row: f64) -> Option<Self> {
        if !(col >= 0.0 && row >= 0.0) || col > u32::MAX as f64 || row > u32::MAX as f64 {
            return None;
        }
        Some(Cell::new(col as u32, row as u32))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// Inclusive rectangle of cells
///
/// Both corners are part of the rectangle, so a `CellBounds` always
/// covers at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// First column (inclusive)
    pub min_col: u32,
    /// First row (inclusive)
    pub min_row: u32,
    /// Last column (inclusive)
    pub max_col: u32,
    /// Last row (inclusive)
    pub max_row: u32,
}

impl CellBounds {
    /// Create bounds from two corners in any order
    pub fn new(col1: u32, row1: u32, col2: u32, row2: u32) -> Self {
        CellBounds {
            min_col: col1.min(col2),
            min_row: row1.min(row2),
            max_col: col1.max(col2),
            max_row: row1.max(row2),
        }
    }

    /// Number of columns covered
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Number of rows covered
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    /// Number of cells covered
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if a cell lies inside these bounds
    pub fn contains(&self, cell: &Cell) -> bool {
        cell.col >= self.min_col && cell.col <= self.max_col &&
            cell.row >= self.min_row && cell.row <= self.max_row
    }

    /// Overlap of two rectangles, if any
    pub fn intersection(&self, other: &CellBounds) -> Option<CellBounds> {
        let min_col = self.min_col.max(other.min_col);
        let min_row = self.min_row.max(other.min_row);
        let max_col = self.max_col.min(other.max_col);
        let max_row = self.max_row.min(other.max_row);

        if min_col > max_col || min_row > max_row {
            return None;
        }

        Some(CellBounds { min_col, min_row, max_col, max_row })
    }

    /// Iterate the covered cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |row| (self.min_col..=self.max_col).map(move |col| Cell::new(col, row)))
    }
}

impl fmt::Display for CellBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]-[{},{}]", self.min_col, self.min_row, self.max_col, self.max_row)
    }
}
