//! Boolean selection mask over array cells

use crate::coordinate::Cell;

/// Row-major grid of selected flags
///
/// Cells outside the grid are ignored by `set` and read back as
/// unselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMask {
    cols: u32,
    rows: u32,
    bits: Vec<bool>,
}

impl SelectionMask {
    /// Create an all-false mask
    pub fn new(cols: u32, rows: u32) -> Self {
        SelectionMask {
            cols,
            rows,
            bits: vec![false; cols as usize * rows as usize],
        }
    }

    /// Create a mask with exactly the given cells set
    pub fn from_cells(cols: u32, rows: u32, cells: &[Cell]) -> Self {
        let mut mask = SelectionMask::new(cols, rows);
        mask.union_cells(cells);
        mask
    }

    /// Number of columns
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    fn index(&self, cell: &Cell) -> Option<usize> {
        if cell.col >= self.cols || cell.row >= self.rows {
            return None;
        }
        Some(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Whether a cell is selected
    pub fn get(&self, cell: &Cell) -> bool {
        self.index(cell).map(|i| self.bits[i]).unwrap_or(false)
    }

    /// Set or clear a cell
    pub fn set(&mut self, cell: &Cell, value: bool) {
        if let Some(i) = self.index(cell) {
            self.bits[i] = value;
        }
    }

    /// Select every given cell, leaving others unchanged
    pub fn union_cells(&mut self, cells: &[Cell]) {
        for cell in cells {
            self.set(cell, true);
        }
    }

    /// Keep only cells also selected in `other`
    pub fn intersect(&mut self, other: &SelectionMask) {
        self.combine(other, |a, b| a && b);
    }

    /// Clear cells selected in `other`
    pub fn subtract(&mut self, other: &SelectionMask) {
        self.combine(other, |a, b| a && !b);
    }

    fn combine<F: Fn(bool, bool) -> bool>(&mut self, other: &SelectionMask, op: F) {
        debug_assert_eq!((self.cols, self.rows), (other.cols, other.rows));
        for (a, b) in self.bits.iter_mut().zip(&other.bits) {
            *a = op(*a, *b);
        }
    }

    /// Flip every cell of the mask
    pub fn invert(&mut self) {
        for bit in self.bits.iter_mut() {
            *bit = !*bit;
        }
    }

    /// Number of selected cells
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Selected cells, scanning rows top to bottom and columns left to right
    pub fn selected_cells(&self) -> Vec<Cell> {
        let cols = self.cols.max(1) as usize;
        self.bits.iter()
            .enumerate()
            .filter(|(_, selected)| **selected)
            .map(|(i, _)| Cell::new((i % cols) as u32, (i / cols) as u32))
            .collect()
    }
}
