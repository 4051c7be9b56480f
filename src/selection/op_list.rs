//! Ordered list of region operations and its mask evaluator

use log::{debug, info, warn};

use crate::coordinate::{Cell, CoordTransform};
use crate::region::Region;

use super::mask::SelectionMask;
use super::operation::{Operation, RegionOp};

/// Ordered sequence of region operations
///
/// Entries are applied strictly in order. Editing is stack-like: append
/// at the end, remove the last entry, or clear everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionOpList {
    ops: Vec<RegionOp>,
}

impl RegionOpList {
    /// Create an empty list
    pub fn new() -> Self {
        RegionOpList { ops: Vec::new() }
    }

    /// Append an operation
    pub fn push(&mut self, op: RegionOp) {
        self.ops.push(op);
    }

    /// Remove and return the last operation
    pub fn pop(&mut self) -> Option<RegionOp> {
        self.ops.pop()
    }

    /// Remove every operation
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the list has no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate the operations in order
    pub fn iter(&self) -> std::slice::Iter<'_, RegionOp> {
        self.ops.iter()
    }

    /// Iterate the regions referenced by the operations
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.ops.iter().filter_map(|op| op.region())
    }

    /// Evaluate the list into a selection mask
    ///
    /// Every region is rasterized first so the mask can be sized once:
    /// the destination grid of `transform`, grown to fit the largest
    /// column and row any region produced. The size is fixed before any
    /// operation runs, so a `Complement` always inverts the final extent.
    /// An empty list yields a 0 x 0 mask.
    pub fn selection_mask(&self, transform: &CoordTransform) -> SelectionMask {
        if self.ops.is_empty() {
            return SelectionMask::new(0, 0);
        }

        let region_cells: Vec<Option<Vec<Cell>>> = self.ops.iter()
            .map(|op| op.region().map(|region| region.selected_cells(transform)))
            .collect();

        let (mut cols, mut rows) = (transform.n_cols(), transform.n_rows());
        for cell in region_cells.iter().flatten().flatten() {
            cols = cols.max(cell.col + 1);
            rows = rows.max(cell.row + 1);
        }
        if (cols, rows) != (transform.n_cols(), transform.n_rows()) {
            debug!("Grew selection mask from {}x{} to {}x{}",
                   transform.n_cols(), transform.n_rows(), cols, rows);
        }

        if self.ops[0].operation() == Operation::Complement {
            warn!("Selection starts with a complement; it inverts an empty {}x{} mask", cols, rows);
        }

        let mut mask = SelectionMask::new(cols, rows);
        for (op, cells) in self.ops.iter().zip(&region_cells) {
            let cells = cells.as_deref().unwrap_or(&[]);
            match op.operation() {
                Operation::Union => mask.union_cells(cells),
                Operation::Intersect => mask.intersect(&SelectionMask::from_cells(cols, rows, cells)),
                Operation::IntersectComplement => mask.subtract(&SelectionMask::from_cells(cols, rows, cells)),
                Operation::Complement => mask.invert(),
            }
            debug!("After {}: {} cells selected", op.operation(), mask.count());
        }

        mask
    }

    /// Evaluate the list into its selected cells, in row-major order
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        let cells = self.selection_mask(transform).selected_cells();
        info!("Evaluated {} operations into {} selected cells", self.ops.len(), cells.len());
        cells
    }
}

impl FromIterator<RegionOp> for RegionOpList {
    fn from_iter<I: IntoIterator<Item = RegionOp>>(iter: I) -> Self {
        RegionOpList { ops: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RegionOpList {
    type Item = &'a RegionOp;
    type IntoIter = std::slice::Iter<'a, RegionOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
