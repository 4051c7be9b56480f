use log::info;

use crate::coordinate::{Cell, CoordTransform};
use crate::errors::RegionResult;
use crate::region::Region;
use crate::selection::{Color, ColoredRegionOpList, Operation, RegionOp, SelectionMask};
use crate::utils::parse_utils;

/// Main interface to the RegionKit library
///
/// Bundles one coordinate transform with one compound selection. The
/// selection is edited like an undo stack and evaluated on demand.
#[derive(Debug, Clone)]
pub struct RegionKit {
    transform: CoordTransform,
    selection: ColoredRegionOpList,
}

impl RegionKit {
    /// Create a new RegionKit instance over `transform`
    pub fn new(transform: CoordTransform) -> Self {
        RegionKit {
            transform,
            selection: ColoredRegionOpList::default(),
        }
    }

    /// The transform selections are evaluated against
    pub fn transform(&self) -> &CoordTransform {
        &self.transform
    }

    /// Replace the transform
    pub fn set_transform(&mut self, transform: CoordTransform) {
        self.transform = transform;
    }

    /// The selection with its display metadata
    pub fn selection(&self) -> &ColoredRegionOpList {
        &self.selection
    }

    /// Set display colour and opacity
    pub fn set_display(&mut self, color: Color, opacity: f32) {
        self.selection.set_color(color);
        self.selection.set_opacity(opacity);
    }

    /// Append an operation with its region
    ///
    /// # Arguments
    /// * `operation` - Set operation to apply
    /// * `region` - Region operand; ignored for `Complement`
    ///
    /// # Returns
    /// An error if the operation needs a region and none was given
    pub fn add(&mut self, operation: Operation, region: Option<Region>) -> RegionResult<()> {
        let op = RegionOp::new(operation, region)?;
        self.selection.ops_mut().push(op);
        Ok(())
    }

    /// Append an operation written as `OP:SHAPE:x,y;...`
    pub fn add_parsed(&mut self, op_str: &str) -> RegionResult<()> {
        let op = parse_utils::parse_region_op(op_str)?;
        self.selection.ops_mut().push(op);
        Ok(())
    }

    /// Remove the most recent operation
    pub fn undo(&mut self) -> Option<RegionOp> {
        self.selection.ops_mut().pop()
    }

    /// Remove every operation
    pub fn clear(&mut self) {
        self.selection.ops_mut().clear();
    }

    /// Evaluate the selection into its mask
    pub fn mask(&self) -> SelectionMask {
        self.selection.ops().selection_mask(&self.transform)
    }

    /// Evaluate the selection into row-major cells
    pub fn select(&self) -> Vec<Cell> {
        let cells = self.selection.ops().selected_cells(&self.transform);
        info!("RegionKit selection: {} operations, {} cells", self.selection.ops().len(), cells.len());
        cells
    }
}
