//! Set algebra over regions
//!
//! Regions are combined through an ordered list of operations evaluated
//! into a boolean mask, which yields the final selected cells.

mod colored;
mod mask;
mod op_list;
mod operation;

#[cfg(test)]
mod tests;

pub use self::colored::{Color, ColoredRegionOpList};
pub use self::mask::SelectionMask;
pub use self::op_list::RegionOpList;
pub use self::operation::{Operation, RegionOp};
