pub mod coordinate;
pub mod region;
pub mod selection;
pub mod errors;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RegionKit;

pub use coordinate::{Bounds, Cell, CellBounds, CoordTransform, Point};
pub use errors::{RegionError, RegionResult};
pub use region::{Region, ShapeKind};
pub use selection::{Color, ColoredRegionOpList, Operation, RegionOp, RegionOpList, SelectionMask};
