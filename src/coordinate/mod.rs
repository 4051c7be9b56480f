//! Coordinate handling for region selection
//!
//! This module provides the world/array point and rectangle types and
//! the transform that maps between the two spaces.

mod bbox;
mod cell;
mod point;
mod transform;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::Bounds;
pub use self::cell::{Cell, CellBounds};
pub use self::point::Point;
pub use self::transform::CoordTransform;
