//! Shape kind names and control-point slot counts

use std::fmt;
use std::str::FromStr;

use crate::errors::RegionError;

/// The closed set of shape families a `Region` can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Axis-aligned rectangle
    Box,
    /// Filled ellipse
    Ellipse,
    /// Ring between two nested ellipses
    Annular,
    /// Angular slice of an ellipse
    Wedge,
    /// Wedge plus its point reflection through the center
    DoubleWedge,
    /// Straight line between two points
    Line,
    /// Any number of independent points
    Point,
    /// Cell rectangle given directly in array space
    TableBlock,
}

impl ShapeKind {
    /// All kinds, in declaration order
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Box,
        ShapeKind::Ellipse,
        ShapeKind::Annular,
        ShapeKind::Wedge,
        ShapeKind::DoubleWedge,
        ShapeKind::Line,
        ShapeKind::Point,
        ShapeKind::TableBlock,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Annular => "annulus",
            ShapeKind::Wedge => "wedge",
            ShapeKind::DoubleWedge => "double-wedge",
            ShapeKind::Line => "line",
            ShapeKind::Point => "point",
            ShapeKind::TableBlock => "table",
        }
    }

    /// Exact number of control points, or `None` when any non-zero count is accepted
    pub fn slot_count(&self) -> Option<usize> {
        match self {
            ShapeKind::Box => Some(2),
            ShapeKind::Ellipse => Some(3),
            ShapeKind::Annular => Some(5),
            ShapeKind::Wedge | ShapeKind::DoubleWedge => Some(6),
            ShapeKind::Line => Some(2),
            ShapeKind::Point => None,
            ShapeKind::TableBlock => Some(2),
        }
    }

    /// Whether the shape has an interior sampled by the shared rasterizer
    pub fn has_interior(&self) -> bool {
        !matches!(self, ShapeKind::Line | ShapeKind::Point | ShapeKind::TableBlock)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "box" | "rect" | "rectangle" => Ok(ShapeKind::Box),
            "ellipse" | "circle" => Ok(ShapeKind::Ellipse),
            "annulus" | "annular" | "ring" => Ok(ShapeKind::Annular),
            "wedge" => Ok(ShapeKind::Wedge),
            "double-wedge" | "doublewedge" | "double_wedge" => Ok(ShapeKind::DoubleWedge),
            "line" => Ok(ShapeKind::Line),
            "point" | "points" => Ok(ShapeKind::Point),
            "table" | "table-block" | "tableblock" => Ok(ShapeKind::TableBlock),
            other => Err(RegionError::UnknownShape(other.to_string())),
        }
    }
}
