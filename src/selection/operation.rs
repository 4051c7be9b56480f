//! Set operations and region/operation pairs

use std::fmt;
use std::str::FromStr;

use crate::errors::{RegionError, RegionResult};
use crate::region::Region;

/// Boolean operation applied to the accumulated selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add the region's cells
    Union,
    /// Keep only cells also in the region
    Intersect,
    /// Remove the region's cells
    IntersectComplement,
    /// Invert the accumulated selection; takes no region
    Complement,
}

impl Operation {
    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Union => "union",
            Operation::Intersect => "intersect",
            Operation::IntersectComplement => "intersect-complement",
            Operation::Complement => "complement",
        }
    }

    /// Whether the operation consumes a region
    pub fn takes_region(&self) -> bool {
        !matches!(self, Operation::Complement)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "union" | "add" | "or" => Ok(Operation::Union),
            "intersect" | "and" => Ok(Operation::Intersect),
            "intersect-complement" | "intersect_complement" | "subtract" | "minus" => Ok(Operation::IntersectComplement),
            "complement" | "not" | "invert" => Ok(Operation::Complement),
            other => Err(RegionError::UnknownOperation(other.to_string())),
        }
    }
}

/// One step of a compound selection
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOp {
    operation: Operation,
    region: Option<Region>,
}

impl RegionOp {
    /// Pair an operation with an optional region
    ///
    /// Every operation except `Complement` requires a region. A region
    /// passed along with `Complement` is dropped.
    pub fn new(operation: Operation, region: Option<Region>) -> RegionResult<Self> {
        match (operation.takes_region(), region) {
            (true, None) => Err(RegionError::MissingRegion(operation)),
            (true, Some(region)) => Ok(RegionOp { operation, region: Some(region) }),
            (false, _) => Ok(RegionOp::complement()),
        }
    }

    /// Add `region` to the selection
    pub fn union(region: impl Into<Region>) -> Self {
        RegionOp { operation: Operation::Union, region: Some(region.into()) }
    }

    /// Intersect the selection with `region`
    pub fn intersect(region: impl Into<Region>) -> Self {
        RegionOp { operation: Operation::Intersect, region: Some(region.into()) }
    }

    /// Remove `region` from the selection
    pub fn intersect_complement(region: impl Into<Region>) -> Self {
        RegionOp { operation: Operation::IntersectComplement, region: Some(region.into()) }
    }

    /// Invert the selection
    pub fn complement() -> Self {
        RegionOp { operation: Operation::Complement, region: None }
    }

    /// The operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The region, absent for `Complement`
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }
}
