//! Parsing helpers for command-line region definitions
//!
//! A region operation is written as `OP:SHAPE:x,y;x,y;...`, for example
//! `union:box:0,0;10,10` or `subtract:annulus:5,5;4,4;6,6;2,2;8,8`.
//! The bare word `complement` inverts the selection.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::Point;
use crate::errors::{RegionError, RegionResult};
use crate::region::{Region, ShapeKind};
use crate::selection::{Operation, RegionOp};

lazy_static! {
    static ref REGION_OP_RE: Regex = Regex::new(
        r"^\s*(?P<op>[A-Za-z_-]+)\s*(?::\s*(?P<shape>[A-Za-z_-]+)\s*:\s*(?P<points>[^:]+?))?\s*$"
    ).expect("region operation pattern is valid");

    static ref GRID_RE: Regex = Regex::new(r"^\s*(?P<cols>\d+)\s*[xX,]\s*(?P<rows>\d+)\s*$")
        .expect("grid pattern is valid");
}

/// Parse a `;`-separated list of `x,y` points
pub fn parse_point_list(points_str: &str) -> RegionResult<Vec<Point>> {
    points_str
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(|part| Point::from_string(part).map_err(RegionError::ParseError))
        .collect()
}

/// Parse a single region operation definition
pub fn parse_region_op(op_str: &str) -> RegionResult<RegionOp> {
    let caps = REGION_OP_RE.captures(op_str)
        .ok_or_else(|| RegionError::ParseError(format!("Malformed region operation '{}'", op_str)))?;

    let operation: Operation = caps["op"].parse()?;

    let region = match (caps.name("shape"), caps.name("points")) {
        (Some(shape), Some(points)) => {
            let kind: ShapeKind = shape.as_str().parse()?;
            let points = parse_point_list(points.as_str())?;
            Some(Region::from_control_points(kind, &points)?)
        }
        _ => None,
    };

    debug!("Parsed '{}' as {} {:?}", op_str, operation, region.as_ref().map(|r| r.kind()));
    RegionOp::new(operation, region)
}

/// Parse a grid size written as `COLSxROWS`
pub fn parse_grid(grid_str: &str) -> RegionResult<(u32, u32)> {
    let caps = GRID_RE.captures(grid_str)
        .ok_or_else(|| RegionError::ParseError(format!("Grid must look like COLSxROWS, got '{}'", grid_str)))?;

    let cols = caps["cols"].parse::<u32>()
        .map_err(|_| RegionError::ParseError(format!("Invalid column count '{}'", &caps["cols"])))?;
    let rows = caps["rows"].parse::<u32>()
        .map_err(|_| RegionError::ParseError(format!("Invalid row count '{}'", &caps["rows"])))?;

    if cols == 0 || rows == 0 {
        return Err(RegionError::ParseError("Grid dimensions must be positive".to_string()));
    }

    Ok((cols, rows))
}
