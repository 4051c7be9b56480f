//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application
//! using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod select_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use select_command::SelectCommand;

use clap::ArgMatches;
use log::debug;

use crate::config::RegionKitConfig;
use crate::coordinate::{Bounds, CoordTransform};
use crate::errors::{RegionError, RegionResult};
use crate::selection::RegionOp;
use crate::utils::parse_utils;

/// Factory for creating command instances based on CLI arguments
pub struct RegionKitCommandFactory;

impl RegionKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RegionKitCommandFactory
    }
}

impl Default for RegionKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RegionKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a RegionKitConfig) -> RegionResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args, config)?))
        } else {
            Ok(Box::new(SelectCommand::new(args, config)?))
        }
    }
}

/// Resolve the transform from `--world` and `--grid`, falling back to the config
pub(crate) fn transform_from_args(args: &ArgMatches, config: &RegionKitConfig) -> RegionResult<CoordTransform> {
    let world = match args.get_one::<String>("world") {
        Some(world_str) => Some(Bounds::from_string(world_str).map_err(RegionError::ParseError)?),
        None => config.world,
    };

    let (cols, rows) = match args.get_one::<String>("grid") {
        Some(grid_str) => parse_utils::parse_grid(grid_str)?,
        None => config.grid,
    };

    debug!("Transform: world {:?}, grid {}x{}", world, cols, rows);
    Ok(match world {
        Some(world) => CoordTransform::onto_grid(world, cols, rows),
        None => CoordTransform::identity(cols, rows),
    })
}

/// Parse every `--region` argument in the order given
pub(crate) fn region_ops_from_args(args: &ArgMatches) -> RegionResult<Vec<RegionOp>> {
    let ops = args.get_many::<String>("region")
        .map(|values| values.map(|v| parse_utils::parse_region_op(v)).collect::<RegionResult<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();

    if ops.is_empty() {
        return Err(RegionError::GenericError("At least one --region is required".to_string()));
    }

    Ok(ops)
}
