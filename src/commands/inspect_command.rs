//! Region inspection command
//!
//! Reports each parsed region without evaluating the selection: its
//! kind, world bounds, discrete bounds and the number of cells it covers
//! on its own.

use std::io::{self, Write};

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::config::RegionKitConfig;
use crate::coordinate::CoordTransform;
use crate::errors::RegionResult;
use crate::selection::RegionOp;

use super::{region_ops_from_args, transform_from_args};

/// Command for describing region operations
pub struct InspectCommand<'a> {
    /// Transform the regions are measured against
    transform: CoordTransform,
    /// Operations in application order
    ops: Vec<RegionOp>,
    /// Loaded configuration
    config: &'a RegionKitConfig,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    pub fn new(args: &ArgMatches, config: &'a RegionKitConfig) -> RegionResult<Self> {
        let transform = transform_from_args(args, config)?;
        let ops = region_ops_from_args(args)?;

        Ok(InspectCommand {
            transform,
            ops,
            config,
        })
    }

    /// Write the report for every operation
    pub fn write_report<W: Write>(&self, writer: &mut W) -> RegionResult<()> {
        let t = &self.transform;
        writeln!(writer, "Grid: {}x{} cells", t.n_cols(), t.n_rows())?;
        writeln!(writer, "Display: {} at opacity {}", self.config.color, self.config.opacity)?;

        for (index, op) in self.ops.iter().enumerate() {
            let Some(region) = op.region() else {
                writeln!(writer, "#{} {}", index, op.operation())?;
                continue;
            };

            let bounds = region.bounds_wc();
            writeln!(writer, "#{} {} {}", index, op.operation(), region.kind())?;
            writeln!(writer, "  World bounds: ({}, {}) - ({}, {})",
                     bounds.min_x(), bounds.min_y(), bounds.max_x(), bounds.max_y())?;
            match region.discrete_bounds(t) {
                Some(cells) => writeln!(writer, "  Discrete bounds: {}", cells)?,
                None => writeln!(writer, "  Discrete bounds: off grid")?,
            }
            writeln!(writer, "  Cells: {}", region.selected_cells(t).len())?;
        }

        Ok(())
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        info!("Inspecting {} region operations", self.ops.len());
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_report(&mut handle)
    }
}
