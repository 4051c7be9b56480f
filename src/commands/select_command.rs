//! Selection evaluation command
//!
//! Evaluates the `--region` operations in order against the configured
//! grid and writes the selected cells in the requested format.

use clap::ArgMatches;
use log::info;

use crate::api::RegionKit;
use crate::commands::command_traits::Command;
use crate::config::RegionKitConfig;
use crate::coordinate::CoordTransform;
use crate::errors::RegionResult;
use crate::selection::RegionOp;
use crate::utils::output_utils::{self, OutputFormat, SelectionOutput};

use super::{region_ops_from_args, transform_from_args};

/// Command for evaluating a compound selection
pub struct SelectCommand<'a> {
    /// Transform the regions are evaluated against
    transform: CoordTransform,
    /// Operations in application order
    ops: Vec<RegionOp>,
    /// Output format
    format: OutputFormat,
    /// Output path; stdout when absent
    output: Option<String>,
    /// Loaded configuration
    config: &'a RegionKitConfig,
}

impl<'a> SelectCommand<'a> {
    /// Create a new select command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the configuration file
    ///
    /// # Returns
    /// A new SelectCommand instance or an error
    pub fn new(args: &ArgMatches, config: &'a RegionKitConfig) -> RegionResult<Self> {
        let transform = transform_from_args(args, config)?;
        let ops = region_ops_from_args(args)?;
        info!("Parsed {} region operations", ops.len());

        let format = match args.get_one::<String>("format") {
            Some(format_str) => format_str.parse()?,
            None => config.format,
        };

        let output = args.get_one::<String>("output").cloned().or_else(|| config.output.clone());
        info!("Output: {} to {}", format, output.as_deref().unwrap_or("stdout"));

        Ok(SelectCommand {
            transform,
            ops,
            format,
            output,
            config,
        })
    }
}

impl<'a> Command for SelectCommand<'a> {
    fn execute(&self) -> RegionResult<()> {
        let mut kit = RegionKit::new(self.transform);
        kit.set_display(self.config.color, self.config.opacity);
        for op in &self.ops {
            kit.add(op.operation(), op.region().cloned())?;
        }

        let mask = kit.mask();
        let cells = mask.selected_cells();
        info!("Selected {} of {} cells", cells.len(), mask.cols() as u64 * mask.rows() as u64);

        let output = SelectionOutput {
            mask: &mask,
            cells: &cells,
            color: kit.selection().color(),
            opacity: kit.selection().opacity(),
        };
        output_utils::write_selection(&output, self.format, self.output.as_deref())
    }
}
