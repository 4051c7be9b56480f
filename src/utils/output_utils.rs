//! Writers for evaluated selections
//!
//! Selected cells can be written as a plain list, CSV or JSON, and the
//! evaluated mask as a grayscale PNG (selected cells white).

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::str::FromStr;

use image::{GrayImage, Luma};
use log::info;

use crate::coordinate::Cell;
use crate::errors::{RegionError, RegionResult};
use crate::selection::{Color, SelectionMask};

/// Output format for a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `col,row` per line
    List,
    /// CSV with a `col,row` header
    Csv,
    /// JSON object with grid size, display metadata and cells
    Json,
    /// Grayscale mask image
    Png,
}

impl OutputFormat {
    /// Whether the format needs a file rather than stdout
    pub fn is_binary(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::List => "list",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Png => "png",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" | "txt" => Ok(OutputFormat::List),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "png" => Ok(OutputFormat::Png),
            other => Err(RegionError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Everything a writer may need about one evaluated selection
#[derive(Debug)]
pub struct SelectionOutput<'a> {
    /// Evaluated mask
    pub mask: &'a SelectionMask,
    /// Selected cells in row-major order
    pub cells: &'a [Cell],
    /// Display colour
    pub color: Color,
    /// Display opacity
    pub opacity: f32,
}

/// Write the selection to `path`, or to stdout when `path` is `None`
pub fn write_selection(output: &SelectionOutput<'_>, format: OutputFormat, path: Option<&str>) -> RegionResult<()> {
    if format.is_binary() {
        let path = path.ok_or_else(|| RegionError::GenericError(format!("{} output needs an output file", format)))?;
        return save_mask_png(output.mask, path);
    }

    match path {
        Some(path) => {
            info!("Writing {} selected cells to {} as {}", output.cells.len(), path, format);
            let mut writer = BufWriter::new(File::create(path)?);
            write_text(output, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_text(output, format, &mut writer)?;
        }
    }

    Ok(())
}

/// Write a text format to any writer
pub fn write_text<W: Write>(output: &SelectionOutput<'_>, format: OutputFormat, writer: &mut W) -> RegionResult<()> {
    match format {
        OutputFormat::List => {
            for cell in output.cells {
                writeln!(writer, "{}", cell)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(writer, "col,row")?;
            for cell in output.cells {
                writeln!(writer, "{},{}", cell.col, cell.row)?;
            }
        }
        OutputFormat::Json => write_json(output, writer)?,
        OutputFormat::Png => {
            return Err(RegionError::UnsupportedFormat("png is not a text format".to_string()));
        }
    }
    Ok(())
}

fn write_json<W: Write>(output: &SelectionOutput<'_>, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"cols\": {},", output.mask.cols())?;
    writeln!(writer, "  \"rows\": {},", output.mask.rows())?;
    writeln!(writer, "  \"color\": \"{}\",", output.color)?;
    writeln!(writer, "  \"opacity\": {},", output.opacity)?;
    write!(writer, "  \"cells\": [")?;

    for (i, cell) in output.cells.iter().enumerate() {
        if i > 0 {
            write!(writer, ", ")?;
        }
        write!(writer, "[{}, {}]", cell.col, cell.row)?;
    }

    writeln!(writer, "]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Save the mask as an 8-bit grayscale PNG
pub fn save_mask_png(mask: &SelectionMask, path: &str) -> RegionResult<()> {
    info!("Saving {}x{} selection mask to {}", mask.cols(), mask.rows(), path);

    let mut image = GrayImage::new(mask.cols(), mask.rows());
    for cell in mask.selected_cells() {
        image.put_pixel(cell.col, cell.row, Luma([255]));
    }

    match image.save(path) {
        Ok(_) => Ok(()),
        Err(e) => Err(RegionError::GenericError(format!("Failed to save mask image: {}", e)))
    }
}
