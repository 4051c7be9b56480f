//! TOML configuration for the command-line front end
//!
//! ```toml
//! [transform]
//! world = [0.0, 0.0, 200.0, 100.0]
//! grid = [40, 20]
//!
//! [output]
//! format = "csv"
//! path = "selection.csv"
//!
//! [display]
//! color = "#00ff00"
//! opacity = 0.4
//!
//! [logging]
//! level = "debug"
//! file = "regionkit.log"
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::str::FromStr;

use log::LevelFilter;

use crate::coordinate::{Bounds, CoordTransform};
use crate::errors::{RegionError, RegionResult};
use crate::selection::Color;
use crate::utils::output_utils::OutputFormat;

/// Default grid edge length when nothing is configured
const DEFAULT_GRID: u32 = 100;

/// Settings read from a configuration file
#[derive(Debug, Clone, PartialEq)]
pub struct RegionKitConfig {
    /// World rectangle; defaults to the grid itself
    pub world: Option<Bounds>,
    /// Grid size as (columns, rows)
    pub grid: (u32, u32),
    /// Output format
    pub format: OutputFormat,
    /// Output path; stdout when absent
    pub output: Option<String>,
    /// Display colour
    pub color: Color,
    /// Display opacity
    pub opacity: f32,
    /// Log level
    pub log_level: LevelFilter,
    /// Log file; console logging when absent
    pub log_file: Option<String>,
}

impl Default for RegionKitConfig {
    fn default() -> Self {
        RegionKitConfig {
            world: None,
            grid: (DEFAULT_GRID, DEFAULT_GRID),
            format: OutputFormat::List,
            output: None,
            color: Color::default(),
            opacity: 0.5,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl FromStr for RegionKitConfig {
    type Err = RegionError;

    /// Parse configuration from a TOML string
    fn from_str(content: &str) -> RegionResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(RegionError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = RegionKitConfig::default();

        if let Some(transform) = toml_value.get("transform") {
            if let Some(world) = transform.get("world") {
                let values = Self::number_array(world, "transform.world", 4)?;
                config.world = Some(Bounds::from_coords(values[0], values[1], values[2], values[3]));
            }
            if let Some(grid) = transform.get("grid") {
                let values = Self::number_array(grid, "transform.grid", 2)?;
                if values.iter().any(|v| *v < 1.0 || v.fract() != 0.0) {
                    return Err(RegionError::ConfigError("transform.grid must hold two positive integers".to_string()));
                }
                config.grid = (values[0] as u32, values[1] as u32);
            }
        }

        if let Some(output) = toml_value.get("output") {
            if let Some(format) = Self::string_value(output, "format", "output.format")? {
                config.format = format.parse()?;
            }
            config.output = Self::string_value(output, "path", "output.path")?;
        }

        if let Some(display) = toml_value.get("display") {
            if let Some(color) = Self::string_value(display, "color", "display.color")? {
                config.color = color.parse()?;
            }
            if let Some(opacity) = display.get("opacity") {
                let opacity = Self::number(opacity, "display.opacity")?;
                if !(0.0..=1.0).contains(&opacity) {
                    return Err(RegionError::ConfigError(format!("display.opacity must be within 0..1, got {}", opacity)));
                }
                config.opacity = opacity as f32;
            }
        }

        if let Some(logging) = toml_value.get("logging") {
            if let Some(level) = Self::string_value(logging, "level", "logging.level")? {
                config.log_level = level.parse()
                    .map_err(|_| RegionError::ConfigError(format!("Unknown log level '{}'", level)))?;
            }
            config.log_file = Self::string_value(logging, "file", "logging.file")?;
        }

        Ok(config)
    }
}

impl RegionKitConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> RegionResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(RegionError::IoError(e)),
        };

        contents.parse()
    }

    /// Transform described by the configured world rectangle and grid
    pub fn transform(&self) -> CoordTransform {
        let (cols, rows) = self.grid;
        match self.world {
            Some(world) => CoordTransform::onto_grid(world, cols, rows),
            None => CoordTransform::identity(cols, rows),
        }
    }

    /// Helper to read a number that may be written as an integer or a float
    fn number(value: &toml::Value, key: &str) -> RegionResult<f64> {
        match value {
            toml::Value::Float(f) => Ok(*f),
            toml::Value::Integer(i) => Ok(*i as f64),
            _ => Err(RegionError::ConfigError(format!("{} must be a number", key))),
        }
    }

    fn number_array(value: &toml::Value, key: &str, len: usize) -> RegionResult<Vec<f64>> {
        let array = value.as_array()
            .ok_or_else(|| RegionError::ConfigError(format!("{} must be an array", key)))?;
        if array.len() != len {
            return Err(RegionError::ConfigError(format!("{} must have {} entries, got {}", key, len, array.len())));
        }
        array.iter().map(|v| Self::number(v, key)).collect()
    }

    fn string_value(table: &toml::Value, name: &str, key: &str) -> RegionResult<Option<String>> {
        match table.get(name) {
            None => Ok(None),
            Some(value) => value.as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| RegionError::ConfigError(format!("{} must be a string", key))),
        }
    }
}
