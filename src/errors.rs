//! Custom error types for region selection

use std::fmt;
use std::io;

use crate::region::ShapeKind;
use crate::selection::Operation;

/// Region engine error types
#[derive(Debug)]
pub enum RegionError {
    /// I/O error
    IoError(io::Error),
    /// Wrong number of control points for a shape
    InvalidControlPoints {
        /// Shape being constructed
        kind: ShapeKind,
        /// Human readable slot requirement
        expected: String,
        /// Number of points supplied
        found: usize,
    },
    /// Shape name not recognised
    UnknownShape(String),
    /// Operation name not recognised
    UnknownOperation(String),
    /// An operation that needs a region was given none
    MissingRegion(Operation),
    /// Malformed textual input
    ParseError(String),
    /// Invalid configuration
    ConfigError(String),
    /// Unsupported output format
    UnsupportedFormat(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::IoError(e) => write!(f, "I/O error: {}", e),
            RegionError::InvalidControlPoints { kind, expected, found } =>
                write!(f, "{} needs {} control points, got {}", kind, expected, found),
            RegionError::UnknownShape(name) => write!(f, "Unknown shape: {}", name),
            RegionError::UnknownOperation(name) => write!(f, "Unknown operation: {}", name),
            RegionError::MissingRegion(op) => write!(f, "Operation {} requires a region", op),
            RegionError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RegionError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RegionError::UnsupportedFormat(fmt_name) => write!(f, "Unsupported output format: {}", fmt_name),
            RegionError::GenericError(msg) => write!(f, "Region error: {}", msg),
        }
    }
}

impl std::error::Error for RegionError {}

impl From<io::Error> for RegionError {
    fn from(error: io::Error) -> Self {
        RegionError::IoError(error)
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

impl From<String> for RegionError {
    fn from(msg: String) -> Self {
        RegionError::GenericError(msg)
    }
}
