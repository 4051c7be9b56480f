//! Utility modules for common functionality
//!
//! This module provides logging, argument parsing and output helpers
//! used by the command-line front end.

pub mod logger;
pub mod output_utils;
pub mod parse_utils;
