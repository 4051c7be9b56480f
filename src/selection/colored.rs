//! Operation list carrying display colour and opacity

use std::fmt;
use std::str::FromStr;

use crate::errors::RegionError;

use super::op_list::RegionOpList;

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a colour from channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::new(255, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = RegionError;

    /// Parse `#rrggbb` (the leading `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RegionError::ParseError(format!("Invalid colour '{}', expected #rrggbb", s)));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| RegionError::ParseError(format!("Invalid colour '{}', expected #rrggbb", s)))
        };

        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A `RegionOpList` with display metadata
///
/// Colour and opacity are carried for renderers and have no effect on
/// which cells are selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredRegionOpList {
    ops: RegionOpList,
    color: Color,
    opacity: f32,
}

impl ColoredRegionOpList {
    /// Wrap an operation list with a colour and opacity
    ///
    /// Opacity is clamped into `[0, 1]`.
    pub fn new(ops: RegionOpList, color: Color, opacity: f32) -> Self {
        let mut list = ColoredRegionOpList { ops, color, opacity: 1.0 };
        list.set_opacity(opacity);
        list
    }

    /// The wrapped operations
    pub fn ops(&self) -> &RegionOpList {
        &self.ops
    }

    /// The wrapped operations, mutably
    pub fn ops_mut(&mut self) -> &mut RegionOpList {
        &mut self.ops
    }

    /// Unwrap into the operation list
    pub fn into_ops(self) -> RegionOpList {
        self.ops
    }

    /// Display colour
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the display colour
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Display opacity in `[0, 1]`
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Replace the display opacity, clamped into `[0, 1]`
    ///
    /// # Panics
    /// Panics if `opacity` is NaN.
    pub fn set_opacity(&mut self, opacity: f32) {
        assert!(!opacity.is_nan(), "opacity must be a number");
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Default for ColoredRegionOpList {
    fn default() -> Self {
        ColoredRegionOpList::new(RegionOpList::new(), Color::default(), 0.5)
    }
}
