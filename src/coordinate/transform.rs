//! Mapping between world coordinates and array coordinates

use log::warn;

use super::bbox::Bounds;
use super::point::Point;

/// Rectangular mapping between a world rectangle and an array rectangle
///
/// `source` is the continuous world rectangle, `destination` the discrete
/// array rectangle (columns along x, rows along y). Corresponding corners
/// map onto each other, so either side may be flipped to express an
/// upside-down coordinate system.
///
/// Neither rectangle may be degenerate (zero width or height). This is a
/// caller precondition and is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordTransform {
    source: Bounds,
    destination: Bounds,
}

impl CoordTransform {
    /// Create a transform from world bounds to array bounds
    pub fn new(source: Bounds, destination: Bounds) -> Self {
        if source.width() == 0.0 || source.height() == 0.0 {
            warn!("Coordinate transform has a degenerate source rectangle: {:?}", source);
        }
        CoordTransform { source, destination }
    }

    /// Identity transform over a `cols` x `rows` grid
    pub fn identity(cols: u32, rows: u32) -> Self {
        let bounds = Bounds::from_coords(0.0, 0.0, cols as f64, rows as f64);
        CoordTransform::new(bounds, bounds)
    }

    /// Transform from world bounds onto a `cols` x `rows` grid
    pub fn onto_grid(source: Bounds, cols: u32, rows: u32) -> Self {
        CoordTransform::new(source, Bounds::from_coords(0.0, 0.0, cols as f64, rows as f64))
    }

    /// World-space rectangle
    pub fn source_bounds(&self) -> Bounds {
        self.source
    }

    /// Array-space rectangle
    pub fn destination_bounds(&self) -> Bounds {
        self.destination
    }

    /// Replace the world-space rectangle
    pub fn set_source_bounds(&mut self, source: Bounds) {
        self.source = source;
    }

    /// Replace the array-space rectangle
    pub fn set_destination_bounds(&mut self, destination: Bounds) {
        self.destination = destination;
    }

    /// Number of grid columns described by the destination bounds
    pub fn n_cols(&self) -> u32 {
        self.destination.width().round() as u32
    }

    /// Number of grid rows described by the destination bounds
    pub fn n_rows(&self) -> u32 {
        self.destination.height().round() as u32
    }

    /// Map a world point into array coordinates
    pub fn map_to_array(&self, p: &Point) -> Point {
        Point::new(
            Self::map_axis(p.x, self.source.p1.x, self.source.p2.x, self.destination.p1.x, self.destination.p2.x),
            Self::map_axis(p.y, self.source.p1.y, self.source.p2.y, self.destination.p1.y, self.destination.p2.y),
        )
    }

    /// Map an array point back into world coordinates
    pub fn map_to_world(&self, p: &Point) -> Point {
        Point::new(
            Self::map_axis(p.x, self.destination.p1.x, self.destination.p2.x, self.source.p1.x, self.source.p2.x),
            Self::map_axis(p.y, self.destination.p1.y, self.destination.p2.y, self.source.p1.y, self.source.p2.y),
        )
    }

    fn map_axis(value: f64, from1: f64, from2: f64, to1: f64, to2: f64) -> f64 {
        to1 + (value - from1) * (to2 - to1) / (from2 - from1)
    }
}
