//! Wedge (elliptical sector) region
//!
//! A wedge is the part of an ellipse swept between two arc points. The
//! angular test works per quadrant around the center: quadrants fully
//! covered by the sweep are accepted outright, and only the quadrants
//! holding the start and end arc points compare slopes. Within a single
//! quadrant the slope `dy/dx` grows monotonically with the angle, so the
//! comparison needs no trigonometry.
//!
//! Quadrants follow the mathematical orientation in world space:
//! 1 is `dx > 0, dy > 0`, 2 is `dx < 0, dy > 0`, 3 is `dx < 0, dy < 0`
//! and 4 is `dx > 0, dy < 0`. A positive span sweeps from quadrant 1
//! towards quadrant 2.
//!
//! A sweep of zero width (zero span, or both arc points in the same
//! direction) has no interior. It collapses onto the ray from the center
//! through the start arc point and selects the cells that ray crosses.

use crate::coordinate::{Bounds, Cell, CoordTransform, Point};

use super::line::LineRegion;
use super::rasterize::{axis_term, discrete_bounds, rasterize_interior};

/// Offset applied to arc points lying exactly on an axis
const AXIS_NUDGE: f64 = 0.01;

/// Elliptical sector between two arc points
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeRegion {
    /// Apex of the wedge
    pub center: Point,
    /// Arc point where the sweep starts
    pub arc_start: Point,
    /// Arc point where the sweep ends
    pub arc_end: Point,
    /// Outer ellipse top-left corner
    pub outer_top_left: Point,
    /// Outer ellipse bottom-right corner
    pub outer_bottom_right: Point,
    /// Start angle in degrees
    pub start_angle: f64,
    /// Signed sweep in degrees; negative sweeps clockwise
    pub arc_span: f64,
}

/// One of the four half-axes separating quadrants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    PosX,
    PosY,
    NegX,
    NegY,
}

impl Axis {
    /// Direction of a point lying exactly on an axis
    fn of(dx: f64, dy: f64) -> Option<Axis> {
        match (dx == 0.0, dy == 0.0) {
            (true, true) | (false, false) => None,
            (false, true) => Some(if dx > 0.0 { Axis::PosX } else { Axis::NegX }),
            (true, false) => Some(if dy > 0.0 { Axis::PosY } else { Axis::NegY }),
        }
    }

    /// The quadrant entered when crossing this axis counter-clockwise
    fn quadrant_after(&self) -> u8 {
        match self {
            Axis::PosX => 1,
            Axis::PosY => 2,
            Axis::NegX => 3,
            Axis::NegY => 4,
        }
    }
}

fn quadrant(dx: f64, dy: f64) -> u8 {
    match (dx > 0.0, dy > 0.0) {
        (true, true) => 1,
        (false, true) => 2,
        (false, false) => 3,
        (true, false) => 4,
    }
}

/// Drop trigonometric noise so axis-aligned angles land exactly on the axis
fn snap(value: f64) -> f64 {
    if value.abs() < 1e-12 { 0.0 } else { value }
}

/// Sweep resolved into quadrants and boundary slopes
#[derive(Debug, Clone)]
struct Sweep {
    full: bool,
    start_quadrant: u8,
    end_quadrant: u8,
    start_slope: f64,
    end_slope: f64,
    /// Number of axis crossings from start to end (0..=4)
    crossings: u8,
    start_axis: Option<Axis>,
    end_axis: Option<Axis>,
}

impl Sweep {
    fn quadrant_at(&self, step: u8) -> u8 {
        (self.start_quadrant - 1 + step) % 4 + 1
    }

    /// Whether a quadrant lies strictly between the start and end quadrants
    fn covers_fully(&self, q: u8) -> bool {
        (1..self.crossings).any(|step| self.quadrant_at(step) == q)
    }

    fn crosses(&self, axis: Axis) -> bool {
        let after = axis.quadrant_after();
        (1..=self.crossings).any(|step| self.quadrant_at(step) == after)
    }

    fn contains(&self, dx: f64, dy: f64) -> bool {
        if self.full || (dx == 0.0 && dy == 0.0) {
            return true;
        }

        if let Some(axis) = Axis::of(dx, dy) {
            return self.crosses(axis) || self.start_axis == Some(axis) || self.end_axis == Some(axis);
        }

        let q = quadrant(dx, dy);
        let slope = dy / dx;

        match self.crossings {
            0 => q == self.start_quadrant && slope >= self.start_slope && slope <= self.end_slope,
            4 if q == self.start_quadrant => slope >= self.start_slope || slope <= self.end_slope,
            _ if q == self.start_quadrant => slope >= self.start_slope,
            _ if q == self.end_quadrant => slope <= self.end_slope,
            _ => self.covers_fully(q),
        }
    }
}

impl WedgeRegion {
    /// Create a wedge from explicit arc points and sweep angles
    pub fn new(
        center: Point,
        arc_start: Point,
        arc_end: Point,
        outer_top_left: Point,
        outer_bottom_right: Point,
        start_angle: f64,
        arc_span: f64,
    ) -> Self {
        WedgeRegion {
            center,
            arc_start,
            arc_end,
            outer_top_left,
            outer_bottom_right,
            start_angle,
            arc_span,
        }
    }

    /// Create a wedge whose arc points sit on the outer ellipse at the given angles
    pub fn from_angles(
        center: Point,
        outer_top_left: Point,
        outer_bottom_right: Point,
        start_angle: f64,
        arc_span: f64,
    ) -> Self {
        let (rx, ry) = Self::semi_axes(&center, &outer_top_left);

        WedgeRegion::new(
            center,
            Self::on_arc(&center, rx, ry, start_angle),
            Self::on_arc(&center, rx, ry, start_angle + arc_span),
            outer_top_left,
            outer_bottom_right,
            start_angle,
            arc_span,
        )
    }

    fn semi_axes(center: &Point, outer_top_left: &Point) -> (f64, f64) {
        ((center.x - outer_top_left.x).abs(), (center.y - outer_top_left.y).abs())
    }

    fn on_arc(center: &Point, rx: f64, ry: f64, degrees: f64) -> Point {
        let theta = degrees.to_radians();
        Point::new(center.x + rx * snap(theta.cos()), center.y + ry * snap(theta.sin()))
    }

    /// Control points as `[center, arc_start, arc_end, outer_tl, outer_br, (start, span)]`
    pub fn control_points(&self) -> Vec<Point> {
        vec![
            self.center,
            self.arc_start,
            self.arc_end,
            self.outer_top_left,
            self.outer_bottom_right,
            Point::new(self.start_angle, self.arc_span),
        ]
    }

    /// World-space bounding box of the outer ellipse
    pub fn bounds_wc(&self) -> Bounds {
        Bounds::new(self.outer_top_left, self.outer_bottom_right)
    }

    /// The same sweep rotated by 180 degrees about the center
    ///
    /// Arc points are mirrored through the center and clamped back into
    /// the outer bounding box.
    pub fn opposite(&self) -> WedgeRegion {
        let outer = self.bounds_wc();
        WedgeRegion::new(
            self.center,
            outer.clamp(&self.arc_start.mirrored_through(&self.center)),
            outer.clamp(&self.arc_end.mirrored_through(&self.center)),
            self.outer_top_left,
            self.outer_bottom_right,
            (self.start_angle + 180.0) % 360.0,
            self.arc_span,
        )
    }

    /// Direction from the center to an arc point, falling back to the angle
    /// when the point coincides with the center
    fn direction(&self, arc_point: &Point, degrees: f64) -> (f64, f64) {
        let (dx, dy) = (arc_point.x - self.center.x, arc_point.y - self.center.y);
        if dx == 0.0 && dy == 0.0 {
            let theta = degrees.to_radians();
            return (snap(theta.cos()), snap(theta.sin()));
        }
        (dx, dy)
    }

    /// Push an on-axis direction off the axis, counter-clockwise when `ccw`
    fn nudge(dx: f64, dy: f64, ccw: bool) -> (f64, f64) {
        let sign = if ccw { 1.0 } else { -1.0 };
        if dy == 0.0 {
            (dx, sign * AXIS_NUDGE * dx.signum())
        } else if dx == 0.0 {
            (-sign * AXIS_NUDGE * dy.signum(), dy)
        } else {
            (dx, dy)
        }
    }

    /// Whether the sweep has zero width and collapses onto a ray
    pub fn is_ray(&self) -> bool {
        if self.arc_span.abs() >= 360.0 {
            return false;
        }
        if self.arc_span == 0.0 {
            return true;
        }

        let start = self.direction(&self.arc_start, self.start_angle);
        let end = self.direction(&self.arc_end, self.start_angle + self.arc_span);
        let cross = start.0 * end.1 - start.1 * end.0;
        let dot = start.0 * end.0 + start.1 * end.1;
        cross == 0.0 && dot > 0.0
    }

    /// The ray of a zero-width sweep, from the center to the outer ellipse
    fn ray(&self) -> LineRegion {
        let end = if self.arc_start != self.center {
            self.arc_start
        } else {
            let (rx, ry) = Self::semi_axes(&self.center, &self.outer_top_left);
            Self::on_arc(&self.center, rx, ry, self.start_angle)
        };
        LineRegion::new(self.center, end)
    }

    fn sweep(&self) -> Sweep {
        let mut start = self.direction(&self.arc_start, self.start_angle);
        let mut end = self.direction(&self.arc_end, self.start_angle + self.arc_span);

        // Clockwise sweeps are the counter-clockwise sweep from end to start
        if self.arc_span < 0.0 {
            std::mem::swap(&mut start, &mut end);
        }

        let start_axis = Axis::of(start.0, start.1);
        let end_axis = Axis::of(end.0, end.1);
        let start = Self::nudge(start.0, start.1, true);
        let end = Self::nudge(end.0, end.1, false);

        let start_quadrant = quadrant(start.0, start.1);
        let end_quadrant = quadrant(end.0, end.1);

        let mut crossings = (end_quadrant + 4 - start_quadrant) % 4;
        if crossings == 0 && self.arc_span.abs() > 180.0 {
            crossings = 4;
        }

        Sweep {
            full: self.arc_span.abs() >= 360.0,
            start_quadrant,
            end_quadrant,
            start_slope: start.1 / start.0,
            end_slope: end.1 / end.0,
            crossings,
            start_axis,
            end_axis,
        }
    }

    fn contains_with(&self, sweep: &Sweep, world: &Point) -> bool {
        let (rx, ry) = Self::semi_axes(&self.center, &self.outer_top_left);
        let (dx, dy) = (world.x - self.center.x, world.y - self.center.y);

        axis_term(dx, rx) + axis_term(dy, ry) <= 1.0 && sweep.contains(dx, dy)
    }

    /// Test whether a world point lies inside the wedge
    ///
    /// Always false for a zero-width sweep, which has no interior.
    pub fn is_inside(&self, world: &Point) -> bool {
        !self.is_ray() && self.contains_with(&self.sweep(), world)
    }

    /// Cells whose centers fall inside the wedge, or the cells crossed by
    /// the ray of a zero-width sweep
    pub fn selected_cells(&self, transform: &CoordTransform) -> Vec<Cell> {
        if self.is_ray() {
            return self.ray().selected_cells(transform);
        }

        let sweep = self.sweep();
        rasterize_interior(discrete_bounds(&self.bounds_wc(), transform), transform, |p| {
            self.contains_with(&sweep, p)
        })
    }
}
