//! Renderable output geometry.
//!
//! Everything here is plain pixel-space data: the host draws it with whatever
//! line/text facility it has. Coordinates are pre-rounded to integer pixels
//! where the source geometry benefits from sharp one-pixel lines.

use serde::{Deserialize, Serialize};

use crate::core::geometry::Rect;
use crate::core::ticks::TickPlan;

/// Full-length tick mark size, pointing away from the plot area.
pub const MAJOR_TICK_LENGTH_PX: f64 = 10.0;

/// Minor tick marks are this fraction of the full tick length.
pub const MINOR_TICK_RATIO: f64 = 0.6;

/// One line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Where to draw one tick label. `x`/`y` is the label's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Renderable furniture for one axis, produced by a chart layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisFrame {
    /// Pixel rectangle reserved for this axis's ticks and labels.
    pub rect: Rect,
    /// The axis base line along the content-rect edge.
    pub axis_line: Option<LineSegment>,
    /// Gridlines across the content rect, one per major tick.
    pub major_lines: Vec<LineSegment>,
    /// Tick marks on the axis line: full length at majors and half-major
    /// marks, shortened elsewhere.
    pub tick_marks: Vec<LineSegment>,
    /// Label placements, already filtered for crowding.
    pub labels: Vec<LabelPlacement>,
    /// The tick plan the geometry above was derived from.
    pub plan: TickPlan,
}
