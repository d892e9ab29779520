use serde::{Deserialize, Serialize};

/// Chart edge an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisPosition {
    #[default]
    Bottom,
    Top,
    Right,
    Left,
}

impl AxisPosition {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }
}

/// Whether increasing value runs along the axis's natural direction.
///
/// Forward means left-to-right on horizontal axes and bottom-to-top on
/// vertical ones. Reversed flips that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisDirection {
    #[default]
    Forward,
    Reversed,
}

/// Visible value range of one chart axis.
///
/// Created once per chart axis and mutated continuously by zoom and pan.
/// Range setters mark the axis dirty; the layout pass clears the flag after
/// recomputing the furniture geometry that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    min: f64,
    max: f64,
    position: AxisPosition,
    direction: AxisDirection,
    #[serde(default)]
    dirty: bool,
}

impl Axis {
    #[must_use]
    pub fn new(position: AxisPosition) -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            position,
            direction: AxisDirection::Forward,
            dirty: true,
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.set_range(min, max);
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: AxisDirection) -> Self {
        self.set_direction(direction);
        self
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.position.is_horizontal()
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.direction == AxisDirection::Reversed
    }

    /// Whether increasing value maps to decreasing pixel coordinate.
    ///
    /// Pixel Y grows downward, so a vertical Forward axis (values running
    /// bottom-to-top) is reversed in pixel space while a vertical Reversed
    /// axis is not.
    #[must_use]
    pub fn is_pixel_reversed(&self) -> bool {
        self.is_horizontal() == self.is_reversed()
    }

    pub fn set_min(&mut self, min: f64) {
        if self.min != min {
            self.min = min;
            self.dirty = true;
        }
    }

    pub fn set_max(&mut self, max: f64) {
        if self.max != max {
            self.max = max;
            self.dirty = true;
        }
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.set_min(min);
        self.set_max(max);
    }

    pub fn set_position(&mut self, position: AxisPosition) {
        if self.position != position {
            self.position = position;
            self.dirty = true;
        }
    }

    pub fn set_direction(&mut self, direction: AxisDirection) {
        if self.direction != direction {
            self.direction = direction;
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Rescales the range around `anchor` so that the anchor value keeps its
    /// pixel position. `factor > 1` zooms in, `factor < 1` zooms out.
    ///
    /// Returns `false` without touching the range for a non-finite or
    /// non-positive factor or a non-finite anchor (degenerate gesture).
    pub fn zoom_by_factor(&mut self, factor: f64, anchor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
            return false;
        }

        let min = anchor + (self.min - anchor) / factor;
        let max = anchor + (self.max - anchor) / factor;
        self.set_range(min, max);
        true
    }

    /// Shifts the range by a fraction of its span, measured in content-rect
    /// pixels. The sign flips on pixel-reversed axes so a given pointer delta
    /// always moves the content the same way on screen.
    pub fn pan_by(&mut self, fraction: f64) -> bool {
        if !fraction.is_finite() {
            return false;
        }

        let mut delta = fraction * self.span();
        if self.is_pixel_reversed() {
            delta = -delta;
        }
        self.set_range(self.min + delta, self.max + delta);
        true
    }
}
