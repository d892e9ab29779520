//! Pointer-gesture handling: rectangular zoom with undo history, continuous
//! pan, wheel zoom and pinch zoom.
//!
//! All operations are synchronous and driven by discrete input events. The
//! drag machinery is a two-state machine: Idle until a press, Dragging until
//! the release that applies the accumulated zoom or pan. Degenerate gestures
//! (zero-area rectangles, non-positive factors, collapsed pinch reference
//! distances) are silently ignored and reported as `false`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::axis::Axis;
use crate::core::geometry::{Point, Rect};
use crate::core::transform::ViewportTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragMode {
    /// Drag out a selection rectangle, zoom into it on release.
    #[default]
    Select,
    /// Shift the panned axes with the pointer.
    Pan,
}

/// Converts pointer gestures into new axis ranges and keeps the zoom undo
/// stack. Axes are addressed by their index in the iteration order the caller
/// passes in, which must stay stable across a drag.
#[derive(Debug, Clone, Default)]
pub struct ZoomPanController {
    phase: GesturePhase,
    drag_mode: DragMode,
    press: Point,
    cursor: Point,
    pan_targets: SmallVec<[usize; 4]>,
    pinch_points: Option<[Point; 2]>,
    history: Vec<Rect>,
}

impl ZoomPanController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// The selection rectangle spanned so far, while a select drag is active.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        if self.phase == GesturePhase::Dragging && self.drag_mode == DragMode::Select {
            Some(
                Rect::new(
                    self.press.x,
                    self.press.y,
                    self.cursor.x - self.press.x,
                    self.cursor.y - self.press.y,
                )
                .normalized(),
            )
        } else {
            None
        }
    }

    /// Starts a drag. For pan drags, `pan_targets` selects the axes that
    /// follow the pointer (all axes when the press lands in the content rect,
    /// only the hit axis when it lands on axis furniture).
    pub fn begin_drag(
        &mut self,
        mode: DragMode,
        pos: Point,
        pan_targets: impl IntoIterator<Item = usize>,
    ) {
        self.phase = GesturePhase::Dragging;
        self.drag_mode = mode;
        self.press = pos;
        self.cursor = pos;
        self.pan_targets = pan_targets.into_iter().collect();
    }

    /// Advances an active drag. Pan drags apply their displacement
    /// incrementally; select drags just grow the selection rectangle.
    pub fn drag_to<'a, I>(&mut self, pos: Point, axes: I, content_rect: Rect)
    where
        I: IntoIterator<Item = &'a mut Axis>,
    {
        if self.phase != GesturePhase::Dragging {
            return;
        }
        self.cursor = pos;

        if self.drag_mode != DragMode::Pan {
            return;
        }
        if content_rect.is_empty() {
            return;
        }

        let dx = (pos.x - self.press.x) / content_rect.width;
        let dy = (pos.y - self.press.y) / content_rect.height;
        for (index, axis) in axes.into_iter().enumerate() {
            if !self.pan_targets.contains(&index) {
                continue;
            }
            let fraction = if axis.is_horizontal() { dx } else { dy };
            // Content follows the pointer, so the range shifts the other way.
            axis.pan_by(-fraction);
        }
        self.press = pos;
    }

    /// Ends a drag, applying the accumulated gesture. Returns whether any
    /// axis range changed.
    pub fn end_drag<'a, I>(&mut self, pos: Point, axes: I, content_rect: Rect) -> bool
    where
        I: IntoIterator<Item = &'a mut Axis>,
    {
        if self.phase != GesturePhase::Dragging {
            return false;
        }

        match self.drag_mode {
            DragMode::Select => {
                self.cursor = pos;
                let rect = self.selection_rect().unwrap_or_default();
                self.phase = GesturePhase::Idle;
                self.zoom_to_rect(axes, rect, content_rect)
            }
            DragMode::Pan => {
                self.drag_to(pos, axes, content_rect);
                self.phase = GesturePhase::Idle;
                self.pan_targets.clear();
                true
            }
        }
    }

    /// Zooms every axis into the data region covered by `screen_rect` and
    /// pushes the screen-space rectangle onto the undo stack.
    ///
    /// The rectangle is normalized first; a zero-area rectangle or an empty
    /// content rect is a no-op.
    pub fn zoom_to_rect<'a, I>(&mut self, axes: I, screen_rect: Rect, content_rect: Rect) -> bool
    where
        I: IntoIterator<Item = &'a mut Axis>,
    {
        let rect = screen_rect.normalized();
        if rect.is_empty() || content_rect.is_empty() {
            trace!("ignoring zero-area zoom rectangle");
            return false;
        }

        for axis in axes {
            let Some((f_lo, f_hi)) = edge_fractions(rect, content_rect, axis) else {
                continue;
            };
            let min = axis.min();
            let span = axis.span();
            // f_lo < f_hi after normalization, so min stays below max.
            axis.set_range(min + span * f_lo, min + span * f_hi);
        }

        self.history.push(rect);
        true
    }

    /// Pops the most recent zoom rectangle and applies its algebraic inverse
    /// against the *current* content rect. Returns `false` on an empty stack.
    pub fn undo_zoom<'a, I>(&mut self, axes: I, content_rect: Rect) -> bool
    where
        I: IntoIterator<Item = &'a mut Axis>,
    {
        let Some(rect) = self.history.pop() else {
            trace!("zoom history is empty");
            return false;
        };
        if content_rect.is_empty() {
            return false;
        }

        for axis in axes {
            let Some((f_lo, f_hi)) = edge_fractions(rect, content_rect, axis) else {
                continue;
            };
            let window = f_hi - f_lo;
            if !window.is_normal() || window <= 0.0 {
                continue;
            }
            let span = axis.span() / window;
            let min = axis.min() - span * f_lo;
            axis.set_range(min, min + span);
        }
        true
    }

    /// Wheel zoom: rescales every axis around the data value under `pos`.
    pub fn zoom_about<'a, I>(
        &self,
        axes: I,
        content_rect: Rect,
        pos: Point,
        factor: f64,
    ) -> bool
    where
        I: IntoIterator<Item = &'a mut Axis>,
    {
        if !factor.is_finite() || factor <= 0.0 {
            trace!(factor, "ignoring degenerate zoom factor");
            return false;
        }
        if content_rect.is_empty() {
            return false;
        }

        let mut changed = false;
        for axis in axes {
            changed |= zoom_axis_about(axis, content_rect, pos, factor);
        }
        changed
    }

    /// Starts a two-finger pinch from the given touch points.
    pub fn begin_pinch(&mut self, points: [Point; 2]) {
        self.pinch_points = Some(points);
    }

    /// Advances a pinch: each orientation zooms by the ratio of the current
    /// finger distance to the reference distance, anchored at the pinch
    /// center. An orientation whose reference distance collapsed to
    /// (near) zero is skipped.
    pub fn pinch_to<'a, I>(&mut self, points: [Point; 2], axes: I, content_rect: Rect) -> bool
    where
        I: IntoIterator<Item = &'a mut Axis>,
    {
        let Some(reference) = self.pinch_points else {
            return false;
        };
        if content_rect.is_empty() {
            return false;
        }

        let factor_x = (points[0].x - points[1].x).abs() / (reference[0].x - reference[1].x).abs();
        let factor_y = (points[0].y - points[1].y).abs() / (reference[0].y - reference[1].y).abs();
        let center = Point::new(
            (points[0].x + points[1].x) / 2.0,
            (points[0].y + points[1].y) / 2.0,
        );

        let mut changed = false;
        for axis in axes {
            let factor = if axis.is_horizontal() {
                factor_x
            } else {
                factor_y
            };
            if !factor.is_normal() || factor <= 0.0 {
                continue;
            }
            changed |= zoom_axis_about(axis, content_rect, center, factor);
        }

        self.pinch_points = Some(points);
        changed
    }

    pub fn end_pinch(&mut self) {
        self.pinch_points = None;
    }
}

/// Rescales one axis around the data value at a pixel position.
fn zoom_axis_about(axis: &mut Axis, content_rect: Rect, pos: Point, factor: f64) -> bool {
    let (start, length, coord) = if axis.is_horizontal() {
        (content_rect.x, content_rect.width, pos.x)
    } else {
        (content_rect.y, content_rect.height, pos.y)
    };
    let Ok(transform) = ViewportTransform::for_axis(axis, start, length) else {
        return false;
    };
    let Ok(anchor) = transform.pixel_to_value(coord) else {
        return false;
    };
    axis.zoom_by_factor(factor, anchor)
}

/// Fractions of the content-rect run covered by the rect edges parallel to
/// the axis, flipped for pixel-reversed axes so the smaller fraction always
/// maps to the smaller data value.
fn edge_fractions(rect: Rect, content_rect: Rect, axis: &Axis) -> Option<(f64, f64)> {
    let (lo, hi, start, length) = if axis.is_horizontal() {
        (rect.x, rect.right(), content_rect.x, content_rect.width)
    } else {
        (rect.y, rect.bottom(), content_rect.y, content_rect.height)
    };
    if !length.is_finite() || length <= 0.0 {
        return None;
    }

    let f_lo = (lo - start) / length;
    let f_hi = (hi - start) / length;
    if axis.is_pixel_reversed() {
        Some((1.0 - f_hi, 1.0 - f_lo))
    } else {
        Some((f_lo, f_hi))
    }
}
