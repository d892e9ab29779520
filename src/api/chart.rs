use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::axis::Axis;
use crate::core::content_rect::{
    axis_furniture_extent, effective_content_rect, implicit_content_rect, stack_axis_rects,
};
use crate::core::geometry::{Margins, Point, Rect};
use crate::core::label::LabelMeasure;
use crate::core::ticks::{TickConfig, TickPlanner};
use crate::core::transform::ViewportTransform;
use crate::error::{PlotError, PlotResult};
use crate::interaction::{DragMode, GesturePhase, ZoomPanController};
use crate::render::AxisFrame;

use super::layout::{ChartLayout, build_axis_frame};

#[derive(Debug, Clone)]
struct AxisSlot {
    axis: Axis,
    rect: Rect,
    extent: f64,
    measured: bool,
    last_frame: Option<AxisFrame>,
}

impl AxisSlot {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            rect: Rect::default(),
            extent: 0.0,
            measured: false,
            last_frame: None,
        }
    }
}

/// A chart: a set of axes around a plotting area, with zoom/pan interaction
/// and a synchronous, pull-based layout pass.
///
/// Layout is idempotent and may be invoked redundantly; an axis that is not
/// dirty reuses its previously measured furniture extent and only shifts
/// position when the stacking order or chart size changed.
#[derive(Debug, Clone)]
pub struct Chart {
    slots: Vec<AxisSlot>,
    width: f64,
    height: f64,
    minimum_margins: Margins,
    planner: TickPlanner,
    controller: ZoomPanController,
    margins: Margins,
}

impl Chart {
    pub fn new(width: f64, height: f64) -> PlotResult<Self> {
        validate_size(width, height)?;
        Ok(Self {
            slots: Vec::new(),
            width,
            height,
            minimum_margins: Margins::default(),
            planner: TickPlanner::default(),
            controller: ZoomPanController::new(),
            margins: Margins::default(),
        })
    }

    /// Adds an axis and returns its index, stable for the chart's lifetime.
    pub fn add_axis(&mut self, axis: Axis) -> usize {
        self.slots.push(AxisSlot::new(axis));
        self.slots.len() - 1
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn axis(&self, index: usize) -> Option<&Axis> {
        self.slots.get(index).map(|slot| &slot.axis)
    }

    #[must_use]
    pub fn axis_mut(&mut self, index: usize) -> Option<&mut Axis> {
        self.slots.get_mut(index).map(|slot| &mut slot.axis)
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.slots.iter().map(|slot| &slot.axis)
    }

    /// The furniture rect computed for an axis by the last layout pass.
    #[must_use]
    pub fn axis_rect(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).map(|slot| slot.rect)
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resizes the chart, dirtying the axes whose pixel run changed.
    pub fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        validate_size(width, height)?;
        let width_changed = self.width != width;
        let height_changed = self.height != height;
        self.width = width;
        self.height = height;

        for slot in &mut self.slots {
            let horizontal = slot.axis.is_horizontal();
            if (horizontal && width_changed) || (!horizontal && height_changed) {
                slot.axis.mark_dirty();
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn minimum_content_margins(&self) -> Margins {
        self.minimum_margins
    }

    /// Sets externally imposed minimum margins, used by strip layouts to
    /// align plotting areas across charts.
    pub fn set_minimum_content_margins(&mut self, margins: Margins) {
        self.minimum_margins = margins;
    }

    #[must_use]
    pub fn tick_config(&self) -> TickConfig {
        self.planner.config()
    }

    pub fn set_tick_config(&mut self, config: TickConfig) -> PlotResult<()> {
        self.planner = TickPlanner::new(config)?;
        for slot in &mut self.slots {
            slot.axis.mark_dirty();
        }
        Ok(())
    }

    /// Content rect implied by the axis furniture alone.
    #[must_use]
    pub fn implicit_content_rect(&self) -> Rect {
        implicit_content_rect(self.width, self.height, self.margins)
    }

    /// Plotting area: the implicit content rect clamped by minimum margins.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        effective_content_rect(self.width, self.height, self.margins, self.minimum_margins)
    }

    /// Runs one layout pass: recomputes axis furniture rects (re-measuring
    /// only dirty axes), then plans ticks and builds renderable frames.
    ///
    /// An axis whose range is currently invalid keeps its previous frame in
    /// place rather than failing the whole pass.
    pub fn layout(&mut self, measure: &dyn LabelMeasure) -> PlotResult<ChartLayout> {
        self.update_axis_rects(measure);
        let content_rect = self.content_rect();

        let mut frames = Vec::with_capacity(self.slots.len());
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let (start, length) = if slot.axis.is_horizontal() {
                (content_rect.x, content_rect.width)
            } else {
                (content_rect.y, content_rect.height)
            };

            let frame = ViewportTransform::for_axis(&slot.axis, start, length)
                .and_then(|transform| {
                    self.planner
                        .plan(&transform, slot.axis.is_horizontal(), measure)
                })
                .map(|plan| {
                    build_axis_frame(
                        slot.axis.position(),
                        slot.rect,
                        content_rect,
                        plan,
                        measure,
                    )
                });

            match frame {
                Ok(frame) => {
                    slot.last_frame = Some(frame.clone());
                    frames.push(frame);
                }
                Err(err) => {
                    warn!(axis = index, error = %err, "keeping previous axis frame");
                    frames.push(slot.last_frame.clone().unwrap_or_else(|| AxisFrame {
                        rect: slot.rect,
                        ..AxisFrame::default()
                    }));
                }
            }
        }

        debug!(
            axes = self.slots.len(),
            width = self.width,
            height = self.height,
            "chart layout pass"
        );
        Ok(ChartLayout {
            content_rect,
            frames,
        })
    }

    fn update_axis_rects(&mut self, measure: &dyn LabelMeasure) {
        let mut extents = Vec::with_capacity(self.slots.len());
        for slot in &mut self.slots {
            if slot.axis.is_dirty() || !slot.measured {
                slot.extent = axis_furniture_extent(&slot.axis, measure);
                slot.measured = true;
                slot.axis.clear_dirty();
            }
            extents.push((slot.axis.position(), slot.extent));
        }

        let (rects, margins) = stack_axis_rects(&extents, self.width, self.height);
        for (slot, rect) in self.slots.iter_mut().zip(rects) {
            slot.rect = rect;
        }
        self.margins = margins;
    }

    // Gesture entry points. Everything below is synchronous and delegates to
    // the zoom/pan controller against the current content rect.

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn zoom_history_depth(&self) -> usize {
        self.controller.history_depth()
    }

    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        self.controller.selection_rect()
    }

    /// Starts a rectangle-selection drag.
    pub fn begin_select(&mut self, pos: Point) {
        self.controller.begin_drag(DragMode::Select, pos, []);
    }

    /// Starts a pan drag. A press inside the content rect pans every axis;
    /// a press on axis furniture pans only the axes it hit.
    pub fn begin_pan(&mut self, pos: Point) {
        let content_rect = self.content_rect();
        let targets: SmallVec<[usize; 4]> = if content_rect.contains(pos) {
            (0..self.slots.len()).collect()
        } else {
            self.slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.rect.contains(pos))
                .map(|(index, _)| index)
                .collect()
        };
        self.controller.begin_drag(DragMode::Pan, pos, targets);
    }

    pub fn drag_to(&mut self, pos: Point) {
        let content_rect = self.content_rect();
        self.controller
            .drag_to(pos, self.slots.iter_mut().map(|slot| &mut slot.axis), content_rect);
    }

    pub fn end_drag(&mut self, pos: Point) -> bool {
        let content_rect = self.content_rect();
        self.controller
            .end_drag(pos, self.slots.iter_mut().map(|slot| &mut slot.axis), content_rect)
    }

    /// Zooms into the data region covered by a screen-space rectangle.
    pub fn zoom_in(&mut self, rect: Rect) -> bool {
        let content_rect = self.content_rect();
        self.controller.zoom_to_rect(
            self.slots.iter_mut().map(|slot| &mut slot.axis),
            rect,
            content_rect,
        )
    }

    /// Undoes the most recent rectangle zoom.
    pub fn undo_zoom(&mut self) -> bool {
        let content_rect = self.content_rect();
        self.controller
            .undo_zoom(self.slots.iter_mut().map(|slot| &mut slot.axis), content_rect)
    }

    /// Wheel zoom anchored at the data value under the pointer.
    pub fn wheel_zoom(&mut self, pos: Point, factor: f64) -> bool {
        let content_rect = self.content_rect();
        self.controller.zoom_about(
            self.slots.iter_mut().map(|slot| &mut slot.axis),
            content_rect,
            pos,
            factor,
        )
    }

    pub fn begin_pinch(&mut self, points: [Point; 2]) {
        self.controller.begin_pinch(points);
    }

    pub fn pinch_to(&mut self, points: [Point; 2]) -> bool {
        let content_rect = self.content_rect();
        self.controller.pinch_to(
            points,
            self.slots.iter_mut().map(|slot| &mut slot.axis),
            content_rect,
        )
    }

    pub fn end_pinch(&mut self) {
        self.controller.end_pinch();
    }
}

fn validate_size(width: f64, height: f64) -> PlotResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "chart size must be finite and positive: {width}x{height}"
        )));
    }
    Ok(())
}
