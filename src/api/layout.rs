use serde::{Deserialize, Serialize};

use crate::core::axis::AxisPosition;
use crate::core::geometry::Rect;
use crate::core::label::LabelMeasure;
use crate::core::ticks::TickPlan;
use crate::render::{AxisFrame, LabelPlacement, LineSegment, MAJOR_TICK_LENGTH_PX, MINOR_TICK_RATIO};

/// Output of one chart layout pass: the plotting area plus renderable
/// furniture for every axis, in axis insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub content_rect: Rect,
    pub frames: Vec<AxisFrame>,
}

/// Builds the renderable furniture for one axis from its tick plan.
pub(super) fn build_axis_frame(
    position: AxisPosition,
    axis_rect: Rect,
    content_rect: Rect,
    plan: TickPlan,
    measure: &dyn LabelMeasure,
) -> AxisFrame {
    let horizontal = position.is_horizontal();
    let tick_length = match position {
        AxisPosition::Bottom | AxisPosition::Right => MAJOR_TICK_LENGTH_PX,
        AxisPosition::Top | AxisPosition::Left => -MAJOR_TICK_LENGTH_PX,
    };
    let minor_tick_length = tick_length * MINOR_TICK_RATIO;

    // Round to integer pixels to get sharper lines.
    let base_pos = match position {
        AxisPosition::Bottom => axis_rect.y,
        AxisPosition::Right => axis_rect.x,
        AxisPosition::Top => axis_rect.bottom(),
        AxisPosition::Left => axis_rect.right(),
    }
    .round();

    let axis_line = if horizontal {
        LineSegment::new(
            content_rect.x.round(),
            base_pos,
            content_rect.right().round(),
            base_pos,
        )
    } else {
        LineSegment::new(
            base_pos,
            content_rect.y.round(),
            base_pos,
            content_rect.bottom().round(),
        )
    };

    // Gridlines run from the far content edge to the axis base line.
    let grid_from = match position {
        AxisPosition::Bottom => content_rect.y,
        AxisPosition::Top => content_rect.bottom(),
        AxisPosition::Right => content_rect.x,
        AxisPosition::Left => content_rect.right(),
    }
    .round();

    let mut major_lines = Vec::with_capacity(plan.majors.len());
    let mut tick_marks = Vec::with_capacity(plan.majors.len() + plan.minors.len());
    for tick in &plan.majors {
        let pos = tick.pixel.round();
        if horizontal {
            major_lines.push(LineSegment::new(pos, grid_from, pos, base_pos));
            tick_marks.push(LineSegment::new(pos, base_pos, pos, base_pos + tick_length));
        } else {
            major_lines.push(LineSegment::new(grid_from, pos, base_pos, pos));
            tick_marks.push(LineSegment::new(base_pos, pos, base_pos + tick_length, pos));
        }
    }
    for minor in &plan.minors {
        let pos = minor.pixel.round();
        let length = if minor.midpoint {
            tick_length
        } else {
            minor_tick_length
        };
        if horizontal {
            tick_marks.push(LineSegment::new(pos, base_pos, pos, base_pos + length));
        } else {
            tick_marks.push(LineSegment::new(base_pos, pos, base_pos + length, pos));
        }
    }

    let mut labels = Vec::with_capacity(plan.labels.len());
    for label in &plan.labels {
        let extent = measure.measure(&label.text);
        let (x, y) = if horizontal {
            let x = (label.pixel - extent.width / 2.0).round();
            let mut y = base_pos + tick_length;
            if position == AxisPosition::Top {
                y -= extent.height;
            }
            (x, y.round())
        } else {
            let y = (label.pixel - extent.height / 2.0).round();
            let mut x = base_pos + tick_length;
            if position == AxisPosition::Left {
                x -= extent.width;
            }
            (x.round(), y)
        };
        labels.push(LabelPlacement {
            text: label.text.clone(),
            x,
            y,
        });
    }

    AxisFrame {
        rect: axis_rect,
        axis_line: Some(axis_line),
        major_lines,
        tick_marks,
        labels,
        plan,
    }
}
