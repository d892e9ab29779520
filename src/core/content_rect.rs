use crate::core::axis::{Axis, AxisPosition};
use crate::core::geometry::{Margins, Orientation, Rect};
use crate::core::label::{LabelMeasure, format_tick_value};

/// Fixed padding added around the widest min/max label of an axis.
pub const AXIS_LABEL_PADDING_PX: f64 = 20.0;

/// Furniture thickness an axis needs: the larger of its min/max label
/// extents perpendicular to the axis run, plus fixed padding.
#[must_use]
pub fn axis_furniture_extent(axis: &Axis, measure: &dyn LabelMeasure) -> f64 {
    let horizontal = axis.is_horizontal();
    let min_label = measure.measure(&format_tick_value(axis.min()));
    let max_label = measure.measure(&format_tick_value(axis.max()));
    min_label
        .thickness(horizontal)
        .max(max_label.thickness(horizontal))
        + AXIS_LABEL_PADDING_PX
}

/// Stacks axis furniture rects outward from the plot area, one edge at a time
/// in insertion order, and returns the rects together with the accumulated
/// per-edge margins.
#[must_use]
pub fn stack_axis_rects(
    extents: &[(AxisPosition, f64)],
    width: f64,
    height: f64,
) -> (Vec<Rect>, Margins) {
    let mut margins = Margins::default();
    let mut rects = Vec::with_capacity(extents.len());

    for &(position, extent) in extents {
        let rect = match position {
            AxisPosition::Left => {
                let rect = Rect::new(margins.left, 0.0, extent, height);
                margins.left += extent;
                rect
            }
            AxisPosition::Right => {
                let rect = Rect::new(width - margins.right - extent, 0.0, extent, height);
                margins.right += extent;
                rect
            }
            AxisPosition::Top => {
                let rect = Rect::new(0.0, margins.top, width, extent);
                margins.top += extent;
                rect
            }
            AxisPosition::Bottom => {
                let rect = Rect::new(0.0, height - margins.bottom - extent, width, extent);
                margins.bottom += extent;
                rect
            }
        };
        rects.push(rect);
    }

    (rects, margins)
}

/// The plotting sub-rectangle left after subtracting accumulated axis margins.
#[must_use]
pub fn implicit_content_rect(width: f64, height: f64, margins: Margins) -> Rect {
    Rect::from_size(width, height).shrunk_by(margins)
}

/// Implicit content rect clamped by externally imposed minimum margins
/// (used to align charts sharing a container edge).
#[must_use]
pub fn effective_content_rect(
    width: f64,
    height: f64,
    margins: Margins,
    minimum: Margins,
) -> Rect {
    let implicit = implicit_content_rect(width, height, margins);
    if minimum.is_null() {
        return implicit;
    }
    implicit.intersected(Rect::from_size(width, height).shrunk_by(minimum))
}

/// Minimum margins that align the plotting areas of charts laid out along
/// `orientation` inside a `width` x `height` container.
///
/// Side-by-side charts share the most restrictive top and bottom edges of
/// their implicit content rects; stacked charts share left and right. Applying
/// the result as each chart's minimum content margins makes the plotting
/// areas line up.
#[must_use]
pub fn shared_margins(
    implicit_rects: &[Rect],
    orientation: Orientation,
    width: f64,
    height: f64,
) -> Margins {
    match orientation {
        Orientation::Horizontal => {
            let mut top = 0.0_f64;
            let mut bottom = height;
            for rect in implicit_rects {
                top = top.max(rect.y);
                bottom = bottom.min(rect.bottom());
            }
            Margins::new(0.0, top, 0.0, height - bottom)
        }
        Orientation::Vertical => {
            let mut left = 0.0_f64;
            let mut right = width;
            for rect in implicit_rects {
                left = left.max(rect.x);
                right = right.min(rect.right());
            }
            Margins::new(left, 0.0, width - right, 0.0)
        }
    }
}
