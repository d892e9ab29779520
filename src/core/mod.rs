pub mod axis;
pub mod content_rect;
pub mod geometry;
pub mod label;
pub mod ticks;
pub mod transform;

pub use axis::{Axis, AxisDirection, AxisPosition};
pub use geometry::{Margins, Orientation, Point, Rect};
pub use label::{LabelExtent, LabelMeasure, MonospaceMeasure};
pub use ticks::{MinorTick, Tick, TickConfig, TickLabel, TickPlan, TickPlanner};
pub use transform::ViewportTransform;
