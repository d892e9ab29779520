//! plotgrid: axis tick layout and pan/zoom transform core for interactive
//! charts.
//!
//! The crate computes "nice" major/minor tick positions, data-to-pixel
//! viewport transforms, content-rect margins and zoom/pan range updates, and
//! emits plain pixel-space geometry for whatever renderer the host embeds it
//! in. Text measurement is injected as a capability; nothing here touches a
//! windowing system.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartLayout, ChartStrip};
pub use error::{PlotError, PlotResult};
