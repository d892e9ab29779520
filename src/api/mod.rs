pub mod chart;
pub mod layout;
pub mod snapshot;
pub mod strip;

pub use chart::Chart;
pub use layout::ChartLayout;
pub use snapshot::{CHART_LAYOUT_JSON_SCHEMA_V1, ChartLayoutJsonContractV1};
pub use strip::ChartStrip;
