use tracing::debug;

use crate::core::content_rect::shared_margins;
use crate::core::geometry::Orientation;
use crate::core::label::LabelMeasure;
use crate::error::{PlotError, PlotResult};

use super::chart::Chart;
use super::layout::ChartLayout;

/// Lays out several charts along one orientation, splitting the available
/// area evenly and aligning their plotting areas.
///
/// Alignment works by taking the component-wise maximum/minimum of the
/// charts' implicit content rects and applying the result as every chart's
/// minimum content margins, so stacked charts' plotting areas line up even
/// when their axis labels differ in size.
#[derive(Debug, Clone)]
pub struct ChartStrip {
    charts: Vec<Chart>,
    orientation: Orientation,
    width: f64,
    height: f64,
}

impl ChartStrip {
    pub fn new(orientation: Orientation, width: f64, height: f64) -> PlotResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "strip size must be finite and positive: {width}x{height}"
            )));
        }
        Ok(Self {
            charts: Vec::new(),
            orientation,
            width,
            height,
        })
    }

    /// Adds a chart and returns its index. The strip controls chart sizes
    /// from here on.
    pub fn add_chart(&mut self, chart: Chart) -> usize {
        self.charts.push(chart);
        self.charts.len() - 1
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn chart(&self, index: usize) -> Option<&Chart> {
        self.charts.get(index)
    }

    #[must_use]
    pub fn chart_mut(&mut self, index: usize) -> Option<&mut Chart> {
        self.charts.get_mut(index)
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn resize(&mut self, width: f64, height: f64) -> PlotResult<()> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "strip size must be finite and positive: {width}x{height}"
            )));
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Sizes every chart to its even share of the strip, aligns plotting
    /// areas, and returns each chart's layout in insertion order.
    ///
    /// Runs two passes: the first refreshes every chart's implicit content
    /// rect, the second applies the shared margins derived from them.
    pub fn layout_all(&mut self, measure: &dyn LabelMeasure) -> PlotResult<Vec<ChartLayout>> {
        if self.charts.is_empty() {
            return Ok(Vec::new());
        }

        let count = self.charts.len() as f64;
        let (chart_width, chart_height) = match self.orientation {
            Orientation::Horizontal => (self.width / count, self.height),
            Orientation::Vertical => (self.width, self.height / count),
        };

        let mut implicit_rects = Vec::with_capacity(self.charts.len());
        for chart in &mut self.charts {
            chart.resize(chart_width, chart_height)?;
            chart.layout(measure)?;
            implicit_rects.push(chart.implicit_content_rect());
        }

        let margins = shared_margins(&implicit_rects, self.orientation, chart_width, chart_height);
        debug!(
            charts = self.charts.len(),
            ?margins,
            "aligning strip content rects"
        );

        let mut layouts = Vec::with_capacity(self.charts.len());
        for chart in &mut self.charts {
            chart.set_minimum_content_margins(margins);
            layouts.push(chart.layout(measure)?);
        }
        Ok(layouts)
    }
}
