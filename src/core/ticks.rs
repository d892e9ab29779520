use serde::{Deserialize, Serialize};

use crate::core::label::{LabelMeasure, format_tick_value};
use crate::core::transform::ViewportTransform;
use crate::error::{PlotError, PlotResult};

/// A major interval is always split into this many minor intervals.
pub const MINOR_INTERVALS_PER_MAJOR: usize = 10;

/// Tuning controls for tick density and label crowding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Multiplier applied on top of the snapped `{1,2,5,10} * 10^k` spacing.
    ///
    /// The spacing rule alone would put roughly one major tick per pixel; the
    /// coarse ratio spreads them out to a readable density. Keep it a power of
    /// ten to preserve the round-value form of the spacing.
    pub coarse_ratio: f64,
    /// A half-major label is placed only when the major pixel spacing exceeds
    /// the label footprint times this ratio.
    pub label_fit_ratio: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            coarse_ratio: 100.0,
            label_fit_ratio: 2.5,
        }
    }
}

impl TickConfig {
    fn validate(self) -> PlotResult<Self> {
        if !self.coarse_ratio.is_finite() || self.coarse_ratio <= 0.0 {
            return Err(PlotError::InvalidData(
                "tick coarse ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_fit_ratio.is_finite() || self.label_fit_ratio <= 0.0 {
            return Err(PlotError::InvalidData(
                "tick label fit ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One major tick: a round value and its pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
}

/// One minor tick. `midpoint` marks the 5th subdivision, the half-major mark
/// that gets a full-length tick and a label when it fits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinorTick {
    pub value: f64,
    pub pixel: f64,
    pub midpoint: bool,
}

/// A label the renderer should place at a tick position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub value: f64,
    pub pixel: f64,
    pub text: String,
}

/// Full tick geometry for one axis, recomputed in full each layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickPlan {
    pub major_spacing: f64,
    pub minor_spacing: f64,
    pub majors: Vec<Tick>,
    pub minors: Vec<MinorTick>,
    pub labels: Vec<TickLabel>,
}

/// Computes "nice" major/minor tick positions for an axis range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickPlanner {
    config: TickConfig,
}

impl TickPlanner {
    pub fn new(config: TickConfig) -> PlotResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> TickConfig {
        self.config
    }

    /// Plans ticks over a forward pixel run starting at offset zero.
    pub fn plan_range(
        &self,
        min: f64,
        max: f64,
        pixel_length: f64,
        horizontal: bool,
        measure: &dyn LabelMeasure,
    ) -> PlotResult<TickPlan> {
        let transform = ViewportTransform::new(min, max, 0.0, pixel_length, false)?;
        self.plan(&transform, horizontal, measure)
    }

    /// Plans ticks for the range and pixel run described by `transform`.
    ///
    /// Major tick values are strictly ascending, spaced by exactly the major
    /// spacing, and the spacing is of the form `d * 10^k` with
    /// `d` in `{1, 2, 5, 10}` (scaled by the configured coarse ratio).
    pub fn plan(
        &self,
        transform: &ViewportTransform,
        horizontal: bool,
        measure: &dyn LabelMeasure,
    ) -> PlotResult<TickPlan> {
        let min = transform.min();
        let max = transform.max();
        let span = transform.span();

        let raw_spacing = span / transform.pixel_length();
        let multiplier = 10_f64.powf(raw_spacing.log10().floor());
        if !multiplier.is_normal() {
            // Subnormal or overflowed power of ten; downstream math would
            // produce NaN pixel offsets.
            return Err(PlotError::InvalidRange { min, max });
        }

        let major_spacing = snap_digit(raw_spacing / multiplier) * multiplier * self.config.coarse_ratio;
        if !major_spacing.is_normal() {
            return Err(PlotError::InvalidRange { min, max });
        }
        let minor_spacing = major_spacing / MINOR_INTERVALS_PER_MAJOR as f64;

        let major_pixel_spacing = major_spacing / span * transform.pixel_length();

        // One major below the largest multiple of the spacing <= min, so the
        // leading edge of the run is always covered.
        let start_value = (min / major_spacing).floor() * major_spacing - major_spacing;

        let lower = transform.pixel_start() - 0.5;
        let upper = transform.pixel_start() + transform.pixel_length() + 0.5;
        let in_bounds = |pixel: f64| pixel >= lower && pixel <= upper;

        let mut plan = TickPlan {
            major_spacing,
            minor_spacing,
            ..TickPlan::default()
        };

        let mut step = 0_usize;
        loop {
            let value = start_value + major_spacing * step as f64;
            if value > max + major_spacing {
                break;
            }

            let pixel = transform.value_to_pixel(value)?;
            if in_bounds(pixel) {
                plan.majors.push(Tick { value, pixel });
                plan.labels.push(TickLabel {
                    value,
                    pixel,
                    text: format_tick_value(value),
                });
            }

            for minor in 1..MINOR_INTERVALS_PER_MAJOR {
                let minor_value = value + minor_spacing * minor as f64;
                let minor_pixel = transform.value_to_pixel(minor_value)?;
                if !in_bounds(minor_pixel) {
                    continue;
                }

                let midpoint = minor == MINOR_INTERVALS_PER_MAJOR / 2;
                plan.minors.push(MinorTick {
                    value: minor_value,
                    pixel: minor_pixel,
                    midpoint,
                });

                if midpoint {
                    let text = format_tick_value(minor_value);
                    let footprint = measure.measure(&text).along_run(horizontal);
                    if major_pixel_spacing > footprint * self.config.label_fit_ratio {
                        plan.labels.push(TickLabel {
                            value: minor_value,
                            pixel: minor_pixel,
                            text,
                        });
                    }
                }
            }

            step += 1;
        }

        Ok(plan)
    }
}

/// Snaps the leading digit of a raw spacing to the nearest round step above it.
fn snap_digit(first_digit: f64) -> f64 {
    if first_digit > 5.0 {
        10.0
    } else if first_digit > 2.0 {
        5.0
    } else if first_digit > 1.0 {
        2.0
    } else {
        1.0
    }
}
