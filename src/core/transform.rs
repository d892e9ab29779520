use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::error::{PlotError, PlotResult};

/// Maps data-space values to pixel offsets along one axis of a content rect.
///
/// `reversed` swaps the endpoints: the range minimum lands at
/// `pixel_start + pixel_length` instead of `pixel_start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    min: f64,
    max: f64,
    pixel_start: f64,
    pixel_length: f64,
    reversed: bool,
}

impl ViewportTransform {
    pub fn new(
        min: f64,
        max: f64,
        pixel_start: f64,
        pixel_length: f64,
        reversed: bool,
    ) -> PlotResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PlotError::InvalidRange { min, max });
        }
        if !pixel_start.is_finite() || !pixel_length.is_finite() || pixel_length <= 0.0 {
            return Err(PlotError::InvalidPixelSpan {
                start: pixel_start,
                length: pixel_length,
            });
        }

        Ok(Self {
            min,
            max,
            pixel_start,
            pixel_length,
            reversed,
        })
    }

    /// Builds the pixel-space transform for an axis over one content-rect run.
    ///
    /// Screen pixel coordinates grow rightward and downward, so a vertical
    /// Forward axis (values running bottom-to-top) comes out reversed here.
    pub fn for_axis(axis: &Axis, pixel_start: f64, pixel_length: f64) -> PlotResult<Self> {
        Self::new(
            axis.min(),
            axis.max(),
            pixel_start,
            pixel_length,
            axis.is_pixel_reversed(),
        )
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
    pub fn pixel_start(&self) -> f64 {
        self.pixel_start
    }

    #[must_use]
    pub fn pixel_length(&self) -> f64 {
        self.pixel_length
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn value_to_pixel(&self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let mut t = (value - self.min) / self.span();
        if self.reversed {
            t = 1.0 - t;
        }
        Ok(self.pixel_start + t * self.pixel_length)
    }

    pub fn pixel_to_value(&self, pixel: f64) -> PlotResult<f64> {
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }

        let mut t = (pixel - self.pixel_start) / self.pixel_length;
        if self.reversed {
            t = 1.0 - t;
        }
        Ok(self.min + t * self.span())
    }
}
