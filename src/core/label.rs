use serde::{Deserialize, Serialize};

/// Pixel footprint of a rendered tick label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelExtent {
    pub width: f64,
    pub height: f64,
}

impl LabelExtent {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Footprint along the axis run: width on horizontal axes, height on vertical ones.
    #[must_use]
    pub fn along_run(self, horizontal: bool) -> f64 {
        if horizontal { self.width } else { self.height }
    }

    /// Furniture thickness perpendicular to the axis run: height on horizontal
    /// axes, width on vertical ones.
    #[must_use]
    pub fn thickness(self, horizontal: bool) -> f64 {
        if horizontal { self.height } else { self.width }
    }
}

/// Label measurement capability injected by the host.
///
/// Layout math never touches a text-rendering backend directly; whatever the
/// host uses to draw labels also answers how large a given text would be.
pub trait LabelMeasure {
    fn measure(&self, text: &str) -> LabelExtent;
}

/// Fixed-cell measurement, good enough for monospace or tabular-figure fonts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonospaceMeasure {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
        }
    }
}

impl LabelMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> LabelExtent {
        LabelExtent::new(text.chars().count() as f64 * self.char_width, self.line_height)
    }
}

/// Formats an axis value for a tick label with fixed two-decimal precision.
#[must_use]
pub fn format_tick_value(value: f64) -> String {
    format!("{value:.2}")
}
