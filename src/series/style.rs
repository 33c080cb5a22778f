use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const POINTS_PER_INCH: f64 = 72.0;
const MILLIMETERS_PER_INCH: f64 = 25.4;

/// Unit attached to a `PhysicalSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeUnit {
    #[default]
    Pixels,
    Points,
    Millimeters,
    Inches,
}

/// Length expressed in a device-independent unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSize {
    pub value: f64,
    #[serde(default)]
    pub unit: SizeUnit,
}

impl PhysicalSize {
    #[must_use]
    pub const fn new(value: f64, unit: SizeUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn pixels(value: f64) -> Self {
        Self::new(value, SizeUnit::Pixels)
    }

    #[must_use]
    pub const fn points(value: f64) -> Self {
        Self::new(value, SizeUnit::Points)
    }

    #[must_use]
    pub const fn millimeters(value: f64) -> Self {
        Self::new(value, SizeUnit::Millimeters)
    }

    #[must_use]
    pub const fn inches(value: f64) -> Self {
        Self::new(value, SizeUnit::Inches)
    }

    /// Converts to device pixels at `dpi` dots per inch.
    ///
    /// `Pixels` ignores `dpi`.
    #[must_use]
    pub fn to_pixels(self, dpi: f64) -> f64 {
        match self.unit {
            SizeUnit::Pixels => self.value,
            SizeUnit::Points => self.value * dpi / POINTS_PER_INCH,
            SizeUnit::Millimeters => self.value * dpi / MILLIMETERS_PER_INCH,
            SizeUnit::Inches => self.value * dpi,
        }
    }
}

/// Rendering attributes shared by every bar of one series.
///
/// `color` strokes the wick and body outline, `up_fill`/`down_fill` fill
/// rising and falling bodies, and `size` is the full bar width before pane
/// scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub color: Color,
    pub stroke_width_px: f64,
    pub up_fill: Color,
    pub down_fill: Color,
    pub size: PhysicalSize,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.20, 0.22, 0.25),
            stroke_width_px: 1.0,
            up_fill: Color::rgb(0.15, 0.65, 0.60),
            down_fill: Color::rgb(0.94, 0.33, 0.31),
            size: PhysicalSize::points(7.0),
        }
    }
}

impl BarStyle {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_width_px(mut self, stroke_width_px: f64) -> Self {
        self.stroke_width_px = stroke_width_px;
        self
    }

    #[must_use]
    pub fn with_fills(mut self, up_fill: Color, down_fill: Color) -> Self {
        self.up_fill = up_fill;
        self.down_fill = down_fill;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: PhysicalSize) -> Self {
        self.size = size;
        self
    }

    /// Body fill for a bar moving in the given direction.
    #[must_use]
    pub fn fill_for(self, rising: bool) -> Color {
        if rising { self.up_fill } else { self.down_fill }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.stroke_width_px.is_finite() || self.stroke_width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "bar stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.size.value.is_finite() || self.size.value < 0.0 {
            return Err(ChartError::InvalidData(
                "bar size must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()?;
        self.up_fill.validate()?;
        self.down_fill.validate()
    }
}
