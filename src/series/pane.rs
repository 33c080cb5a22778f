use serde::{Deserialize, Serialize};

use crate::core::time_scale::reference_time_step;
use crate::core::{BarOrientation, OhlcBar, TimeScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::series::BarStyle;

/// Share of the bar spacing a bar body may occupy on each side of its base.
const MAX_HALF_WIDTH_SPACING_RATIO: f64 = 0.4;

/// Pane-level drawing context for bar series.
///
/// Supplies the bar orientation and the axis-specific width logic that turns
/// a style's physical size into a pixel half-width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneContext {
    #[serde(default)]
    pub orientation: BarOrientation,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    /// Distance between neighbouring bars on the time axis, when known.
    #[serde(default)]
    pub bar_spacing_px: Option<f64>,
    #[serde(default = "default_min_half_width_px")]
    pub min_half_width_px: f64,
}

impl Default for PaneContext {
    fn default() -> Self {
        Self::new(BarOrientation::Vertical)
    }
}

impl PaneContext {
    #[must_use]
    pub fn new(orientation: BarOrientation) -> Self {
        Self {
            orientation,
            dpi: default_dpi(),
            bar_spacing_px: None,
            min_half_width_px: default_min_half_width_px(),
        }
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_bar_spacing_px(mut self, bar_spacing_px: Option<f64>) -> Self {
        self.bar_spacing_px = bar_spacing_px;
        self
    }

    #[must_use]
    pub fn with_min_half_width_px(mut self, min_half_width_px: f64) -> Self {
        self.min_half_width_px = min_half_width_px;
        self
    }

    /// Fills in `bar_spacing_px` from the series when the caller left it unset.
    pub fn resolved_for_series(
        self,
        bars: &[OhlcBar],
        time_scale: TimeScale,
        viewport: Viewport,
    ) -> ChartResult<Self> {
        if self.bar_spacing_px.is_some() {
            return Ok(self);
        }
        let Some(step) = reference_time_step(bars) else {
            return Ok(self);
        };
        let (time_len, _) = viewport.axis_lengths(self.orientation);
        let spacing = time_scale.bar_spacing_px(step, time_len)?;
        Ok(self.with_bar_spacing_px(Some(spacing)))
    }

    /// Half of the bar width in pixels.
    ///
    /// The style size is converted at `dpi`, multiplied by `scale_factor`,
    /// capped by the bar spacing when one is known and floored at
    /// `min_half_width_px`. Non-finite inputs fall back to the floor.
    #[must_use]
    pub fn bar_half_width_px(&self, style: &BarStyle, scale_factor: f64) -> f64 {
        let mut half = style.size.to_pixels(self.dpi) * scale_factor / 2.0;
        if let Some(spacing) = self
            .bar_spacing_px
            .filter(|spacing| spacing.is_finite() && *spacing > 0.0)
        {
            half = half.min(spacing * MAX_HALF_WIDTH_SPACING_RATIO);
        }
        if !half.is_finite() {
            return self.min_half_width_px;
        }
        half.max(self.min_half_width_px)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(ChartError::InvalidData(
                "pane dpi must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_half_width_px.is_finite() || self.min_half_width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "pane min half width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(spacing) = self.bar_spacing_px {
            if !spacing.is_finite() || spacing <= 0.0 {
                return Err(ChartError::InvalidData(
                    "pane bar spacing must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let pane: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse pane context: {e}")))?;
        pane.validate()
    }
}

fn default_dpi() -> f64 {
    96.0
}

fn default_min_half_width_px() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::PhysicalSize;

    #[test]
    fn half_width_scales_with_factor() {
        let pane = PaneContext::default();
        let style = BarStyle::default().with_size(PhysicalSize::pixels(10.0));
        assert_eq!(pane.bar_half_width_px(&style, 1.0), 5.0);
        assert_eq!(pane.bar_half_width_px(&style, 2.0), 10.0);
    }

    #[test]
    fn half_width_is_capped_by_bar_spacing() {
        let pane = PaneContext::default().with_bar_spacing_px(Some(10.0));
        let style = BarStyle::default().with_size(PhysicalSize::pixels(40.0));
        assert_eq!(pane.bar_half_width_px(&style, 1.0), 4.0);
    }

    #[test]
    fn tiny_bars_are_floored_at_min_half_width() {
        let pane = PaneContext::default().with_min_half_width_px(2.0);
        let style = BarStyle::default().with_size(PhysicalSize::pixels(1.0));
        assert_eq!(pane.bar_half_width_px(&style, 1.0), 2.0);
    }

    #[test]
    fn negative_min_half_width_is_rejected() {
        let pane = PaneContext::default().with_min_half_width_px(-1.0);
        assert!(pane.validate().is_err());
    }

    #[test]
    fn non_finite_scale_factor_falls_back_to_floor() {
        let pane = PaneContext::default();
        let style = BarStyle::default();
        assert_eq!(pane.bar_half_width_px(&style, f64::NAN), 0.5);
    }
}
