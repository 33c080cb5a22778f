use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, OhlcBar};
use crate::error::{ChartError, ChartResult};

/// Time axis model for bar series.
///
/// Fitting from bars pads the range by half a bar step on each side so the
/// first and last glyphs are not clipped by the axis edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: f64,
    end: f64,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let (start, end) = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self { start, end })
    }

    /// Fits the range to bar times plus half of the reference step on both sides.
    pub fn from_ohlc(bars: &[OhlcBar]) -> ChartResult<Self> {
        let Some(first) = bars.first() else {
            return Err(ChartError::InvalidData(
                "cannot fit time scale to an empty bar series".to_owned(),
            ));
        };

        let mut min_time = first.time;
        let mut max_time = first.time;
        for bar in bars {
            min_time = min_time.min(bar.time);
            max_time = max_time.max(bar.time);
        }

        let half_step = reference_time_step(bars).unwrap_or(1.0) / 2.0;
        Self::new(min_time - half_step, max_time + half_step)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn time_to_pixel(self, time: f64, length_px: f64) -> ChartResult<f64> {
        self.linear()?.domain_to_pixel(time, length_px)
    }

    /// Pixel distance covered by `time_step` on an axis `length_px` long.
    pub fn bar_spacing_px(self, time_step: f64, length_px: f64) -> ChartResult<f64> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "time step must be finite and > 0".to_owned(),
            ));
        }
        let origin = self.time_to_pixel(self.start, length_px)?;
        let next = self.time_to_pixel(self.start + time_step, length_px)?;
        Ok((next - origin).abs())
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.start, self.end)
    }
}

/// Smallest positive gap between consecutive bar times, if any.
#[must_use]
pub fn reference_time_step(bars: &[OhlcBar]) -> Option<f64> {
    bars.windows(2)
        .map(|pair| (pair[1].time - pair[0].time).abs())
        .filter(|delta| delta.is_finite() && *delta > 0.0)
        .reduce(f64::min)
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
