use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{BarOrientation, LinearScale, OhlcBar};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for price-domain autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScaleTuning {
    pub top_padding_ratio: f64,
    pub bottom_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for PriceScaleTuning {
    fn default() -> Self {
        Self {
            top_padding_ratio: 0.10,
            bottom_padding_ratio: 0.10,
            min_span_absolute: 0.000_001,
        }
    }
}

impl PriceScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.top_padding_ratio.is_finite()
            || !self.bottom_padding_ratio.is_finite()
            || self.top_padding_ratio < 0.0
            || self.bottom_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "price scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "price scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Linear price axis.
///
/// Vertical bars map higher prices to smaller y (screen Y grows downwards);
/// horizontal bars map higher prices to larger x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    min: f64,
    max: f64,
}

impl PriceScale {
    pub fn new(price_min: f64, price_max: f64) -> ChartResult<Self> {
        let linear = LinearScale::new(price_min, price_max)?;
        let (start, end) = linear.domain();
        Ok(Self {
            min: start.min(end),
            max: start.max(end),
        })
    }

    pub fn from_ohlc(bars: &[OhlcBar]) -> ChartResult<Self> {
        Self::from_ohlc_tuned(bars, PriceScaleTuning::default())
    }

    /// Fits the domain to the low/high envelope of `bars` plus padding.
    pub fn from_ohlc_tuned(bars: &[OhlcBar], tuning: PriceScaleTuning) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let low = bars.iter().map(|bar| OrderedFloat(bar.low)).min();
        let high = bars.iter().map(|bar| OrderedFloat(bar.high)).max();
        let (Some(OrderedFloat(low)), Some(OrderedFloat(high))) = (low, high) else {
            return Err(ChartError::InvalidData(
                "cannot fit price scale to an empty bar series".to_owned(),
            ));
        };

        let mut min = low;
        let mut max = high;
        if max - min < tuning.min_span_absolute {
            let half = tuning.min_span_absolute / 2.0;
            min -= half;
            max += half;
        }

        let span = max - min;
        Self::new(
            min - span * tuning.bottom_padding_ratio,
            max + span * tuning.top_padding_ratio,
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn price_to_pixel(
        self,
        price: f64,
        length_px: f64,
        orientation: BarOrientation,
    ) -> ChartResult<f64> {
        let along = LinearScale::new(self.min, self.max)?.domain_to_pixel(price, length_px)?;
        Ok(match orientation {
            BarOrientation::Vertical => length_px - along,
            BarOrientation::Horizontal => along,
        })
    }
}
