use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::core::{BarOrientation, PriceScale, TimeScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// One open/high/low/close sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcBar {
    /// Builds a validated OHLC bar from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
        .validate()
    }

    /// Checks the invariants of `new` on a bar built from its public fields.
    pub fn validate(self) -> ChartResult<Self> {
        if [self.time, self.open, self.high, self.low, self.close]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if self.low > self.high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if self.open < self.low
            || self.open > self.high
            || self.close < self.low
            || self.close > self.high
        {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(self)
    }

    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Five pixel positions describing one bar glyph.
///
/// `base` is the coordinate on the time axis (x for vertical bars, y for
/// horizontal bars). The other four lie on the price axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGlyph {
    pub base: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

impl BarGlyph {
    /// Direction derived from pixel positions alone.
    ///
    /// Equal open/close counts as rising, matching `OhlcBar::is_bullish`.
    #[must_use]
    pub fn is_rising(self, orientation: BarOrientation) -> bool {
        match orientation {
            BarOrientation::Vertical => self.close <= self.open,
            BarOrientation::Horizontal => self.close >= self.open,
        }
    }

    /// Price-axis interval covered by the body, ordered `(min, max)`.
    #[must_use]
    pub fn body_span(self) -> (f64, f64) {
        (self.open.min(self.close), self.open.max(self.close))
    }
}

/// Projects OHLC bars into glyph coordinates for the given orientation.
pub fn project_bar_glyphs(
    bars: &[OhlcBar],
    time_scale: TimeScale,
    price_scale: PriceScale,
    viewport: Viewport,
    orientation: BarOrientation,
) -> ChartResult<Vec<BarGlyph>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let axis_lengths = viewport.axis_lengths(orientation);

    #[cfg(feature = "parallel-projection")]
    {
        bars.par_iter()
            .map(|bar| project_single_glyph(*bar, time_scale, price_scale, axis_lengths, orientation))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        bars.iter()
            .map(|bar| project_single_glyph(*bar, time_scale, price_scale, axis_lengths, orientation))
            .collect()
    }
}

fn project_single_glyph(
    bar: OhlcBar,
    time_scale: TimeScale,
    price_scale: PriceScale,
    (time_len, price_len): (f64, f64),
    orientation: BarOrientation,
) -> ChartResult<BarGlyph> {
    // Both orientations follow screen order along the time axis.
    let base = time_scale.time_to_pixel(bar.time, time_len)?;
    let price = |value: f64| price_scale.price_to_pixel(value, price_len, orientation);

    Ok(BarGlyph {
        base,
        high: price(bar.high)?,
        low: price(bar.low)?,
        open: price(bar.open)?,
        close: price(bar.close)?,
    })
}
