use crate::error::{ChartError, ChartResult};

/// Linear mapping from a finite, non-empty domain onto `[0, length_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Returns the domain position of `value` as a ratio in domain units.
    pub fn normalize(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok((value - self.domain_start) / (self.domain_end - self.domain_start))
    }

    pub fn domain_to_pixel(self, value: f64, length_px: f64) -> ChartResult<f64> {
        validate_length(length_px)?;
        Ok(self.normalize(value)? * length_px)
    }
}

fn validate_length(length_px: f64) -> ChartResult<()> {
    if !length_px.is_finite() || length_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "axis length must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
