use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns `(time_axis_px, price_axis_px)` lengths for the given bar orientation.
    #[must_use]
    pub fn axis_lengths(self, orientation: BarOrientation) -> (f64, f64) {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        match orientation {
            BarOrientation::Vertical => (width, height),
            BarOrientation::Horizontal => (height, width),
        }
    }
}

/// Direction in which bars grow.
///
/// `Vertical` bars stand on a horizontal time axis (prices grow upwards).
/// `Horizontal` bars lie on a vertical time axis (prices grow to the right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Axis-aligned rectangle in pixel space.
///
/// Width and height are not required to be positive; callers that pass a
/// zero or negative extent get degenerate geometry back, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LegendRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.top + self.height / 2.0
    }
}
