use crate::core::{BarGlyph, BarOrientation, LegendRect};

/// Lays out a representative candlestick inside `rect`.
///
/// Vertical: the bar is centered horizontally, spans the full height, and
/// the body covers the middle third. Horizontal is the same layout rotated,
/// with high on the right edge.
///
/// Degenerate rectangles are not rejected.
#[must_use]
pub fn legend_key_glyph(rect: LegendRect, orientation: BarOrientation) -> BarGlyph {
    match orientation {
        BarOrientation::Vertical => {
            let high = rect.top;
            let low = rect.bottom();
            BarGlyph {
                base: rect.center_x(),
                high,
                low,
                open: high + rect.height / 3.0,
                close: low - rect.height / 3.0,
            }
        }
        BarOrientation::Horizontal => {
            let high = rect.right();
            let low = rect.left;
            BarGlyph {
                base: rect.center_y(),
                high,
                low,
                open: high - rect.width / 3.0,
                close: low + rect.width / 3.0,
            }
        }
    }
}
