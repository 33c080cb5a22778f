use smallvec::SmallVec;

use crate::core::{BarGlyph, BarOrientation};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame};
use crate::series::BarStyle;

/// Turns one `BarGlyph` into draw primitives.
///
/// Implementations never fail: whatever geometry they receive is appended
/// to the frame as-is, and frame validation decides later whether a backend
/// can draw it.
pub trait BarRenderer {
    fn draw_bar(
        &self,
        frame: &mut RenderFrame,
        glyph: BarGlyph,
        half_width_px: f64,
        orientation: BarOrientation,
        style: &BarStyle,
    );

    fn name(&self) -> &'static str;
}

/// Candlestick bars: a filled body between open and close plus a wick
/// reaching out to high and low.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandlestickBarRenderer;

impl BarRenderer for CandlestickBarRenderer {
    fn draw_bar(
        &self,
        frame: &mut RenderFrame,
        glyph: BarGlyph,
        half_width_px: f64,
        orientation: BarOrientation,
        style: &BarStyle,
    ) {
        let half = half_width_px.max(0.0);
        let stroke = style.stroke_width_px;

        if stroke > 0.0 {
            for (from, to) in wick_segments(glyph) {
                let line = match orientation {
                    BarOrientation::Vertical => {
                        LinePrimitive::new(glyph.base, from, glyph.base, to, stroke, style.color)
                    }
                    BarOrientation::Horizontal => {
                        LinePrimitive::new(from, glyph.base, to, glyph.base, stroke, style.color)
                    }
                };
                frame.push_line(line);
            }
        }

        let (body_min, body_max) = glyph.body_span();
        let fill = style.fill_for(glyph.is_rising(orientation));
        let mut body = match orientation {
            BarOrientation::Vertical => RectPrimitive::new(
                glyph.base - half,
                body_min,
                half * 2.0,
                body_max - body_min,
                fill,
            ),
            BarOrientation::Horizontal => RectPrimitive::new(
                body_min,
                glyph.base - half,
                body_max - body_min,
                half * 2.0,
                fill,
            ),
        };
        if stroke > 0.0 {
            body = body.with_border(stroke, style.color);
        }
        frame.push_rect(body);
    }

    fn name(&self) -> &'static str {
        "candlestick"
    }
}

/// Wick parts outside the body along the price axis, each ordered `(min, max)`.
///
/// Empty parts are skipped, so a glyph whose body touches high and low has
/// no wick at all.
pub(crate) fn wick_segments(glyph: BarGlyph) -> SmallVec<[(f64, f64); 2]> {
    let (body_min, body_max) = glyph.body_span();
    let wick_min = glyph.high.min(glyph.low);
    let wick_max = glyph.high.max(glyph.low);

    let mut segments = SmallVec::new();
    if wick_min < body_min {
        segments.push((wick_min, body_min));
    }
    if body_max < wick_max {
        segments.push((body_max, wick_max));
    }
    segments
}
