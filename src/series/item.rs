use std::fmt;

use tracing::debug;

use crate::core::{LegendRect, OhlcBar, PriceScale, TimeScale, project_bar_glyphs};
use crate::error::ChartResult;
use crate::render::RenderFrame;
use crate::series::{BarRenderer, BarStyle, PaneContext};

/// A chart series drawn as one bar per OHLC sample.
///
/// Implementors decide which `BarRenderer` draws their bars and how their
/// legend key looks; projecting the series into pixel space is shared.
pub trait BarChartItem: fmt::Debug + Send + Sync {
    fn label(&self) -> &str;

    fn points(&self) -> &[OhlcBar];

    fn bar_style(&self) -> &BarStyle;

    /// Factory for the renderer used by both series and legend drawing.
    fn create_bar_renderer(&self) -> Box<dyn BarRenderer>;

    /// Draws the small representative glyph shown next to the label in a legend.
    fn draw_legend_key(
        &self,
        frame: &mut RenderFrame,
        rect: LegendRect,
        pane: &PaneContext,
        scale_factor: f64,
    );

    /// Independent copy behind a fresh box.
    fn clone_item(&self) -> Box<dyn BarChartItem>;

    /// Projects every point and appends its bar to `frame`.
    ///
    /// Returns the number of bars drawn.
    fn draw_series(
        &self,
        frame: &mut RenderFrame,
        pane: &PaneContext,
        time_scale: TimeScale,
        price_scale: PriceScale,
    ) -> ChartResult<usize> {
        let points = self.points();
        if points.is_empty() {
            return Ok(0);
        }

        let pane = pane.resolved_for_series(points, time_scale, frame.viewport)?;
        let glyphs = project_bar_glyphs(
            points,
            time_scale,
            price_scale,
            frame.viewport,
            pane.orientation,
        )?;
        let renderer = self.create_bar_renderer();
        let style = self.bar_style();
        let half_width = pane.bar_half_width_px(style, 1.0);
        for glyph in &glyphs {
            renderer.draw_bar(frame, *glyph, half_width, pane.orientation, style);
        }

        debug!(
            label = self.label(),
            renderer = renderer.name(),
            bars = glyphs.len(),
            half_width,
            "drew bar series"
        );
        Ok(glyphs.len())
    }
}

impl Clone for Box<dyn BarChartItem> {
    fn clone(&self) -> Self {
        self.clone_item()
    }
}
