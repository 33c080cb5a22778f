use tracing::trace;

use crate::core::{LegendRect, OhlcBar};
use crate::error::ChartResult;
use crate::render::RenderFrame;
use crate::series::{
    BarChartItem, BarRenderer, BarStyle, CandlestickBarRenderer, PaneContext, legend_key_glyph,
};

/// Candlestick series: a labelled OHLC point list drawn with
/// `CandlestickBarRenderer`.
///
/// The item owns its style and points, so a clone never aliases the
/// original.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlestickItem {
    label: String,
    points: Vec<OhlcBar>,
    bar_style: BarStyle,
}

impl CandlestickItem {
    /// Empty series with the default bar style.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
            bar_style: BarStyle::default(),
        }
    }

    /// Series with initial points; every bar is re-validated.
    pub fn with_points(label: impl Into<String>, points: Vec<OhlcBar>) -> ChartResult<Self> {
        let mut item = Self::new(label);
        item.set_points(points)?;
        Ok(item)
    }

    /// Copies label, points and style from any bar item.
    #[must_use]
    pub fn from_item(other: &dyn BarChartItem) -> Self {
        Self {
            label: other.label().to_owned(),
            points: other.points().to_vec(),
            bar_style: *other.bar_style(),
        }
    }

    pub fn with_bar_style(mut self, bar_style: BarStyle) -> ChartResult<Self> {
        self.set_bar_style(bar_style)?;
        Ok(self)
    }

    pub fn set_bar_style(&mut self, bar_style: BarStyle) -> ChartResult<()> {
        bar_style.validate()?;
        self.bar_style = bar_style;
        Ok(())
    }

    /// Replaces all points. Nothing changes when any bar is invalid.
    pub fn set_points(&mut self, points: Vec<OhlcBar>) -> ChartResult<()> {
        let points = points
            .into_iter()
            .map(OhlcBar::validate)
            .collect::<ChartResult<Vec<_>>>()?;
        self.points = points;
        trace!(label = %self.label, count = self.points.len(), "set candlestick points");
        Ok(())
    }

    pub fn push_point(&mut self, point: OhlcBar) -> ChartResult<()> {
        self.points.push(point.validate()?);
        trace!(label = %self.label, count = self.points.len(), "append candlestick point");
        Ok(())
    }

    /// Legend-key drawing with an explicit renderer instead of the factory one.
    pub fn draw_legend_key_with(
        &self,
        renderer: &dyn BarRenderer,
        frame: &mut RenderFrame,
        rect: LegendRect,
        pane: &PaneContext,
        scale_factor: f64,
    ) {
        let glyph = legend_key_glyph(rect, pane.orientation);
        let half_width = pane.bar_half_width_px(&self.bar_style, scale_factor);
        trace!(
            label = %self.label,
            renderer = renderer.name(),
            ?glyph,
            half_width,
            "draw candlestick legend key"
        );
        renderer.draw_bar(frame, glyph, half_width, pane.orientation, &self.bar_style);
    }
}

impl BarChartItem for CandlestickItem {
    fn label(&self) -> &str {
        &self.label
    }

    fn points(&self) -> &[OhlcBar] {
        &self.points
    }

    fn bar_style(&self) -> &BarStyle {
        &self.bar_style
    }

    fn create_bar_renderer(&self) -> Box<dyn BarRenderer> {
        Box::new(CandlestickBarRenderer)
    }

    fn draw_legend_key(
        &self,
        frame: &mut RenderFrame,
        rect: LegendRect,
        pane: &PaneContext,
        scale_factor: f64,
    ) {
        let renderer = self.create_bar_renderer();
        self.draw_legend_key_with(renderer.as_ref(), frame, rect, pane, scale_factor);
    }

    fn clone_item(&self) -> Box<dyn BarChartItem> {
        Box::new(self.clone())
    }
}
