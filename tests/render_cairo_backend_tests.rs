#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use candle_series::ChartError;
use candle_series::core::Viewport;
use candle_series::render::{
    CairoContextRenderer, CairoRenderer, Color, RectPrimitive, RenderFrame, Renderer,
};
use candle_series::series::{BarStyle, CandlestickItem, PaneContext, PhysicalSize};
use candle_series::{Legend, LegendConfig};

fn two_entry_legend() -> Legend {
    let mut legend = Legend::new(LegendConfig::default()).expect("legend");
    legend.add_item(&CandlestickItem::new("BTCUSDT"));
    legend.add_item(&CandlestickItem::new("ETHUSDT"));
    legend
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_rejects_invalid_clear_color() {
    let mut renderer = CairoRenderer::new(64, 64).expect("renderer");
    let err = renderer
        .set_clear_color(Color::rgb(0.0, -0.5, 0.0))
        .expect_err("negative channel");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_legend_frame() {
    let mut renderer = CairoRenderer::new(320, 200).expect("renderer");
    renderer
        .set_clear_color(Color::rgb(0.0, 0.0, 0.0))
        .expect("clear color");

    two_entry_legend()
        .render(&mut renderer, Viewport::new(320, 200), &PaneContext::default())
        .expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 4);
    assert_eq!(stats.rects_drawn, 2);
    assert_eq!(stats.rects_skipped, 0);
    assert_eq!(stats.texts_drawn, 2);
    assert_eq!(renderer.surface().width(), 320);
}

#[test]
fn cairo_renderer_skips_point_sized_legend_key() {
    let config = LegendConfig::default().with_key_size(0.0, 0.0);
    let mut legend = Legend::new(config).expect("legend");
    let item = CandlestickItem::new("flat")
        .with_bar_style(BarStyle::default().with_size(PhysicalSize::pixels(0.0)))
        .expect("style");
    legend.add_item(&item);
    let pane = PaneContext::default().with_min_half_width_px(0.0);
    let mut renderer = CairoRenderer::new(100, 100).expect("renderer");

    legend
        .render(&mut renderer, Viewport::new(100, 100), &pane)
        .expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 0);
    assert_eq!(stats.rects_drawn, 0);
    assert_eq!(stats.rects_skipped, 1);
    assert_eq!(stats.texts_drawn, 1);
}

#[test]
fn cairo_renderer_draws_flat_body_with_border() {
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_rect(
        RectPrimitive::new(10.0, 40.0, 12.0, 0.0, Color::rgb(0.2, 0.6, 0.4))
            .with_border(1.0, Color::rgb(0.1, 0.1, 0.1)),
    );
    let mut renderer = CairoRenderer::new(100, 100).expect("renderer");

    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_stats().rects_drawn, 1);
    assert_eq!(renderer.last_stats().rects_skipped, 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let surface = ImageSurface::create(Format::ARgb32, 320, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    let frame = two_entry_legend().build_frame(Viewport::new(320, 200), &PaneContext::default());
    let mut renderer = CairoRenderer::new(320, 200).expect("renderer");

    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on context");

    assert_eq!(renderer.last_stats().lines_drawn, 4);
    assert_eq!(renderer.last_stats().texts_drawn, 2);
}
