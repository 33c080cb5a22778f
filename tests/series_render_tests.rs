use approx::assert_abs_diff_eq;
use candle_series::core::{BarOrientation, OhlcBar, PriceScale, TimeScale, Viewport};
use candle_series::render::{NullRenderer, RenderFrame, Renderer};
use candle_series::series::{BarChartItem, BarStyle, CandlestickItem, PaneContext, PhysicalSize};

fn single_bar_item() -> CandlestickItem {
    CandlestickItem::with_points(
        "BTC",
        vec![OhlcBar::new(50.0, 40.0, 80.0, 20.0, 60.0).expect("bar")],
    )
    .expect("item")
    .with_bar_style(BarStyle::default().with_size(PhysicalSize::pixels(10.0)))
    .expect("style")
}

fn scales() -> (TimeScale, PriceScale) {
    (
        TimeScale::new(0.0, 100.0).expect("time scale"),
        PriceScale::new(0.0, 100.0).expect("price scale"),
    )
}

#[test]
fn vertical_series_bar_is_projected_into_pixels() {
    let item = single_bar_item();
    let (time_scale, price_scale) = scales();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    let drawn = item
        .draw_series(&mut frame, &PaneContext::default(), time_scale, price_scale)
        .expect("draw");

    assert_eq!(drawn, 1);
    let body = frame.rects[0];
    assert_abs_diff_eq!(body.x, 95.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.y, 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.width, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.height, 20.0, epsilon = 1e-9);
    assert_eq!(body.fill_color, item.bar_style().up_fill);

    assert_eq!(frame.lines.len(), 2);
    assert_abs_diff_eq!(frame.lines[0].y1, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.lines[1].y2, 80.0, epsilon = 1e-9);
}

#[test]
fn horizontal_series_bar_puts_time_on_y() {
    let item = single_bar_item();
    let (time_scale, price_scale) = scales();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    item.draw_series(
        &mut frame,
        &PaneContext::new(BarOrientation::Horizontal),
        time_scale,
        price_scale,
    )
    .expect("draw");

    let body = frame.rects[0];
    assert_abs_diff_eq!(body.x, 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.y, 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.width, 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(body.height, 10.0, epsilon = 1e-9);
}

#[test]
fn series_bar_width_is_capped_by_spacing() {
    let item = CandlestickItem::with_points(
        "BTC",
        vec![
            OhlcBar::new(0.0, 40.0, 80.0, 20.0, 60.0).expect("bar 1"),
            OhlcBar::new(10.0, 60.0, 70.0, 50.0, 55.0).expect("bar 2"),
        ],
    )
    .expect("item")
    .with_bar_style(BarStyle::default().with_size(PhysicalSize::pixels(40.0)))
    .expect("style");
    let (time_scale, price_scale) = scales();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    item.draw_series(&mut frame, &PaneContext::default(), time_scale, price_scale)
        .expect("draw");

    assert_eq!(frame.rects.len(), 2);
    for rect in &frame.rects {
        assert_abs_diff_eq!(rect.width, 16.0, epsilon = 1e-9);
    }
}

#[test]
fn empty_series_draws_nothing() {
    let item = CandlestickItem::new("empty");
    let (time_scale, price_scale) = scales();
    let mut frame = RenderFrame::new(Viewport::new(200, 100));

    let drawn = item
        .draw_series(&mut frame, &PaneContext::default(), time_scale, price_scale)
        .expect("draw");

    assert_eq!(drawn, 0);
    assert!(frame.is_empty());
}

#[test]
fn fitted_scales_render_through_null_renderer() {
    let bars: Vec<OhlcBar> = (0..50)
        .map(|i| {
            let t = f64::from(i) * 60.0;
            let open = 100.0 + f64::from(i);
            let close = if i % 2 == 0 { open + 2.0 } else { open - 2.0 };
            OhlcBar::new(t, open, open.max(close) + 1.0, open.min(close) - 1.0, close)
                .expect("generated bar")
        })
        .collect();
    let time_scale = TimeScale::from_ohlc(&bars).expect("time scale");
    let price_scale = PriceScale::from_ohlc(&bars).expect("price scale");
    let item = CandlestickItem::with_points("generated", bars).expect("item");
    let mut frame = RenderFrame::new(Viewport::new(800, 400));

    item.draw_series(&mut frame, &PaneContext::default(), time_scale, price_scale)
        .expect("draw");
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_rect_count, 50);
    assert_eq!(renderer.last_line_count, 100);
}

#[test]
fn preset_bar_spacing_is_kept_for_series() {
    let bars = vec![
        OhlcBar::new(0.0, 40.0, 80.0, 20.0, 60.0).expect("bar 1"),
        OhlcBar::new(10.0, 60.0, 70.0, 50.0, 55.0).expect("bar 2"),
    ];
    let (time_scale, price_scale) = scales();
    let viewport = Viewport::new(200, 100);
    let pane = PaneContext::default().with_bar_spacing_px(Some(50.0));

    let resolved = pane
        .resolved_for_series(&bars, time_scale, viewport)
        .expect("resolve");
    assert_eq!(resolved.bar_spacing_px, Some(50.0));

    let item = CandlestickItem::with_points("BTC", bars)
        .expect("item")
        .with_bar_style(BarStyle::default().with_size(PhysicalSize::pixels(40.0)))
        .expect("style");
    let mut frame = RenderFrame::new(viewport);
    item.draw_series(&mut frame, &pane, time_scale, price_scale)
        .expect("draw");

    for rect in &frame.rects {
        assert_abs_diff_eq!(rect.width, 40.0, epsilon = 1e-9);
    }
}

#[test]
fn series_spacing_is_derived_from_the_time_step() {
    let bars = [
        OhlcBar::new(0.0, 40.0, 80.0, 20.0, 60.0).expect("bar 1"),
        OhlcBar::new(10.0, 60.0, 70.0, 50.0, 55.0).expect("bar 2"),
    ];
    let (time_scale, _) = scales();

    let resolved = PaneContext::default()
        .resolved_for_series(&bars, time_scale, Viewport::new(200, 100))
        .expect("resolve");

    assert_abs_diff_eq!(resolved.bar_spacing_px.expect("spacing"), 20.0, epsilon = 1e-9);
}

#[test]
fn single_bar_series_leaves_spacing_unset() {
    let bars = [OhlcBar::new(50.0, 40.0, 80.0, 20.0, 60.0).expect("bar")];
    let (time_scale, _) = scales();

    let resolved = PaneContext::new(BarOrientation::Horizontal)
        .resolved_for_series(&bars, time_scale, Viewport::new(200, 100))
        .expect("resolve");

    assert_eq!(resolved.bar_spacing_px, None);
    assert_eq!(resolved.orientation, BarOrientation::Horizontal);
}
