use candle_series::core::{
    BarOrientation, LegendRect, OhlcBar, PriceScale, TimeScale, Viewport, project_bar_glyphs,
};
use candle_series::render::RenderFrame;
use candle_series::series::{BarChartItem, CandlestickItem, PaneContext, legend_key_glyph};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_bars(count: usize) -> Vec<OhlcBar> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let base = 100.0 + t * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            OhlcBar::new(t, open, high, low, close).expect("valid generated bar")
        })
        .collect()
}

fn bench_legend_key_glyph(c: &mut Criterion) {
    let rect = LegendRect::new(8.0, 8.0, 14.0, 18.0);
    c.bench_function("legend_key_glyph", |b| {
        b.iter(|| legend_key_glyph(black_box(rect), black_box(BarOrientation::Vertical)))
    });
}

fn bench_glyph_projection_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let bars = generated_bars(10_000);
    let time_scale = TimeScale::from_ohlc(&bars).expect("valid time scale");
    let price_scale = PriceScale::from_ohlc(&bars).expect("valid price scale");

    c.bench_function("glyph_projection_10k", |b| {
        b.iter(|| {
            let _ = project_bar_glyphs(
                black_box(&bars),
                black_box(time_scale),
                black_box(price_scale),
                black_box(viewport),
                black_box(BarOrientation::Vertical),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_draw_series_10k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let bars = generated_bars(10_000);
    let time_scale = TimeScale::from_ohlc(&bars).expect("valid time scale");
    let price_scale = PriceScale::from_ohlc(&bars).expect("valid price scale");
    let item = CandlestickItem::with_points("bench", bars).expect("valid bench item");
    let pane = PaneContext::default();

    c.bench_function("draw_series_10k", |b| {
        b.iter(|| {
            let mut frame = RenderFrame::new(viewport);
            item.draw_series(&mut frame, &pane, time_scale, price_scale)
                .expect("draw should succeed");
            black_box(frame);
        })
    });
}

criterion_group!(
    benches,
    bench_legend_key_glyph,
    bench_glyph_projection_10k,
    bench_draw_series_10k
);
criterion_main!(benches);
