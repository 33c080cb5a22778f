//! candle-series: candlestick series items for Rust-native charts.
//!
//! The crate is split the same way as a full charting engine would be:
//! `core` holds data and scale math, `render` holds backend-agnostic draw
//! primitives, `series` holds bar styles, bar renderers and the candlestick
//! item itself, and `legend` lays out key glyphs next to series labels.

pub mod core;
pub mod error;
pub mod legend;
pub mod render;
pub mod series;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use legend::{Legend, LegendConfig};
pub use series::{BarChartItem, BarStyle, CandlestickItem};
