//! Bar-series items and the pieces they draw with.
//!
//! A `BarChartItem` owns its points and a `BarStyle`, builds a `BarRenderer`
//! through a factory method and uses it both for the series body and for the
//! small key glyph shown in a legend. `CandlestickItem` is the candlestick
//! flavour of that item.

mod candlestick;
mod glyph;
mod item;
mod pane;
mod persistence;
mod renderer;
mod style;

pub use candlestick::CandlestickItem;
pub use glyph::legend_key_glyph;
pub use item::BarChartItem;
pub use pane::PaneContext;
pub use persistence::{CANDLESTICK_ITEM_SCHEMA_VERSION, CandlestickItemDocument};
pub use renderer::{BarRenderer, CandlestickBarRenderer};
pub use style::{BarStyle, PhysicalSize, SizeUnit};
