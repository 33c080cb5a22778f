pub mod candlestick;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use candlestick::{BarGlyph, OhlcBar, project_bar_glyphs};
pub use price_scale::{PriceScale, PriceScaleTuning};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{BarOrientation, LegendRect, Viewport};
