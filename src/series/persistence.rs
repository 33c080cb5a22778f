use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::OhlcBar;
use crate::error::{ChartError, ChartResult};
use crate::series::{BarChartItem, BarStyle, CandlestickItem};

/// Tag written into every saved candlestick item.
pub const CANDLESTICK_ITEM_SCHEMA_VERSION: u32 = 1;

/// Serialized form of a `CandlestickItem`.
///
/// `schema_version` is required on load but its value never changes how the
/// rest of the document is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickItemDocument {
    pub schema_version: u32,
    pub label: String,
    #[serde(default)]
    pub points: Vec<OhlcBar>,
    #[serde(default)]
    pub bar_style: BarStyle,
}

impl CandlestickItemDocument {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize candlestick item: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse candlestick item document: {e}"))
        })
    }
}

impl CandlestickItem {
    #[must_use]
    pub fn to_document(&self) -> CandlestickItemDocument {
        CandlestickItemDocument {
            schema_version: CANDLESTICK_ITEM_SCHEMA_VERSION,
            label: self.label().to_owned(),
            points: self.points().to_vec(),
            bar_style: *self.bar_style(),
        }
    }

    /// Rebuilds an item, re-validating every point and the style.
    pub fn from_document(document: CandlestickItemDocument) -> ChartResult<Self> {
        debug!(
            schema_version = document.schema_version,
            label = %document.label,
            "loading candlestick item"
        );
        Self::with_points(document.label, document.points)?
            .with_bar_style(document.bar_style)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        self.to_document().to_json_pretty()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Self::from_document(CandlestickItemDocument::from_json_str(input)?)
    }
}
