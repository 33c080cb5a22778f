//! Legend block: one key glyph and one label per series, stacked in rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{LegendRect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextPrimitive};
use crate::series::{BarChartItem, PaneContext};

/// Placement and sizing of the legend block.
///
/// Serializable so hosts can keep legend layout next to the rest of their
/// chart settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_origin_px")]
    pub origin_x: f64,
    #[serde(default = "default_origin_px")]
    pub origin_y: f64,
    #[serde(default = "default_key_width_px")]
    pub key_width_px: f64,
    #[serde(default = "default_key_height_px")]
    pub key_height_px: f64,
    #[serde(default = "default_row_gap_px")]
    pub row_gap_px: f64,
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    /// Multiplier applied to each series' bar size inside its key.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            origin_x: default_origin_px(),
            origin_y: default_origin_px(),
            key_width_px: default_key_width_px(),
            key_height_px: default_key_height_px(),
            row_gap_px: default_row_gap_px(),
            label_gap_px: default_label_gap_px(),
            font_size_px: default_font_size_px(),
            label_color: default_label_color(),
            scale_factor: default_scale_factor(),
        }
    }
}

impl LegendConfig {
    #[must_use]
    pub fn with_origin(mut self, origin_x: f64, origin_y: f64) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    #[must_use]
    pub fn with_key_size(mut self, key_width_px: f64, key_height_px: f64) -> Self {
        self.key_width_px = key_width_px;
        self.key_height_px = key_height_px;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, label_color: Color) -> Self {
        self.label_color = label_color;
        self
    }

    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "legend `{name}` must be finite"
                )));
            }
        }
        for (name, value) in [
            ("key_width_px", self.key_width_px),
            ("key_height_px", self.key_height_px),
            ("row_gap_px", self.row_gap_px),
            ("label_gap_px", self.label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "legend `{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("font_size_px", self.font_size_px),
            ("scale_factor", self.scale_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "legend `{name}` must be finite and > 0"
                )));
            }
        }
        self.label_color.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse legend config: {e}")))?;
        config.validate()
    }

    fn row_height_px(self) -> f64 {
        self.key_height_px.max(self.font_size_px)
    }
}

/// Ordered set of legend entries keyed by series label.
///
/// Re-adding a label replaces its entry without moving it.
#[derive(Debug, Clone)]
pub struct Legend {
    config: LegendConfig,
    entries: IndexMap<String, Box<dyn BarChartItem>>,
}

impl Legend {
    pub fn new(config: LegendConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            entries: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> LegendConfig {
        self.config
    }

    /// Adds an independent copy of `item`; returns the entry it replaced, if any.
    pub fn add_item(&mut self, item: &dyn BarChartItem) -> Option<Box<dyn BarChartItem>> {
        let replaced = self
            .entries
            .insert(item.label().to_owned(), item.clone_item());
        debug!(
            label = item.label(),
            replaced = replaced.is_some(),
            entries = self.entries.len(),
            "legend entry added"
        );
        replaced
    }

    pub fn remove_item(&mut self, label: &str) -> Option<Box<dyn BarChartItem>> {
        self.entries.shift_remove(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key rectangle for the entry in row `row`.
    #[must_use]
    pub fn key_rect(&self, row: usize) -> LegendRect {
        let config = self.config;
        let top = config.origin_y + row as f64 * (config.row_height_px() + config.row_gap_px);
        let key_top = top + (config.row_height_px() - config.key_height_px) / 2.0;
        LegendRect::new(
            config.origin_x,
            key_top,
            config.key_width_px,
            config.key_height_px,
        )
    }

    /// Lays out every entry into a new frame.
    #[must_use]
    pub fn build_frame(&self, viewport: Viewport, pane: &PaneContext) -> RenderFrame {
        let config = self.config;
        let mut frame = RenderFrame::new(viewport);
        for (row, (label, item)) in self.entries.iter().enumerate() {
            let key = self.key_rect(row);
            item.draw_legend_key(&mut frame, key, pane, config.scale_factor);

            if label.is_empty() {
                continue;
            }
            frame.push_text(TextPrimitive::new(
                label.as_str(),
                key.right() + config.label_gap_px,
                key.center_y(),
                config.font_size_px,
                config.label_color,
                TextHAlign::Left,
            ));
        }
        frame
    }

    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        viewport: Viewport,
        pane: &PaneContext,
    ) -> ChartResult<()> {
        let frame = self.build_frame(viewport, pane);
        renderer.render(&frame).inspect_err(|err| {
            warn!(error = %err, entries = self.entries.len(), "legend frame rejected by renderer");
        })
    }
}

fn default_origin_px() -> f64 {
    8.0
}

fn default_key_width_px() -> f64 {
    14.0
}

fn default_key_height_px() -> f64 {
    18.0
}

fn default_row_gap_px() -> f64 {
    4.0
}

fn default_label_gap_px() -> f64 {
    6.0
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_label_color() -> Color {
    Color::rgb(0.12, 0.13, 0.15)
}

fn default_scale_factor() -> f64 {
    1.0
}
