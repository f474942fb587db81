use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, ItemShape, LineStrokeStyle};
use crate::renderer::labels::ItemLabelPosition;

/// Paint sequence used for series without an explicit paint.
pub const DEFAULT_SERIES_PALETTE: [Color; 8] = [
    Color::rgb(1.0, 0.333, 0.333),
    Color::rgb(0.333, 0.333, 1.0),
    Color::rgb(0.333, 1.0, 0.333),
    Color::rgb(0.98, 0.75, 0.0),
    Color::rgb(1.0, 0.333, 1.0),
    Color::rgb(0.0, 0.75, 0.75),
    Color::rgb(1.0, 0.686, 0.686),
    Color::rgb(0.5, 0.5, 0.5),
];

/// Sparse per-series override table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesOverrides<T> {
    entries: Vec<Option<T>>,
}

impl<T> Default for SeriesOverrides<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Copy> SeriesOverrides<T> {
    #[must_use]
    pub fn get(&self, series: usize) -> Option<T> {
        self.entries.get(series).copied().flatten()
    }

    pub fn set(&mut self, series: usize, value: Option<T>) {
        if series >= self.entries.len() {
            if value.is_none() {
                return;
            }
            self.entries.resize_with(series + 1, || None);
        }
        self.entries[series] = value;
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().filter_map(|entry| *entry)
    }
}

/// Styling state shared by XY item renderers.
///
/// Every lookup resolves the per-series override first and falls back to
/// the `base_*` value. Item indices are accepted so per-item styling can be
/// layered on later without changing call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererStyle {
    pub series_paint: SeriesOverrides<Color>,
    /// `None` cycles through [`DEFAULT_SERIES_PALETTE`].
    pub base_paint: Option<Color>,
    pub series_shape: SeriesOverrides<ItemShape>,
    pub base_shape: ItemShape,
    pub series_stroke_width: SeriesOverrides<f64>,
    pub base_stroke_width: f64,
    pub series_stroke_style: SeriesOverrides<LineStrokeStyle>,
    pub base_stroke_style: LineStrokeStyle,
    pub series_item_label_visible: SeriesOverrides<bool>,
    pub base_item_label_visible: bool,
    pub series_item_label_font_size_px: SeriesOverrides<f64>,
    pub base_item_label_font_size_px: f64,
    pub series_item_label_paint: SeriesOverrides<Color>,
    pub base_item_label_paint: Color,
    pub series_positive_item_label_position: SeriesOverrides<ItemLabelPosition>,
    pub base_positive_item_label_position: ItemLabelPosition,
    pub series_negative_item_label_position: SeriesOverrides<ItemLabelPosition>,
    pub base_negative_item_label_position: ItemLabelPosition,
    pub series_visible: SeriesOverrides<bool>,
    pub base_series_visible: bool,
    /// Pixel distance of one label anchor step.
    pub item_label_anchor_offset: f64,
    /// Range bounds only consider visible series when set.
    pub data_bounds_include_visible_series_only: bool,
}

impl Default for RendererStyle {
    fn default() -> Self {
        Self {
            series_paint: SeriesOverrides::default(),
            base_paint: None,
            series_shape: SeriesOverrides::default(),
            base_shape: ItemShape::default(),
            series_stroke_width: SeriesOverrides::default(),
            base_stroke_width: 1.0,
            series_stroke_style: SeriesOverrides::default(),
            base_stroke_style: LineStrokeStyle::Solid,
            series_item_label_visible: SeriesOverrides::default(),
            base_item_label_visible: false,
            series_item_label_font_size_px: SeriesOverrides::default(),
            base_item_label_font_size_px: 10.0,
            series_item_label_paint: SeriesOverrides::default(),
            base_item_label_paint: Color::rgb(0.0, 0.0, 0.0),
            series_positive_item_label_position: SeriesOverrides::default(),
            base_positive_item_label_position: ItemLabelPosition::default(),
            series_negative_item_label_position: SeriesOverrides::default(),
            base_negative_item_label_position: ItemLabelPosition::below(),
            series_visible: SeriesOverrides::default(),
            base_series_visible: true,
            item_label_anchor_offset: 2.0,
            data_bounds_include_visible_series_only: true,
        }
    }
}

impl RendererStyle {
    #[must_use]
    pub fn item_paint(&self, series: usize, _item: usize) -> Color {
        self.series_paint.get(series).unwrap_or_else(|| {
            self.base_paint
                .unwrap_or(DEFAULT_SERIES_PALETTE[series % DEFAULT_SERIES_PALETTE.len()])
        })
    }

    #[must_use]
    pub fn item_shape(&self, series: usize, _item: usize) -> ItemShape {
        self.series_shape.get(series).unwrap_or(self.base_shape)
    }

    #[must_use]
    pub fn item_stroke_width(&self, series: usize, _item: usize) -> f64 {
        self.series_stroke_width
            .get(series)
            .unwrap_or(self.base_stroke_width)
    }

    #[must_use]
    pub fn item_stroke_style(&self, series: usize, _item: usize) -> LineStrokeStyle {
        self.series_stroke_style
            .get(series)
            .unwrap_or(self.base_stroke_style)
    }

    #[must_use]
    pub fn is_item_label_visible(&self, series: usize, _item: usize) -> bool {
        self.series_item_label_visible
            .get(series)
            .unwrap_or(self.base_item_label_visible)
    }

    #[must_use]
    pub fn item_label_font_size_px(&self, series: usize, _item: usize) -> f64 {
        self.series_item_label_font_size_px
            .get(series)
            .unwrap_or(self.base_item_label_font_size_px)
    }

    #[must_use]
    pub fn item_label_paint(&self, series: usize, _item: usize) -> Color {
        self.series_item_label_paint
            .get(series)
            .unwrap_or(self.base_item_label_paint)
    }

    #[must_use]
    pub fn positive_item_label_position(&self, series: usize, _item: usize) -> ItemLabelPosition {
        self.series_positive_item_label_position
            .get(series)
            .unwrap_or(self.base_positive_item_label_position)
    }

    #[must_use]
    pub fn negative_item_label_position(&self, series: usize, _item: usize) -> ItemLabelPosition {
        self.series_negative_item_label_position
            .get(series)
            .unwrap_or(self.base_negative_item_label_position)
    }

    #[must_use]
    pub fn is_series_visible(&self, series: usize) -> bool {
        self.series_visible
            .get(series)
            .unwrap_or(self.base_series_visible)
    }

    #[must_use]
    pub fn with_base_paint(mut self, paint: Color) -> Self {
        self.base_paint = Some(paint);
        self
    }

    #[must_use]
    pub fn with_base_shape(mut self, shape: ItemShape) -> Self {
        self.base_shape = shape;
        self
    }

    #[must_use]
    pub fn with_base_item_label_visible(mut self, visible: bool) -> Self {
        self.base_item_label_visible = visible;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        let paints = self
            .series_paint
            .values()
            .chain(self.series_item_label_paint.values())
            .chain(self.base_paint)
            .chain(std::iter::once(self.base_item_label_paint));
        for paint in paints {
            paint.validate()?;
        }

        for shape in self.series_shape.values().chain(std::iter::once(self.base_shape)) {
            shape.validate()?;
        }

        let stroke_widths = self
            .series_stroke_width
            .values()
            .chain(std::iter::once(self.base_stroke_width));
        for width in stroke_widths {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "stroke width must be finite and > 0".to_owned(),
                ));
            }
        }

        let font_sizes = self
            .series_item_label_font_size_px
            .values()
            .chain(std::iter::once(self.base_item_label_font_size_px));
        for size in font_sizes {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(
                    "item label font size must be finite and > 0".to_owned(),
                ));
            }
        }

        if !self.item_label_anchor_offset.is_finite() || self.item_label_anchor_offset < 0.0 {
            return Err(ChartError::InvalidData(
                "style `item_label_anchor_offset` must be finite and >= 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Serializes the style to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize style: {e}")))
    }

    /// Deserializes and validates a style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse style: {e}")))?;
        style.validate()?;
        Ok(style)
    }
}
