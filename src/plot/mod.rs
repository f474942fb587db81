//! XY plot: axes, orientation and the per-item drawing loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{IntervalXyDataset, NumberAxis, PlotArea, RectangleEdge, Viewport};
use crate::entity::PlotRenderingInfo;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer};
use crate::renderer::{CrosshairState, ItemRendererState, XyItemRenderer};

/// Direction the domain axis runs in.
///
/// `Vertical` draws the domain axis horizontally and range values upwards;
/// `Horizontal` swaps the roles of X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlotOrientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Logical axis placement, resolved to an edge through the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLocation {
    TopOrLeft,
    BottomOrRight,
}

#[must_use]
pub fn resolve_domain_axis_edge(location: AxisLocation, orientation: PlotOrientation) -> RectangleEdge {
    match (location, orientation) {
        (AxisLocation::TopOrLeft, PlotOrientation::Vertical) => RectangleEdge::Top,
        (AxisLocation::BottomOrRight, PlotOrientation::Vertical) => RectangleEdge::Bottom,
        (AxisLocation::TopOrLeft, PlotOrientation::Horizontal) => RectangleEdge::Left,
        (AxisLocation::BottomOrRight, PlotOrientation::Horizontal) => RectangleEdge::Right,
    }
}

#[must_use]
pub fn resolve_range_axis_edge(location: AxisLocation, orientation: PlotOrientation) -> RectangleEdge {
    match (location, orientation) {
        (AxisLocation::TopOrLeft, PlotOrientation::Vertical) => RectangleEdge::Left,
        (AxisLocation::BottomOrRight, PlotOrientation::Vertical) => RectangleEdge::Right,
        (AxisLocation::TopOrLeft, PlotOrientation::Horizontal) => RectangleEdge::Top,
        (AxisLocation::BottomOrRight, PlotOrientation::Horizontal) => RectangleEdge::Bottom,
    }
}

/// Layout facts an item renderer reads from its plot.
///
/// `None` means the plot is not configured for that property; renderers
/// skip drawing instead of failing.
pub trait XyPlotLayout {
    fn domain_axis_edge(&self) -> Option<RectangleEdge>;
    fn range_axis_edge(&self) -> Option<RectangleEdge>;
    fn orientation(&self) -> Option<PlotOrientation>;
}

/// Space between the viewport border and the data area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            top: 10.0,
            left: 48.0,
            bottom: 32.0,
            right: 10.0,
        }
    }
}

/// Serializable plot setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XyPlotConfig {
    #[serde(default)]
    pub orientation: PlotOrientation,
    #[serde(default = "default_domain_axis_location")]
    pub domain_axis_location: AxisLocation,
    #[serde(default = "default_range_axis_location")]
    pub range_axis_location: AxisLocation,
    #[serde(default)]
    pub insets: PlotInsets,
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default = "default_outline_color")]
    pub outline_color: Option<Color>,
    #[serde(default = "default_outline_width")]
    pub outline_width: f64,
}

impl Default for XyPlotConfig {
    fn default() -> Self {
        Self {
            orientation: PlotOrientation::default(),
            domain_axis_location: default_domain_axis_location(),
            range_axis_location: default_range_axis_location(),
            insets: PlotInsets::default(),
            background_color: None,
            outline_color: default_outline_color(),
            outline_width: default_outline_width(),
        }
    }
}

impl XyPlotConfig {
    #[must_use]
    pub fn with_orientation(mut self, orientation: PlotOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_outline(mut self, color: Option<Color>, width: f64) -> Self {
        self.outline_color = color;
        self.outline_width = width;
        self
    }

    #[must_use]
    pub fn with_axis_locations(mut self, domain: AxisLocation, range: AxisLocation) -> Self {
        self.domain_axis_location = domain;
        self.range_axis_location = range;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        let PlotInsets {
            top,
            left,
            bottom,
            right,
        } = self.insets;
        for (name, value) in [
            ("top", top),
            ("left", left),
            ("bottom", bottom),
            ("right", right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot inset `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.outline_width.is_finite() || self.outline_width < 0.0 {
            return Err(ChartError::InvalidData(
                "plot outline width must be finite and >= 0".to_owned(),
            ));
        }
        for color in self.background_color.into_iter().chain(self.outline_color) {
            color.validate()?;
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

/// Plot hosting one interval dataset on a numeric domain and range axis.
#[derive(Debug, Clone, PartialEq)]
pub struct XyPlot {
    config: XyPlotConfig,
    domain_axis: NumberAxis,
    range_axis: NumberAxis,
}

impl XyPlot {
    pub fn new(config: XyPlotConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            domain_axis: NumberAxis::default(),
            range_axis: NumberAxis::default(),
        })
    }

    #[must_use]
    pub fn with_domain_axis(mut self, axis: NumberAxis) -> Self {
        self.domain_axis = axis;
        self
    }

    #[must_use]
    pub fn with_range_axis(mut self, axis: NumberAxis) -> Self {
        self.range_axis = axis;
        self
    }

    #[must_use]
    pub fn config(&self) -> XyPlotConfig {
        self.config
    }

    #[must_use]
    pub fn domain_axis(&self) -> &NumberAxis {
        &self.domain_axis
    }

    #[must_use]
    pub fn range_axis(&self) -> &NumberAxis {
        &self.range_axis
    }

    pub fn domain_axis_mut(&mut self) -> &mut NumberAxis {
        &mut self.domain_axis
    }

    pub fn range_axis_mut(&mut self) -> &mut NumberAxis {
        &mut self.range_axis
    }

    pub fn set_orientation(&mut self, orientation: PlotOrientation) {
        self.config.orientation = orientation;
    }

    /// Data area inside the viewport after insets.
    #[must_use]
    pub fn data_area(&self, viewport: Viewport) -> PlotArea {
        let insets = self.config.insets;
        viewport
            .area()
            .shrink(insets.top, insets.left, insets.bottom, insets.right)
    }

    /// Builds the frame for `dataset` drawn by `renderer`.
    ///
    /// Auto-ranging axes are refitted to the renderer's bounds first. Items
    /// are drawn pass by pass, series by series, in item order.
    pub fn build_render_frame(
        &mut self,
        renderer: &dyn XyItemRenderer,
        dataset: &dyn IntervalXyDataset,
        viewport: Viewport,
        mut info: Option<&mut PlotRenderingInfo>,
    ) -> ChartResult<RenderFrame> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let data_area = self.data_area(viewport);
        data_area.validate_drawable()?;

        if let Err(err) = self
            .domain_axis
            .auto_adjust_range(renderer.find_domain_bounds(Some(dataset)))
        {
            warn!(error = %err, "keeping previous domain axis range");
        }
        if let Err(err) = self
            .range_axis
            .auto_adjust_range(renderer.find_range_bounds(Some(dataset)))
        {
            warn!(error = %err, "keeping previous range axis range");
        }

        if let Some(info) = info.as_deref_mut() {
            info.data_area = Some(data_area);
        }

        let mut frame = RenderFrame::new(viewport);
        if let Some(background) = self.config.background_color {
            frame.rects.push(RectPrimitive::from_area(data_area, background));
        }

        let plot: &Self = self;
        let mut state = ItemRendererState::default();
        let mut crosshair = CrosshairState::default();
        for pass in 0..renderer.pass_count() {
            for series in 0..dataset.series_count() {
                if !renderer.is_series_visible(series) {
                    continue;
                }
                for item in 0..dataset.item_count(series) {
                    renderer.draw_item(
                        &mut frame,
                        &mut state,
                        data_area,
                        info.as_deref_mut(),
                        plot,
                        &plot.domain_axis,
                        &plot.range_axis,
                        dataset,
                        series,
                        item,
                        Some(&mut crosshair),
                        pass,
                    )?;
                }
            }
        }

        if let Some(outline) = self.config.outline_color {
            if self.config.outline_width > 0.0 {
                frame.rects.push(
                    RectPrimitive::from_area(data_area, Color::rgba(0.0, 0.0, 0.0, 0.0))
                        .with_border(self.config.outline_width, outline),
                );
            }
        }

        debug!(
            items_drawn = state.items_drawn,
            items_skipped = state.items_skipped,
            lines = frame.lines.len(),
            "built xy plot frame"
        );
        Ok(frame)
    }

    /// Builds the frame and hands it to `backend`.
    pub fn render<R: Renderer>(
        &mut self,
        backend: &mut R,
        renderer: &dyn XyItemRenderer,
        dataset: &dyn IntervalXyDataset,
        viewport: Viewport,
        info: Option<&mut PlotRenderingInfo>,
    ) -> ChartResult<()> {
        let frame = self.build_render_frame(renderer, dataset, viewport, info)?;
        backend.render(&frame)
    }
}

impl XyPlotLayout for XyPlot {
    fn domain_axis_edge(&self) -> Option<RectangleEdge> {
        Some(resolve_domain_axis_edge(
            self.config.domain_axis_location,
            self.config.orientation,
        ))
    }

    fn range_axis_edge(&self) -> Option<RectangleEdge> {
        Some(resolve_range_axis_edge(
            self.config.range_axis_location,
            self.config.orientation,
        ))
    }

    fn orientation(&self) -> Option<PlotOrientation> {
        Some(self.config.orientation)
    }
}

fn default_domain_axis_location() -> AxisLocation {
    AxisLocation::BottomOrRight
}

fn default_range_axis_location() -> AxisLocation {
    AxisLocation::TopOrLeft
}

fn default_outline_color() -> Option<Color> {
    Some(Color::rgb(0.5, 0.5, 0.5))
}

fn default_outline_width() -> f64 {
    1.0
}
