//! XY item renderers.
//!
//! A renderer turns one `(series, item)` of an interval dataset into frame
//! primitives. Shared styling, label generators and change listeners live in
//! [`ItemRendererBase`], which concrete renderers hold by composition.

pub mod events;
pub mod labels;
pub mod style;
mod y_interval;

use std::sync::Arc;

use crate::core::{IntervalXyDataset, PlotArea, Range, SurfacePoint, ValueAxis};
use crate::entity::{EntityCollection, PlotRenderingInfo, XyItemEntity, XyUrlGenerator};
use crate::error::ChartResult;
use crate::plot::XyPlotLayout;
use crate::render::{RenderFrame, TextPrimitive};

pub use events::{ChangeNotifier, RendererChangeEvent, RendererChangeKind, RendererChangeListener};
pub use labels::{
    IntervalXyItemLabelGenerator, ItemLabelAnchor, ItemLabelPosition,
    StandardXyItemLabelGenerator, TextAnchor, XyItemLabelGenerator, XyToolTipGenerator,
};
pub use style::{DEFAULT_SERIES_PALETTE, RendererStyle, SeriesOverrides};
pub use y_interval::YIntervalRenderer;

/// Counters carried across the `draw_item` calls of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemRendererState {
    pub items_drawn: usize,
    pub items_skipped: usize,
}

/// Per-frame crosshair context handed to every `draw_item` call.
///
/// Interval items do not take part in crosshair snapping, so the state only
/// travels through the drawing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrosshairState;

/// Strategy turning dataset items into drawing primitives.
pub trait XyItemRenderer {
    /// Number of passes the plot runs over every item.
    fn pass_count(&self) -> usize {
        1
    }

    fn is_series_visible(&self, series: usize) -> bool;

    /// Y bounds the renderer needs to show every item, `None` when nothing is drawable.
    fn find_range_bounds(&self, dataset: Option<&dyn IntervalXyDataset>) -> Option<Range>;

    /// X bounds the renderer needs to show every item, `None` when nothing is drawable.
    fn find_domain_bounds(&self, dataset: Option<&dyn IntervalXyDataset>) -> Option<Range>;

    #[allow(clippy::too_many_arguments)]
    fn draw_item(
        &self,
        frame: &mut RenderFrame,
        state: &mut ItemRendererState,
        data_area: PlotArea,
        info: Option<&mut PlotRenderingInfo>,
        plot: &dyn XyPlotLayout,
        domain_axis: &dyn ValueAxis,
        range_axis: &dyn ValueAxis,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
        crosshair_state: Option<&mut CrosshairState>,
        pass: usize,
    ) -> ChartResult<()>;
}

/// Styling, generators and listeners shared by item renderers.
///
/// Every mutation emits exactly one [`RendererChangeEvent`]; setting a value
/// equal to the current one still notifies.
#[derive(Debug, Default)]
pub struct ItemRendererBase {
    style: RendererStyle,
    item_label_generator: Option<Arc<dyn XyItemLabelGenerator>>,
    tool_tip_generator: Option<Arc<dyn XyToolTipGenerator>>,
    url_generator: Option<Arc<dyn XyUrlGenerator>>,
    notifier: ChangeNotifier,
}

impl ItemRendererBase {
    pub fn new(style: RendererStyle) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self {
            style,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn style(&self) -> &RendererStyle {
        &self.style
    }

    /// Applies `update` to a copy of the style; the copy replaces the current
    /// style only when it validates.
    pub fn update_style<F>(&mut self, update: F) -> ChartResult<()>
    where
        F: FnOnce(&mut RendererStyle),
    {
        let mut next = self.style.clone();
        update(&mut next);
        next.validate()?;
        self.style = next;
        self.fire_change_event(RendererChangeKind::Style);
        Ok(())
    }

    #[must_use]
    pub fn item_label_generator(&self) -> Option<Arc<dyn XyItemLabelGenerator>> {
        self.item_label_generator.clone()
    }

    pub fn set_item_label_generator(&mut self, generator: Option<Arc<dyn XyItemLabelGenerator>>) {
        self.item_label_generator = generator;
        self.fire_change_event(RendererChangeKind::ItemLabelGenerator);
    }

    #[must_use]
    pub fn tool_tip_generator(&self) -> Option<Arc<dyn XyToolTipGenerator>> {
        self.tool_tip_generator.clone()
    }

    pub fn set_tool_tip_generator(&mut self, generator: Option<Arc<dyn XyToolTipGenerator>>) {
        self.tool_tip_generator = generator;
        self.fire_change_event(RendererChangeKind::ToolTipGenerator);
    }

    #[must_use]
    pub fn url_generator(&self) -> Option<Arc<dyn XyUrlGenerator>> {
        self.url_generator.clone()
    }

    pub fn set_url_generator(&mut self, generator: Option<Arc<dyn XyUrlGenerator>>) {
        self.url_generator = generator;
        self.fire_change_event(RendererChangeKind::UrlGenerator);
    }

    pub fn add_change_listener(
        &mut self,
        listener: Box<dyn RendererChangeListener>,
    ) -> ChartResult<()> {
        self.notifier.add_listener(listener)
    }

    pub fn remove_change_listener(&mut self, listener_id: &str) -> bool {
        self.notifier.remove_listener(listener_id)
    }

    #[must_use]
    pub fn change_listener_count(&self) -> usize {
        self.notifier.listener_count()
    }

    pub fn fire_change_event(&mut self, kind: RendererChangeKind) {
        self.notifier.notify(RendererChangeEvent::new(kind));
    }

    /// Copy sharing generator references; listeners are not carried over.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            style: self.style.clone(),
            item_label_generator: self.item_label_generator.clone(),
            tool_tip_generator: self.tool_tip_generator.clone(),
            url_generator: self.url_generator.clone(),
            notifier: ChangeNotifier::default(),
        }
    }

    /// Draws the regular item label above `point` using the positive label position.
    pub fn draw_item_label(
        &self,
        frame: &mut RenderFrame,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
        point: SurfacePoint,
    ) {
        let Some(generator) = self.item_label_generator.as_deref() else {
            return;
        };
        let position = self.style.positive_item_label_position(series, item);
        self.push_label(frame, generator, dataset, series, item, point, position);
    }

    /// Generates a label with `generator` and places it around `point`.
    #[allow(clippy::too_many_arguments)]
    pub fn push_label(
        &self,
        frame: &mut RenderFrame,
        generator: &dyn XyItemLabelGenerator,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
        point: SurfacePoint,
        position: ItemLabelPosition,
    ) {
        let Some(label) = generator.generate_label(dataset, series, item) else {
            return;
        };
        if label.is_empty() {
            return;
        }

        let anchor = position
            .item_label_anchor
            .anchor_point(point, self.style.item_label_anchor_offset);
        let (h_align, v_align) = position.text_anchor.alignment();
        let text = TextPrimitive::new(
            label,
            anchor.x,
            anchor.y,
            self.style.item_label_font_size_px(series, item),
            self.style.item_label_paint(series, item),
            h_align,
        )
        .with_v_align(v_align)
        .with_rotation(position.angle_rad);
        frame.texts.push(text);
    }

    /// Registers an entity covering `area` for the item.
    pub fn add_entity(
        &self,
        entities: &mut EntityCollection,
        area: PlotArea,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) {
        let tool_tip = self
            .tool_tip_generator
            .as_ref()
            .and_then(|generator| generator.generate_tool_tip(dataset, series, item));
        let url = self
            .url_generator
            .as_ref()
            .and_then(|generator| generator.generate_url(dataset, series, item));
        entities.add(XyItemEntity {
            area,
            series,
            item,
            series_key: dataset.series_key(series).map(str::to_owned),
            tool_tip,
            url,
        });
    }
}

impl PartialEq for ItemRendererBase {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style
            && same_reference(&self.item_label_generator, &other.item_label_generator)
            && same_reference(&self.tool_tip_generator, &other.tool_tip_generator)
            && same_reference(&self.url_generator, &other.url_generator)
    }
}

/// Reference identity for optional shared policy objects.
pub(crate) fn same_reference<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
