use std::sync::Arc;

use tracing::trace;

use crate::core::{
    IntervalXyDataset, PlotArea, Range, SurfacePoint, ValueAxis, find_domain_bounds_for_series,
    find_range_bounds_for_series,
};
use crate::entity::PlotRenderingInfo;
use crate::error::ChartResult;
use crate::plot::{PlotOrientation, XyPlotLayout};
use crate::render::{LinePrimitive, RenderFrame, ShapePrimitive};

use super::{
    CrosshairState, ItemRendererBase, ItemRendererState, RendererChangeKind, RendererStyle,
    XyItemLabelGenerator, XyItemRenderer, same_reference,
};

/// Draws a line between the start and end Y values of each item, capped by
/// the series shape at both ends.
///
/// The regular item label is placed near the upper (end) value. An optional
/// additional generator places a second label near the lower (start) value
/// using the negative label position.
#[derive(Debug, Default)]
pub struct YIntervalRenderer {
    base: ItemRendererBase,
    additional_item_label_generator: Option<Arc<dyn XyItemLabelGenerator>>,
}

impl YIntervalRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: RendererStyle) -> ChartResult<Self> {
        Ok(Self {
            base: ItemRendererBase::new(style)?,
            additional_item_label_generator: None,
        })
    }

    #[must_use]
    pub fn base(&self) -> &ItemRendererBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ItemRendererBase {
        &mut self.base
    }

    #[must_use]
    pub fn style(&self) -> &RendererStyle {
        self.base.style()
    }

    /// Generator for labels near the lower Y value, if any.
    #[must_use]
    pub fn additional_item_label_generator(&self) -> Option<Arc<dyn XyItemLabelGenerator>> {
        self.additional_item_label_generator.clone()
    }

    /// Replaces the lower-value label generator and notifies listeners.
    ///
    /// `None` disables the additional label.
    pub fn set_additional_item_label_generator(
        &mut self,
        generator: Option<Arc<dyn XyItemLabelGenerator>>,
    ) {
        self.additional_item_label_generator = generator;
        self.base
            .fire_change_event(RendererChangeKind::AdditionalItemLabelGenerator);
    }

    /// Independent copy that shares the label generator references.
    ///
    /// Change listeners stay with the original.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            base: self.base.duplicate(),
            additional_item_label_generator: self.additional_item_label_generator.clone(),
        }
    }

    fn draw_additional_item_label(
        &self,
        frame: &mut RenderFrame,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
        point: SurfacePoint,
    ) {
        let Some(generator) = self.additional_item_label_generator.as_deref() else {
            return;
        };
        let position = self.style().negative_item_label_position(series, item);
        self.base
            .push_label(frame, generator, dataset, series, item, point, position);
    }

    fn bounds_series(&self, dataset: &dyn IntervalXyDataset) -> Vec<usize> {
        let style = self.style();
        (0..dataset.series_count())
            .filter(|&series| {
                !style.data_bounds_include_visible_series_only || style.is_series_visible(series)
            })
            .collect()
    }
}

impl Clone for YIntervalRenderer {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl PartialEq for YIntervalRenderer {
    fn eq(&self, other: &Self) -> bool {
        same_reference(
            &self.additional_item_label_generator,
            &other.additional_item_label_generator,
        ) && self.base == other.base
    }
}

impl XyItemRenderer for YIntervalRenderer {
    fn is_series_visible(&self, series: usize) -> bool {
        self.style().is_series_visible(series)
    }

    /// Spans the start and end Y values, which may reach beyond the primary Y value.
    fn find_range_bounds(&self, dataset: Option<&dyn IntervalXyDataset>) -> Option<Range> {
        let dataset = dataset?;
        find_range_bounds_for_series(dataset, self.bounds_series(dataset), true)
    }

    fn find_domain_bounds(&self, dataset: Option<&dyn IntervalXyDataset>) -> Option<Range> {
        let dataset = dataset?;
        find_domain_bounds_for_series(dataset, self.bounds_series(dataset))
    }

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
        _crosshair_state: Option<&mut CrosshairState>,
        _pass: usize,
    ) -> ChartResult<()> {
        let x = dataset.x_value(series, item);
        let y_low = dataset.start_y_value(series, item);
        let y_high = dataset.end_y_value(series, item);
        if !x.is_finite() || !y_low.is_finite() || !y_high.is_finite() {
            trace!(series, item, "skip interval item with missing value");
            state.items_skipped += 1;
            return Ok(());
        }

        let (Some(domain_edge), Some(range_edge), Some(orientation)) = (
            plot.domain_axis_edge(),
            plot.range_axis_edge(),
            plot.orientation(),
        ) else {
            trace!(series, item, "skip interval item without axis edges or orientation");
            state.items_skipped += 1;
            return Ok(());
        };

        let xx = domain_axis.value_to_surface(x, data_area, domain_edge)?;
        let yy_low = range_axis.value_to_surface(y_low, data_area, range_edge)?;
        let yy_high = range_axis.value_to_surface(y_high, data_area, range_edge)?;

        let (low, high) = match orientation {
            PlotOrientation::Horizontal => (
                SurfacePoint::new(yy_low, xx),
                SurfacePoint::new(yy_high, xx),
            ),
            PlotOrientation::Vertical => (
                SurfacePoint::new(xx, yy_low),
                SurfacePoint::new(xx, yy_high),
            ),
        };

        let style = self.style();
        let paint = style.item_paint(series, item);
        let shape = style.item_shape(series, item);
        let line = LinePrimitive::new(
            low.x,
            low.y,
            high.x,
            high.y,
            style.item_stroke_width(series, item),
            paint,
        )
        .with_stroke_style(style.item_stroke_style(series, item));
        frame.lines.push(line);
        frame.shapes.push(ShapePrimitive::new(shape, high, paint));
        frame.shapes.push(ShapePrimitive::new(shape, low, paint));

        if style.is_item_label_visible(series, item) {
            self.base
                .draw_item_label(frame, dataset, series, item, high);
            self.draw_additional_item_label(frame, dataset, series, item, low);
        }

        if let Some(entities) = info.and_then(PlotRenderingInfo::entities_mut) {
            self.base
                .add_entity(entities, line.bounds(), dataset, series, item);
        }

        state.items_drawn += 1;
        Ok(())
    }
}
