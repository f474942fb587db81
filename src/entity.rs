//! Interactive regions registered while drawing.
//!
//! Item renderers register one [`XyItemEntity`] per drawn item so hosts can
//! hit-test pointer positions for tooltips and click handling.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::{IntervalXyDataset, PlotArea, SurfacePoint};

/// Clickable/hoverable region tied to one dataset item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XyItemEntity {
    pub area: PlotArea,
    pub series: usize,
    pub item: usize,
    pub series_key: Option<String>,
    pub tool_tip: Option<String>,
    pub url: Option<String>,
}

/// Ordered store of entities for one rendering pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityCollection {
    entities: Vec<XyItemEntity>,
}

impl EntityCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: XyItemEntity) {
        self.entities.push(entity);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &XyItemEntity> {
        self.entities.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&XyItemEntity> {
        self.entities.get(index)
    }

    /// Topmost entity containing `point`; later registrations win.
    #[must_use]
    pub fn entity_at(&self, point: SurfacePoint) -> Option<&XyItemEntity> {
        self.entities
            .iter()
            .rev()
            .find(|entity| entity.area.contains(point))
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

/// Per-plot information collected during drawing.
///
/// Entities are only recorded when the info owns a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotRenderingInfo {
    pub data_area: Option<PlotArea>,
    entities: Option<EntityCollection>,
}

impl PlotRenderingInfo {
    /// Info without entity collection: drawing records only the data area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Info that also collects item entities.
    #[must_use]
    pub fn with_entities() -> Self {
        Self {
            data_area: None,
            entities: Some(EntityCollection::new()),
        }
    }

    #[must_use]
    pub fn entities(&self) -> Option<&EntityCollection> {
        self.entities.as_ref()
    }

    pub fn entities_mut(&mut self) -> Option<&mut EntityCollection> {
        self.entities.as_mut()
    }
}

/// Produces a URL for an item entity (image-map style drill down).
pub trait XyUrlGenerator: Debug + Send + Sync {
    fn generate_url(
        &self,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String>;
}

/// Appends `series` and `item` query parameters to a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardXyUrlGenerator {
    prefix: String,
    series_parameter_name: String,
    item_parameter_name: String,
}

impl Default for StandardXyUrlGenerator {
    fn default() -> Self {
        Self::new("index.html")
    }
}

impl StandardXyUrlGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            series_parameter_name: "series".to_owned(),
            item_parameter_name: "item".to_owned(),
        }
    }

    #[must_use]
    pub fn with_parameter_names(
        mut self,
        series_parameter_name: impl Into<String>,
        item_parameter_name: impl Into<String>,
    ) -> Self {
        self.series_parameter_name = series_parameter_name.into();
        self.item_parameter_name = item_parameter_name.into();
        self
    }
}

impl XyUrlGenerator for StandardXyUrlGenerator {
    fn generate_url(
        &self,
        _dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String> {
        let separator = if self.prefix.contains('?') { '&' } else { '?' };
        Some(format!(
            "{}{separator}{}={series}&{}={item}",
            self.prefix, self.series_parameter_name, self.item_parameter_name
        ))
    }
}
