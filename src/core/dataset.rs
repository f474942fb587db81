use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::Range;
use crate::error::{ChartError, ChartResult};

/// Read-only XY data source addressed by `(series, item)`.
///
/// Value accessors return `f64::NAN` for missing values and for indices that
/// are out of bounds.
pub trait XyDataset {
    fn series_count(&self) -> usize;
    fn series_key(&self, series: usize) -> Option<&str>;
    fn item_count(&self, series: usize) -> usize;
    fn x_value(&self, series: usize, item: usize) -> f64;
    fn y_value(&self, series: usize, item: usize) -> f64;
}

/// XY data source whose items also carry a Y interval.
pub trait IntervalXyDataset: XyDataset {
    fn start_y_value(&self, series: usize, item: usize) -> f64;
    fn end_y_value(&self, series: usize, item: usize) -> f64;
}

/// Y bounds over every series.
///
/// With `include_interval` the start/end Y values are scanned instead of the
/// primary Y value; both ends feed both bounds so inverted intervals are
/// still covered.
#[must_use]
pub fn find_range_bounds(dataset: &dyn IntervalXyDataset, include_interval: bool) -> Option<Range> {
    find_range_bounds_for_series(dataset, 0..dataset.series_count(), include_interval)
}

/// Y bounds restricted to the given series indices.
#[must_use]
pub fn find_range_bounds_for_series<I>(
    dataset: &dyn IntervalXyDataset,
    series: I,
    include_interval: bool,
) -> Option<Range>
where
    I: IntoIterator<Item = usize>,
{
    let values = series.into_iter().flat_map(|series| {
        (0..dataset.item_count(series)).flat_map(move |item| {
            if include_interval {
                [
                    dataset.start_y_value(series, item),
                    dataset.end_y_value(series, item),
                ]
            } else {
                let y = dataset.y_value(series, item);
                [y, y]
            }
        })
    });
    Range::spanning(values)
}

/// X bounds restricted to the given series indices.
#[must_use]
pub fn find_domain_bounds_for_series<I>(dataset: &dyn IntervalXyDataset, series: I) -> Option<Range>
where
    I: IntoIterator<Item = usize>,
{
    let values = series.into_iter().flat_map(|series| {
        (0..dataset.item_count(series)).map(move |item| dataset.x_value(series, item))
    });
    Range::spanning(values)
}

/// One observation with a primary Y value and a Y interval.
///
/// `x` must be finite. `y`, `y_low` and `y_high` may be `NaN` to mark a
/// missing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YIntervalDataItem {
    pub x: f64,
    pub y: f64,
    pub y_low: f64,
    pub y_high: f64,
}

impl YIntervalDataItem {
    pub fn new(x: f64, y: f64, y_low: f64, y_high: f64) -> ChartResult<Self> {
        if !x.is_finite() {
            return Err(ChartError::InvalidData(
                "interval item x must be finite".to_owned(),
            ));
        }
        for (name, value) in [("y", y), ("y_low", y_low), ("y_high", y_high)] {
            if value.is_infinite() {
                return Err(ChartError::InvalidData(format!(
                    "interval item `{name}` must be finite or NaN"
                )));
            }
        }
        Ok(Self {
            x,
            y,
            y_low,
            y_high,
        })
    }

    /// Converts strongly-typed temporal/decimal input into an interval item.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        y: Decimal,
        y_low: Decimal,
        y_high: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(y, "y")?,
            decimal_to_f64(y_low, "y_low")?,
            decimal_to_f64(y_high, "y_high")?,
        )
    }
}

/// Ordered sequence of interval items sharing one series key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YIntervalSeries {
    key: String,
    items: Vec<YIntervalDataItem>,
    #[serde(default = "default_auto_sort")]
    auto_sort: bool,
    #[serde(default = "default_allow_duplicate_xs")]
    allow_duplicate_xs: bool,
}

impl YIntervalSeries {
    /// Creates an empty series that keeps items sorted by x.
    pub fn new(key: impl Into<String>) -> ChartResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(ChartError::InvalidData(
                "series key must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            key,
            items: Vec::new(),
            auto_sort: default_auto_sort(),
            allow_duplicate_xs: default_allow_duplicate_xs(),
        })
    }

    #[must_use]
    pub fn with_auto_sort(mut self, auto_sort: bool) -> Self {
        self.auto_sort = auto_sort;
        if auto_sort {
            self.items.sort_by_key(|item| OrderedFloat(item.x));
        }
        self
    }

    #[must_use]
    pub fn with_allow_duplicate_xs(mut self, allow: bool) -> Self {
        self.allow_duplicate_xs = allow;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[YIntervalDataItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&YIntervalDataItem> {
        self.items.get(index)
    }

    pub fn add(&mut self, item: YIntervalDataItem) -> ChartResult<()> {
        if !self.allow_duplicate_xs && self.items.iter().any(|existing| existing.x == item.x) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` already contains an item at x={}",
                self.key, item.x
            )));
        }

        if self.auto_sort {
            // Insert after equal keys so duplicates keep arrival order.
            let position = self
                .items
                .partition_point(|existing| OrderedFloat(existing.x) <= OrderedFloat(item.x));
            self.items.insert(position, item);
        } else {
            self.items.push(item);
        }
        Ok(())
    }

    pub fn add_values(&mut self, x: f64, y: f64, y_low: f64, y_high: f64) -> ChartResult<()> {
        self.add(YIntervalDataItem::new(x, y, y_low, y_high)?)
    }

    pub fn remove(&mut self, index: usize) -> Option<YIntervalDataItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks the invariants `new` and `add` maintain.
    ///
    /// Needed for series that did not go through those constructors, such as
    /// deserialized ones.
    pub fn validate(&self) -> ChartResult<()> {
        if self.key.is_empty() {
            return Err(ChartError::InvalidData(
                "series key must not be empty".to_owned(),
            ));
        }
        for item in &self.items {
            YIntervalDataItem::new(item.x, item.y, item.y_low, item.y_high)?;
        }
        for pair in self.items.windows(2) {
            if self.auto_sort && pair[1].x < pair[0].x {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` is sorted but x={} follows x={}",
                    self.key, pair[1].x, pair[0].x
                )));
            }
        }
        if !self.allow_duplicate_xs {
            let mut xs: Vec<_> = self.items.iter().map(|item| OrderedFloat(item.x)).collect();
            xs.sort_unstable();
            if let Some(pair) = xs.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` already contains an item at x={}",
                    self.key, pair[0]
                )));
            }
        }
        Ok(())
    }
}

/// Interval series keyed by series key, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YIntervalSeriesCollection {
    series: IndexMap<String, YIntervalSeries>,
}

impl YIntervalSeriesCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series; keys must be unique within the collection.
    pub fn add_series(&mut self, series: YIntervalSeries) -> ChartResult<()> {
        if self.series.contains_key(series.key()) {
            return Err(ChartError::InvalidData(format!(
                "series with key `{}` is already present",
                series.key()
            )));
        }
        self.series.insert(series.key().to_owned(), series);
        Ok(())
    }

    pub fn with_series(mut self, series: YIntervalSeries) -> ChartResult<Self> {
        self.add_series(series)?;
        Ok(self)
    }

    pub fn remove_series(&mut self, key: &str) -> Option<YIntervalSeries> {
        self.series.shift_remove(key)
    }

    #[must_use]
    pub fn series(&self, index: usize) -> Option<&YIntervalSeries> {
        self.series.get_index(index).map(|(_, series)| series)
    }

    pub fn series_mut(&mut self, key: &str) -> Option<&mut YIntervalSeries> {
        self.series.get_mut(key)
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.series.get_index_of(key)
    }

    /// Serializes the collection to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize dataset: {e}")))
    }

    /// Deserializes and validates a collection from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let collection: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset: {e}")))?;
        collection.validate()?;
        Ok(collection)
    }

    /// Checks every series and that each one is stored under its own key.
    pub fn validate(&self) -> ChartResult<()> {
        for (key, series) in &self.series {
            if key != series.key() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` is stored under key `{key}`",
                    series.key()
                )));
            }
            series.validate()?;
        }
        Ok(())
    }

    fn item(&self, series: usize, item: usize) -> Option<&YIntervalDataItem> {
        self.series(series).and_then(|entry| entry.get(item))
    }
}

impl XyDataset for YIntervalSeriesCollection {
    fn series_count(&self) -> usize {
        self.series.len()
    }

    fn series_key(&self, series: usize) -> Option<&str> {
        self.series(series).map(YIntervalSeries::key)
    }

    fn item_count(&self, series: usize) -> usize {
        self.series(series).map_or(0, YIntervalSeries::len)
    }

    fn x_value(&self, series: usize, item: usize) -> f64 {
        self.item(series, item).map_or(f64::NAN, |entry| entry.x)
    }

    fn y_value(&self, series: usize, item: usize) -> f64 {
        self.item(series, item).map_or(f64::NAN, |entry| entry.y)
    }
}

impl IntervalXyDataset for YIntervalSeriesCollection {
    fn start_y_value(&self, series: usize, item: usize) -> f64 {
        self.item(series, item).map_or(f64::NAN, |entry| entry.y_low)
    }

    fn end_y_value(&self, series: usize, item: usize) -> f64 {
        self.item(series, item).map_or(f64::NAN, |entry| entry.y_high)
    }
}

fn default_auto_sort() -> bool {
    true
}

fn default_allow_duplicate_xs() -> bool {
    true
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
