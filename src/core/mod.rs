pub mod axis;
pub mod dataset;
pub mod range;
pub mod scale;
pub mod types;

pub use axis::{NumberAxis, RectangleEdge, ValueAxis};
pub use dataset::{
    IntervalXyDataset, XyDataset, YIntervalDataItem, YIntervalSeries, YIntervalSeriesCollection,
    find_domain_bounds_for_series, find_range_bounds, find_range_bounds_for_series,
};
pub use range::Range;
pub use scale::LinearScale;
pub use types::{PlotArea, SurfacePoint, Viewport};
