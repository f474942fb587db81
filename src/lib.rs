//! interval-chart: Y-interval item rendering for XY plots.
//!
//! Items of an interval dataset are drawn as a line between their start and
//! end Y values with a marker shape at both ends. Drawing produces a
//! backend-agnostic [`render::RenderFrame`] that a [`render::Renderer`]
//! (the validating null renderer or the optional Cairo backend) consumes.

pub mod core;
pub mod entity;
pub mod error;
pub mod plot;
pub mod render;
pub mod renderer;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use plot::{PlotOrientation, XyPlot, XyPlotConfig};
pub use renderer::{XyItemRenderer, YIntervalRenderer};
