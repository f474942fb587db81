use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotArea, Range};
use crate::error::{ChartError, ChartResult};

/// Side of the data area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RectangleEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl RectangleEdge {
    #[must_use]
    pub fn is_top_or_bottom(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    #[must_use]
    pub fn is_left_or_right(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Maps data values into surface coordinates along one edge of a data area.
pub trait ValueAxis {
    /// Converts `value` into a surface coordinate.
    ///
    /// Top/bottom edges yield an X coordinate, left/right edges a Y coordinate.
    fn value_to_surface(&self, value: f64, area: PlotArea, edge: RectangleEdge)
    -> ChartResult<f64>;
}

/// Linear numeric axis with optional auto-ranging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberAxis {
    range: Range,
    #[serde(default)]
    inverted: bool,
    #[serde(default = "default_auto_range")]
    auto_range: bool,
    #[serde(default = "default_margin")]
    lower_margin: f64,
    #[serde(default = "default_margin")]
    upper_margin: f64,
    #[serde(default = "default_auto_range_minimum_size")]
    auto_range_minimum_size: f64,
}

impl Default for NumberAxis {
    fn default() -> Self {
        Self {
            range: Range::UNIT,
            inverted: false,
            auto_range: default_auto_range(),
            lower_margin: default_margin(),
            upper_margin: default_margin(),
            auto_range_minimum_size: default_auto_range_minimum_size(),
        }
    }
}

impl NumberAxis {
    /// Creates an auto-ranging axis seeded with `[lower, upper]`.
    pub fn new(lower: f64, upper: f64) -> ChartResult<Self> {
        let range = Range::new(lower, upper)?;
        if range.length() <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis range must have a non-zero length".to_owned(),
            ));
        }
        Ok(Self {
            range,
            ..Self::default()
        })
    }

    /// Creates an axis pinned to `[lower, upper]`; auto-ranging is disabled.
    pub fn fixed(lower: f64, upper: f64) -> ChartResult<Self> {
        Ok(Self::new(lower, upper)?.with_auto_range(false))
    }

    #[must_use]
    pub fn range(self) -> Range {
        self.range
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn is_auto_range(self) -> bool {
        self.auto_range
    }

    #[must_use]
    pub fn margins(self) -> (f64, f64) {
        (self.lower_margin, self.upper_margin)
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_auto_range(mut self, auto_range: bool) -> Self {
        self.auto_range = auto_range;
        self
    }

    pub fn with_margins(mut self, lower_margin: f64, upper_margin: f64) -> ChartResult<Self> {
        for (name, value) in [("lower_margin", lower_margin), ("upper_margin", upper_margin)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "axis `{name}` must be finite and >= 0"
                )));
            }
        }
        self.lower_margin = lower_margin;
        self.upper_margin = upper_margin;
        Ok(self)
    }

    pub fn with_auto_range_minimum_size(mut self, size: f64) -> ChartResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis auto range minimum size must be finite and > 0".to_owned(),
            ));
        }
        self.auto_range_minimum_size = size;
        Ok(self)
    }

    /// Sets an explicit range and switches auto-ranging off.
    pub fn set_range(&mut self, lower: f64, upper: f64) -> ChartResult<()> {
        let range = Range::new(lower, upper)?;
        if range.length() <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis range must have a non-zero length".to_owned(),
            ));
        }
        self.range = range;
        self.auto_range = false;
        Ok(())
    }

    /// Refits the axis to `data` when auto-ranging is enabled.
    ///
    /// Ranges shorter than the minimum size are widened around their center
    /// before margins are applied. The widening grows with the magnitude of
    /// the center so large values still yield a non-zero range. `None` keeps
    /// the current range.
    pub fn auto_adjust_range(&mut self, data: Option<Range>) -> ChartResult<()> {
        if !self.auto_range {
            return Ok(());
        }
        let Some(data) = data else {
            return Ok(());
        };

        let mut lower = data.lower();
        let mut upper = data.upper();
        if data.length() < self.auto_range_minimum_size {
            let center = data.central_value();
            let half = (self.auto_range_minimum_size / 2.0)
                .max(center.abs() * RELATIVE_WIDENING_FACTOR);
            lower = center - half;
            upper = center + half;
        }
        let range = Range::new(lower, upper)?.expand(self.lower_margin, self.upper_margin)?;
        if range.length() <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "auto range around {} collapsed to zero length",
                data.central_value()
            )));
        }
        self.range = range;
        Ok(())
    }

    /// Converts a surface coordinate back into a data value.
    pub fn surface_to_value(
        &self,
        coordinate: f64,
        area: PlotArea,
        edge: RectangleEdge,
    ) -> ChartResult<f64> {
        let (start, end) = self.span(area, edge);
        self.scale()?.span_to_domain(coordinate, start, end)
    }

    fn scale(&self) -> ChartResult<LinearScale> {
        LinearScale::new(self.range.lower(), self.range.upper())
    }

    fn span(&self, area: PlotArea, edge: RectangleEdge) -> (f64, f64) {
        let (start, end) = if edge.is_top_or_bottom() {
            (area.x, area.max_x())
        } else {
            (area.max_y(), area.y)
        };
        if self.inverted {
            (end, start)
        } else {
            (start, end)
        }
    }
}

impl ValueAxis for NumberAxis {
    fn value_to_surface(
        &self,
        value: f64,
        area: PlotArea,
        edge: RectangleEdge,
    ) -> ChartResult<f64> {
        let (start, end) = self.span(area, edge);
        self.scale()?.map_to_span(value, start, end)
    }
}

/// Half-width of a widened range relative to its center's magnitude.
const RELATIVE_WIDENING_FACTOR: f64 = 1e-6;

fn default_auto_range() -> bool {
    true
}

fn default_margin() -> f64 {
    0.05
}

fn default_auto_range_minimum_size() -> f64 {
    0.000_000_01
}
