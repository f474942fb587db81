use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlotArea, SurfacePoint};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash effect applied to stroked lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStrokeStyle {
    /// On/off dash lengths scaled by stroke width, `None` for solid strokes.
    #[must_use]
    pub fn dash_pattern(self, stroke_width: f64) -> Option<[f64; 2]> {
        let unit = stroke_width.max(1.0);
        match self {
            Self::Solid => None,
            Self::Dashed => Some([4.0 * unit, 3.0 * unit]),
            Self::Dotted => Some([unit, 2.0 * unit]),
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    #[must_use]
    pub fn start(self) -> SurfacePoint {
        SurfacePoint::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(self) -> SurfacePoint {
        SurfacePoint::new(self.x2, self.y2)
    }

    /// Axis-aligned bounds of the segment (degenerate for vertical/horizontal lines).
    #[must_use]
    pub fn bounds(self) -> PlotArea {
        PlotArea::bounding(self.start(), self.end())
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.start().is_finite() || !self.end().is_finite() {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled (optionally bordered) rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub fn from_area(area: PlotArea, fill_color: Color) -> Self {
        Self::new(area.x, area.y, area.width, area.height, fill_color)
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Marker shape drawn around an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemShape {
    Square { size: f64 },
    Rect { width: f64, height: f64 },
    Circle { diameter: f64 },
    Diamond { size: f64 },
    TriangleUp { size: f64 },
    TriangleDown { size: f64 },
}

impl Default for ItemShape {
    fn default() -> Self {
        Self::Square { size: 6.0 }
    }
}

/// Outline of an [`ItemShape`] translated to surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeOutline {
    Polygon(SmallVec<[SurfacePoint; 4]>),
    Ellipse {
        center: SurfacePoint,
        radius_x: f64,
        radius_y: f64,
    },
}

impl ItemShape {
    fn extent(self) -> (f64, f64) {
        match self {
            Self::Square { size }
            | Self::Diamond { size }
            | Self::TriangleUp { size }
            | Self::TriangleDown { size } => (size, size),
            Self::Rect { width, height } => (width, height),
            Self::Circle { diameter } => (diameter, diameter),
        }
    }

    /// Returns the outline of this shape centered on `center`.
    #[must_use]
    pub fn translated(self, center: SurfacePoint) -> ShapeOutline {
        let (width, height) = self.extent();
        let hw = width * 0.5;
        let hh = height * 0.5;
        let (cx, cy) = (center.x, center.y);
        let points: SmallVec<[SurfacePoint; 4]> = match self {
            Self::Circle { .. } => {
                return ShapeOutline::Ellipse {
                    center,
                    radius_x: hw,
                    radius_y: hh,
                };
            }
            Self::Square { .. } | Self::Rect { .. } => smallvec::smallvec![
                SurfacePoint::new(cx - hw, cy - hh),
                SurfacePoint::new(cx + hw, cy - hh),
                SurfacePoint::new(cx + hw, cy + hh),
                SurfacePoint::new(cx - hw, cy + hh),
            ],
            Self::Diamond { .. } => smallvec::smallvec![
                SurfacePoint::new(cx, cy - hh),
                SurfacePoint::new(cx + hw, cy),
                SurfacePoint::new(cx, cy + hh),
                SurfacePoint::new(cx - hw, cy),
            ],
            Self::TriangleUp { .. } => smallvec::smallvec![
                SurfacePoint::new(cx, cy - hh),
                SurfacePoint::new(cx + hw, cy + hh),
                SurfacePoint::new(cx - hw, cy + hh),
            ],
            Self::TriangleDown { .. } => smallvec::smallvec![
                SurfacePoint::new(cx - hw, cy - hh),
                SurfacePoint::new(cx + hw, cy - hh),
                SurfacePoint::new(cx, cy + hh),
            ],
        };
        ShapeOutline::Polygon(points)
    }

    /// Bounding rectangle of the shape centered on `center`.
    #[must_use]
    pub fn bounds(self, center: SurfacePoint) -> PlotArea {
        let (width, height) = self.extent();
        PlotArea::new(
            center.x - width * 0.5,
            center.y - height * 0.5,
            width,
            height,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        let (width, height) = self.extent();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "item shape size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one filled marker shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePrimitive {
    pub shape: ItemShape,
    pub center: SurfacePoint,
    pub fill_color: Color,
}

impl ShapePrimitive {
    #[must_use]
    pub const fn new(shape: ItemShape, center: SurfacePoint, fill_color: Color) -> Self {
        Self {
            shape,
            center,
            fill_color,
        }
    }

    #[must_use]
    pub fn outline(self) -> ShapeOutline {
        self.shape.translated(self.center)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "shape center must be finite".to_owned(),
            ));
        }
        self.shape.validate()?;
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one label in pixel space.
///
/// The text is aligned against `(x, y)` and then rotated by `rotation_rad`
/// around that same point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation_rad: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Top,
            rotation_rad: 0.0,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_rad: f64) -> Self {
        self.rotation_rad = rotation_rad;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_rad.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates and rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
