use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::core::{IntervalXyDataset, SurfacePoint};
use crate::render::{TextHAlign, TextVAlign};

/// Produces the text of an item label.
///
/// Generators are shared between renderer duplicates, so implementations
/// must be immutable policy objects.
pub trait XyItemLabelGenerator: Debug + Send + Sync {
    fn generate_label(
        &self,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String>;
}

/// Produces the tooltip text attached to an item entity.
pub trait XyToolTipGenerator: Debug + Send + Sync {
    fn generate_tool_tip(
        &self,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String>;
}

pub const DEFAULT_ITEM_LABEL_FORMAT: &str = "{2}";
pub const DEFAULT_TOOL_TIP_FORMAT: &str = "{0}: ({1}, {2})";
pub const DEFAULT_INTERVAL_LABEL_FORMAT: &str = "{3} - {4}";

const MISSING_VALUE_TEXT: &str = "null";

/// Template-based generator.
///
/// Placeholders: `{0}` series key, `{1}` x, `{2}` y.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardXyItemLabelGenerator {
    format: String,
    decimals: usize,
}

impl Default for StandardXyItemLabelGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_LABEL_FORMAT)
    }
}

impl StandardXyItemLabelGenerator {
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            decimals: 2,
        }
    }

    /// Generator using the default tooltip template.
    #[must_use]
    pub fn tool_tips() -> Self {
        Self::new(DEFAULT_TOOL_TIP_FORMAT)
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    fn render(&self, dataset: &dyn IntervalXyDataset, series: usize, item: usize) -> String {
        let values = [
            series_key_text(dataset, series),
            format_value(dataset.x_value(series, item), self.decimals),
            format_value(dataset.y_value(series, item), self.decimals),
        ];
        apply_template(&self.format, &values)
    }
}

impl XyItemLabelGenerator for StandardXyItemLabelGenerator {
    fn generate_label(
        &self,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String> {
        Some(self.render(dataset, series, item))
    }
}

impl XyToolTipGenerator for StandardXyItemLabelGenerator {
    fn generate_tool_tip(
        &self,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String> {
        Some(self.render(dataset, series, item))
    }
}

/// Template-based generator that also exposes the Y interval.
///
/// Placeholders: `{0}` series key, `{1}` x, `{2}` y, `{3}` start y, `{4}` end y.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalXyItemLabelGenerator {
    format: String,
    decimals: usize,
}

impl Default for IntervalXyItemLabelGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_LABEL_FORMAT)
    }
}

impl IntervalXyItemLabelGenerator {
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            decimals: 2,
        }
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl XyItemLabelGenerator for IntervalXyItemLabelGenerator {
    fn generate_label(
        &self,
        dataset: &dyn IntervalXyDataset,
        series: usize,
        item: usize,
    ) -> Option<String> {
        let values = [
            series_key_text(dataset, series),
            format_value(dataset.x_value(series, item), self.decimals),
            format_value(dataset.y_value(series, item), self.decimals),
            format_value(dataset.start_y_value(series, item), self.decimals),
            format_value(dataset.end_y_value(series, item), self.decimals),
        ];
        Some(apply_template(&self.format, &values))
    }
}

fn series_key_text(dataset: &dyn IntervalXyDataset, series: usize) -> String {
    dataset
        .series_key(series)
        .map_or_else(|| format!("Series {series}"), str::to_owned)
}

fn format_value(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        MISSING_VALUE_TEXT.to_owned()
    } else {
        format!("{value:.decimals$}")
    }
}

/// Substitutes `{N}` placeholders in one pass; inserted values are never rescanned.
/// Unknown placeholders and unmatched braces are kept as written.
fn apply_template(template: &str, values: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let digits = &after[..close];
            if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                return None;
            }
            let index = digits.parse::<usize>().ok()?;
            values.get(index).map(|value| (value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Clock-face position of an item label relative to its data point.
///
/// `InsideN` sits one anchor offset away from the point at N o'clock,
/// `OutsideN` two offsets away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemLabelAnchor {
    Center,
    Inside1,
    Inside2,
    Inside3,
    Inside4,
    Inside5,
    Inside6,
    Inside7,
    Inside8,
    Inside9,
    Inside10,
    Inside11,
    Inside12,
    Outside1,
    Outside2,
    Outside3,
    Outside4,
    Outside5,
    Outside6,
    Outside7,
    Outside8,
    Outside9,
    Outside10,
    Outside11,
    Outside12,
}

// cos(30°) and sin(30°).
const ADJ: f64 = 0.866_025_403_784_438_6;
const OPP: f64 = 0.5;

impl ItemLabelAnchor {
    /// `(hour, distance multiplier)`; `None` for `Center`.
    fn clock(self) -> Option<(u8, f64)> {
        use ItemLabelAnchor::*;
        let entry = match self {
            Center => return None,
            Inside1 => (1, 1.0),
            Inside2 => (2, 1.0),
            Inside3 => (3, 1.0),
            Inside4 => (4, 1.0),
            Inside5 => (5, 1.0),
            Inside6 => (6, 1.0),
            Inside7 => (7, 1.0),
            Inside8 => (8, 1.0),
            Inside9 => (9, 1.0),
            Inside10 => (10, 1.0),
            Inside11 => (11, 1.0),
            Inside12 => (12, 1.0),
            Outside1 => (1, 2.0),
            Outside2 => (2, 2.0),
            Outside3 => (3, 2.0),
            Outside4 => (4, 2.0),
            Outside5 => (5, 2.0),
            Outside6 => (6, 2.0),
            Outside7 => (7, 2.0),
            Outside8 => (8, 2.0),
            Outside9 => (9, 2.0),
            Outside10 => (10, 2.0),
            Outside11 => (11, 2.0),
            Outside12 => (12, 2.0),
        };
        Some(entry)
    }

    /// Anchor point for a label attached to `point`, `offset` pixels per step.
    #[must_use]
    pub fn anchor_point(self, point: SurfacePoint, offset: f64) -> SurfacePoint {
        let Some((hour, multiplier)) = self.clock() else {
            return point;
        };
        let (dx, dy) = match hour {
            1 => (OPP, -ADJ),
            2 => (ADJ, -OPP),
            3 => (1.0, 0.0),
            4 => (ADJ, OPP),
            5 => (OPP, ADJ),
            6 => (0.0, 1.0),
            7 => (-OPP, ADJ),
            8 => (-ADJ, OPP),
            9 => (-1.0, 0.0),
            10 => (-ADJ, -OPP),
            11 => (-OPP, -ADJ),
            _ => (0.0, -1.0),
        };
        let distance = offset * multiplier;
        SurfacePoint::new(point.x + dx * distance, point.y + dy * distance)
    }
}

/// Which point of the label text box sits on the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAnchor {
    #[must_use]
    pub fn alignment(self) -> (TextHAlign, TextVAlign) {
        match self {
            Self::TopLeft => (TextHAlign::Left, TextVAlign::Top),
            Self::TopCenter => (TextHAlign::Center, TextVAlign::Top),
            Self::TopRight => (TextHAlign::Right, TextVAlign::Top),
            Self::CenterLeft => (TextHAlign::Left, TextVAlign::Middle),
            Self::Center => (TextHAlign::Center, TextVAlign::Middle),
            Self::CenterRight => (TextHAlign::Right, TextVAlign::Middle),
            Self::BottomLeft => (TextHAlign::Left, TextVAlign::Bottom),
            Self::BottomCenter => (TextHAlign::Center, TextVAlign::Bottom),
            Self::BottomRight => (TextHAlign::Right, TextVAlign::Bottom),
        }
    }
}

/// Placement policy for an item label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemLabelPosition {
    pub item_label_anchor: ItemLabelAnchor,
    pub text_anchor: TextAnchor,
    /// Rotation around the anchor point, clockwise in surface space.
    #[serde(default)]
    pub angle_rad: f64,
}

impl Default for ItemLabelPosition {
    /// Above the point: `Outside12`, text bottom-centered.
    fn default() -> Self {
        Self::new(ItemLabelAnchor::Outside12, TextAnchor::BottomCenter)
    }
}

impl ItemLabelPosition {
    #[must_use]
    pub const fn new(item_label_anchor: ItemLabelAnchor, text_anchor: TextAnchor) -> Self {
        Self {
            item_label_anchor,
            text_anchor,
            angle_rad: 0.0,
        }
    }

    /// Below the point: `Outside6`, text top-centered.
    #[must_use]
    pub const fn below() -> Self {
        Self::new(ItemLabelAnchor::Outside6, TextAnchor::TopCenter)
    }

    #[must_use]
    pub const fn with_angle(mut self, angle_rad: f64) -> Self {
        self.angle_rad = angle_rad;
        self
    }
}
