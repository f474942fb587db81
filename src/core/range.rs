use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Inclusive numeric interval with `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// The `[0, 1]` range.
    pub const UNIT: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    pub fn new(lower: f64, upper: f64) -> ChartResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ChartError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if lower > upper {
            return Err(ChartError::InvalidData(format!(
                "range lower bound {lower} must be <= upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn central_value(self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Extends the range so it also covers `value`. Non-finite values are ignored.
    #[must_use]
    pub fn include(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        Self {
            lower: self.lower.min(value),
            upper: self.upper.max(value),
        }
    }

    /// Grows the range by fractions of its length on each side.
    pub fn expand(self, lower_margin: f64, upper_margin: f64) -> ChartResult<Self> {
        let length = self.length();
        Self::new(
            self.lower - length * lower_margin,
            self.upper + length * upper_margin,
        )
    }

    /// Builds the tightest range over an iterator of values, skipping missing (`NaN`) entries.
    ///
    /// Returns `None` when no finite value is present.
    pub fn spanning<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            min = min.min(value);
            max = max.max(value);
        }
        if min <= max {
            Some(Self {
                lower: min,
                upper: max,
            })
        } else {
            None
        }
    }
}
