use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::angle::normalize_degrees;

/// One weighted, colored, labeled input entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceConfig {
    pub value: f64,
    pub color: Color,
    pub label: String,
}

impl SliceConfig {
    #[must_use]
    pub fn new(value: f64, color: Color, label: impl Into<String>) -> Self {
        Self {
            value,
            color,
            label: label.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "slice `{}` value must be finite and >= 0",
                self.label
            )));
        }
        self.color.validate()
    }
}

/// Angle-annotated slice owned by the chart state.
///
/// Angles are in degrees, measured clockwise from 3 o'clock in screen space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub value: f64,
    pub ratio: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color: Color,
    pub label: String,
    pub selected: bool,
    pub index: usize,
}

impl Slice {
    /// Zero-sweep slices are never drawn and never hit.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.sweep_angle > 0.0
    }

    /// Start angle after applying the chart rotation, in `[0, 360)`.
    #[must_use]
    pub fn rotated_start(&self, rotation: f64) -> f64 {
        normalize_degrees(self.start_angle + rotation)
    }

    /// Bisecting angle after applying the chart rotation, in `[0, 360)`.
    #[must_use]
    pub fn bisector(&self, rotation: f64) -> f64 {
        normalize_degrees(self.start_angle + self.sweep_angle / 2.0 + rotation)
    }
}
