use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::Color;

/// Vertical breathing room added above and below the chart by
/// [`PieChartConfig::preferred_height`].
pub const PREFERRED_HEIGHT_PADDING_PX: f64 = 2.0;

/// Public engine configuration.
///
/// This is the flat struct a styling layer feeds the engine. It is
/// serializable so hosts can persist chart setup; every field except the
/// viewport has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Distance the selected wedge is pulled out along its bisector.
    #[serde(default = "default_selection_offset")]
    pub selection_offset: f64,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    /// `true` draws `"12.5%"`, `false` draws `"label(12.5%)"`.
    #[serde(default)]
    pub show_ratio_only: bool,
    /// Radial connector segment beyond the pie edge.
    #[serde(default = "default_connector_length1")]
    pub connector_length1: f64,
    /// Horizontal connector segment ending at the label.
    #[serde(default = "default_connector_length2")]
    pub connector_length2: f64,
    #[serde(default = "default_rotation_enabled")]
    pub rotation_enabled: bool,
    /// Platform touch slop; moves at or below it never rotate.
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
    #[serde(default = "default_connector_stroke_width")]
    pub connector_stroke_width: f64,
}

impl PieChartConfig {
    /// Creates a config with default pie styling for the given drawing area.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            radius: default_radius(),
            selection_offset: default_selection_offset(),
            text_size: default_text_size(),
            text_color: default_text_color(),
            show_ratio_only: false,
            connector_length1: default_connector_length1(),
            connector_length2: default_connector_length2(),
            rotation_enabled: default_rotation_enabled(),
            drag_threshold_px: default_drag_threshold_px(),
            connector_stroke_width: default_connector_stroke_width(),
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_selection_offset(mut self, selection_offset: f64) -> Self {
        self.selection_offset = selection_offset;
        self
    }

    #[must_use]
    pub fn with_text_style(mut self, text_size: f64, text_color: Color) -> Self {
        self.text_size = text_size;
        self.text_color = text_color;
        self
    }

    #[must_use]
    pub fn with_show_ratio_only(mut self, show_ratio_only: bool) -> Self {
        self.show_ratio_only = show_ratio_only;
        self
    }

    #[must_use]
    pub fn with_connector_lengths(mut self, radial: f64, horizontal: f64) -> Self {
        self.connector_length1 = radial;
        self.connector_length2 = horizontal;
        self
    }

    #[must_use]
    pub fn with_rotation_enabled(mut self, rotation_enabled: bool) -> Self {
        self.rotation_enabled = rotation_enabled;
        self
    }

    #[must_use]
    pub fn with_drag_threshold_px(mut self, drag_threshold_px: f64) -> Self {
        self.drag_threshold_px = drag_threshold_px;
        self
    }

    /// Height that fits the pie, a pulled-out slice, the radial connector and
    /// half a text line on each side.
    #[must_use]
    pub fn preferred_height(&self, line_height: f64) -> f64 {
        (self.radius
            + self.selection_offset
            + self.connector_length1
            + line_height / 2.0
            + PREFERRED_HEIGHT_PADDING_PX)
            * 2.0
    }
}

fn default_radius() -> f64 {
    80.0
}

fn default_selection_offset() -> f64 {
    8.0
}

fn default_text_size() -> f64 {
    10.0
}

fn default_text_color() -> Color {
    Color::BLACK
}

fn default_connector_length1() -> f64 {
    14.0
}

fn default_connector_length2() -> f64 {
    6.0
}

fn default_rotation_enabled() -> bool {
    true
}

fn default_drag_threshold_px() -> f64 {
    8.0
}

fn default_connector_stroke_width() -> f64 {
    1.0
}
