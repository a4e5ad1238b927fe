use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::{ChartError, ChartResult};

use super::angle::point_on_circle;
use super::slice::Slice;
use super::types::{BoundingBox, Point};

/// Vertical font metrics, both measured as positive distances from the
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    pub ascent: f64,
    pub descent: f64,
}

impl FontMetrics {
    #[must_use]
    pub const fn new(ascent: f64, descent: f64) -> Self {
        Self { ascent, descent }
    }

    /// Backend-independent approximation used by headless renderers.
    #[must_use]
    pub fn estimate(font_size_px: f64) -> Self {
        Self::new(font_size_px * 0.8, font_size_px * 0.2)
    }

    #[must_use]
    pub fn line_height(self) -> f64 {
        self.ascent + self.descent
    }
}

/// Which way the horizontal connector segment runs away from the pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelDirection {
    Leftward,
    Rightward,
}

impl LabelDirection {
    /// Bisectors strictly inside `(90, 270)` point into the left half of the
    /// screen; every other angle labels to the right.
    #[must_use]
    pub fn for_bisector(bisector_deg: f64) -> Self {
        if bisector_deg > 90.0 && bisector_deg < 270.0 {
            Self::Leftward
        } else {
            Self::Rightward
        }
    }

    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Leftward => -1.0,
            Self::Rightward => 1.0,
        }
    }
}

/// Chart-wide inputs shared by every label in one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayoutParams {
    pub center: Point,
    pub pie_radius: f64,
    pub selection_offset: f64,
    pub connector_length1: f64,
    pub connector_length2: f64,
    pub rotation: f64,
    pub show_ratio_only: bool,
    pub font_metrics: FontMetrics,
}

/// Draw directive for one slice label.
///
/// Geometry is computed even when `visible` is false so hosts can inspect
/// suppressed labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub slice_index: usize,
    pub text: String,
    pub bisector: f64,
    pub anchor: Point,
    /// Pie edge, radial elbow, then horizontal tail.
    pub connector: SmallVec<[Point; 3]>,
    pub direction: LabelDirection,
    pub text_box: BoundingBox,
    pub baseline_y: f64,
    pub visible: bool,
}

/// Formats a ratio as a percentage with at most two fractional digits.
///
/// Digits past the second are truncated, never rounded, after discarding
/// floating-point noise below 1e-6 percent.
pub fn format_ratio_percent(ratio: f64) -> ChartResult<String> {
    let percent = Decimal::from_f64_retain(ratio * 100.0).ok_or_else(|| {
        ChartError::InvalidData(format!("ratio {ratio} cannot be formatted as a percentage"))
    })?;
    let truncated = percent
        .round_dp(6)
        .round_dp_with_strategy(2, RoundingStrategy::ToZero)
        .normalize();
    Ok(truncated.to_string())
}

/// Display string for a slice: `"12.5%"` or `"label(12.5%)"`.
pub fn label_text(slice: &Slice, show_ratio_only: bool) -> ChartResult<String> {
    let percent = format_ratio_percent(slice.ratio)?;
    if show_ratio_only {
        Ok(format!("{percent}%"))
    } else {
        Ok(format!("{}({percent}%)", slice.label))
    }
}

/// Computes connector and text box for one slice without collision checks.
#[must_use]
pub fn layout_slice_label(
    slice: &Slice,
    params: &LabelLayoutParams,
    text: String,
    text_width: f64,
) -> LabelLayout {
    let bisector = slice.bisector(params.rotation);
    let edge_radius = if slice.selected {
        params.pie_radius + params.selection_offset
    } else {
        params.pie_radius
    };

    let anchor = point_on_circle(params.center, edge_radius, bisector);
    let elbow = point_on_circle(
        params.center,
        edge_radius + params.connector_length1,
        bisector,
    );
    let direction = LabelDirection::for_bisector(bisector);
    let tail = elbow.offset(direction.sign() * params.connector_length2, 0.0);

    let line_height = params.font_metrics.line_height();
    let top = elbow.y - line_height / 2.0;
    let left = match direction {
        LabelDirection::Leftward => tail.x - text_width,
        LabelDirection::Rightward => tail.x,
    };

    let mut connector = SmallVec::new();
    connector.push(anchor);
    connector.push(elbow);
    connector.push(tail);

    LabelLayout {
        slice_index: slice.index,
        text,
        bisector,
        anchor,
        connector,
        direction,
        text_box: BoundingBox::new(left, top, text_width, line_height),
        baseline_y: top + params.font_metrics.ascent,
        visible: true,
    }
}

/// Tracks previously drawn boxes for the overlap suppression policy.
#[derive(Debug, Clone, Copy, Default)]
struct CollisionTracker {
    previous: Option<BoundingBox>,
    first: Option<BoundingBox>,
}

impl CollisionTracker {
    /// Returns whether `candidate` may be drawn and records it when it is.
    ///
    /// The ring-closing label is also checked against the first drawn box.
    fn admit(&mut self, candidate: BoundingBox, closes_ring: bool) -> bool {
        let hits_previous = self
            .previous
            .is_some_and(|previous| previous.intersects(candidate));
        let hits_first =
            closes_ring && self.first.is_some_and(|first| first.intersects(candidate));
        if hits_previous || hits_first {
            return false;
        }

        self.first.get_or_insert(candidate);
        self.previous = Some(candidate);
        true
    }
}

/// Lays out labels for every drawable slice in order and applies overlap
/// suppression.
///
/// `measure_text_width` is called once per label with its display string.
pub fn layout_labels<'a, F>(
    slices: impl IntoIterator<Item = &'a Slice>,
    params: &LabelLayoutParams,
    mut measure_text_width: F,
) -> ChartResult<Vec<LabelLayout>>
where
    F: FnMut(&str) -> f64,
{
    let drawable: Vec<&Slice> = slices
        .into_iter()
        .filter(|slice| slice.is_drawable())
        .collect();
    let last_position = drawable.len().saturating_sub(1);

    let mut tracker = CollisionTracker::default();
    let mut layouts = Vec::with_capacity(drawable.len());
    for (position, slice) in drawable.into_iter().enumerate() {
        let text = label_text(slice, params.show_ratio_only)?;
        let text_width = measure_text_width(&text);
        let mut layout = layout_slice_label(slice, params, text, text_width);

        let closes_ring = position == last_position && position > 0;
        layout.visible = tracker.admit(layout.text_box, closes_ring);
        if !layout.visible {
            trace!(
                slice_index = layout.slice_index,
                bisector = layout.bisector,
                "suppress overlapping slice label"
            );
        }
        layouts.push(layout);
    }
    Ok(layouts)
}
