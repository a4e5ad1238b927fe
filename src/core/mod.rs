pub mod angle;
pub mod geometry;
pub mod label_layout;
pub mod slice;
pub mod state;
pub mod types;

pub use angle::{
    FULL_TURN_DEG, Quadrant, normalize_degrees, point_on_circle, pointer_angle, polar_offset,
    selection_shift,
};
pub use geometry::{
    PieGeometry, RATIO_CORRECTION_DECIMALS, compute_pie_geometry, correct_largest_ratio,
    round_ratio_sum,
};
pub use hit_test::slice_index_at_angle;
pub use label_layout::{
    FontMetrics, LabelDirection, LabelLayout, LabelLayoutParams, format_ratio_percent,
    label_text, layout_labels, layout_slice_label,
};
pub use slice::{Slice, SliceConfig};
pub use state::ChartState;
pub use types::{BoundingBox, Point, Viewport};
