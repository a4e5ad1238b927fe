mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{ArcPrimitive, Color, PathPrimitive, TextPrimitive};

use crate::core::FontMetrics;
use crate::error::ChartResult;

/// Average glyph advance relative to font size used by [`estimate_text_width`].
pub const ESTIMATED_GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Width estimate for backends without a text shaper.
#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * ESTIMATED_GLYPH_WIDTH_RATIO
}

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from slice geometry and gesture handling. Label layout runs
/// before drawing and needs text measurement, so surfaces also expose width
/// and font metrics; the defaults are estimates for headless use.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        estimate_text_width(text, font_size_px)
    }

    fn font_metrics(&self, font_size_px: f64) -> FontMetrics {
        FontMetrics::estimate(font_size_px)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
