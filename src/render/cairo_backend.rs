use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::FontMetrics;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, PathPrimitive, RenderFrame, Renderer, TextPrimitive, estimate_text_width,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub arcs_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Frames render either offscreen into an owned image surface through
/// `Renderer::render` or in place on an external context through
/// `CairoContextRenderer`. Text is measured with Pango on the owned surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Some(Color::rgb(1.0, 1.0, 1.0)),
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Background painted before each frame; `None` keeps the host's pixels.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> ChartResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn font_description(&self, font_size_px: f64) -> FontDescription {
        let mut description = FontDescription::from_string(&self.font_family);
        description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
        description
    }

    fn text_layout(&self, context: &Context, text: &str, font_size_px: f64) -> pango::Layout {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&self.font_description(font_size_px)));
        layout.set_text(text);
        layout
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        if let Some(clear_color) = self.clear_color {
            apply_color(context, clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let mut stats = CairoRenderStats::default();
        for arc in &frame.arcs {
            fill_wedge(context, arc)?;
            stats.arcs_drawn += 1;
        }
        for path in &frame.paths {
            stroke_polyline(context, path)?;
            stats.paths_drawn += 1;
        }
        for text in &frame.texts {
            self.draw_text(context, text);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_text(&self, context: &Context, text: &TextPrimitive) {
        let layout = self.text_layout(context, &text.text, text.font_size_px);
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(context, text.color);
        context.move_to(text.x, text.baseline_y - baseline);
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }

    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        match Context::new(&self.surface) {
            Ok(context) => {
                let layout = self.text_layout(&context, text, font_size_px);
                let (width, _height) = layout.pixel_size();
                f64::from(width)
            }
            Err(_) => estimate_text_width(text, font_size_px),
        }
    }

    fn font_metrics(&self, font_size_px: f64) -> FontMetrics {
        let Ok(context) = Context::new(&self.surface) else {
            return FontMetrics::estimate(font_size_px);
        };
        let layout = pangocairo::functions::create_layout(&context);
        let metrics = layout
            .context()
            .metrics(Some(&self.font_description(font_size_px)), None);
        let scale = f64::from(pango::SCALE);
        FontMetrics::new(
            f64::from(metrics.ascent()) / scale,
            f64::from(metrics.descent()) / scale,
        )
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill_wedge(context: &Context, arc: &ArcPrimitive) -> ChartResult<()> {
    let center = arc.center();
    let radius_x = arc.bounds.width / 2.0;
    let radius_y = arc.bounds.height / 2.0;
    let start = arc.start_angle_deg.to_radians();
    let end = (arc.start_angle_deg + arc.sweep_angle_deg).to_radians();

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    context.translate(center.x, center.y);
    context.scale(radius_x, radius_y);
    context.move_to(0.0, 0.0);
    context.arc(0.0, 0.0, 1.0, start, end);
    context.close_path();
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;

    apply_color(context, arc.fill_color);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill wedge", err))
}

fn stroke_polyline(context: &Context, path: &PathPrimitive) -> ChartResult<()> {
    let mut points = path.points.iter();
    let Some(first) = points.next() else {
        return Ok(());
    };
    context.move_to(first.x, first.y);
    for point in points {
        context.line_to(point.x, point.y);
    }
    apply_color(context, path.color);
    context.set_line_width(path.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke connector", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
