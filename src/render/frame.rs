use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one pie draw pass.
///
/// Wedges are drawn first in slice order, then connectors, then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub arcs: Vec<ArcPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            arcs: Vec::new(),
            paths: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for arc in &self.arcs {
            arc.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty() && self.paths.is_empty() && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::core::{BoundingBox, Point};
    use crate::render::Color;

    fn wedge(sweep_angle_deg: f64) -> ArcPrimitive {
        ArcPrimitive {
            slice_index: 0,
            bounds: BoundingBox::new(10.0, 10.0, 80.0, 80.0),
            start_angle_deg: 0.0,
            sweep_angle_deg,
            fill_color: Color::rgb(0.2, 0.6, 0.3),
        }
    }

    #[test]
    fn built_frame_validates_every_primitive() {
        let frame = RenderFrame::new(Viewport::new(100, 100))
            .with_arc(wedge(120.0))
            .with_path(PathPrimitive::new(
                smallvec![Point::new(50.0, 50.0), Point::new(70.0, 50.0)],
                1.0,
                Color::BLACK,
            ))
            .with_text(TextPrimitive::new("40%", 72.0, 54.0, 10.0, Color::BLACK));

        assert!(!frame.is_empty());
        frame.validate().expect("valid frame");
    }

    #[test]
    fn zero_sweep_wedge_or_single_point_path_is_rejected() {
        let frame = RenderFrame::new(Viewport::new(100, 100)).with_arc(wedge(0.0));
        assert!(matches!(frame.validate(), Err(ChartError::InvalidData(_))));

        let frame = RenderFrame::new(Viewport::new(100, 100)).with_path(PathPrimitive::new(
            smallvec![Point::new(1.0, 1.0)],
            1.0,
            Color::BLACK,
        ));
        assert!(matches!(frame.validate(), Err(ChartError::InvalidData(_))));
    }
}
