use crate::core::{PieGeometry, Point, Slice, Viewport};
use crate::error::ChartResult;
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{PieChartConfig, PieChartEngine};

impl<R: Renderer> PieChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> PieChartConfig {
        self.config
    }

    /// Replaces styling and host options; slices, rotation and selection are
    /// kept.
    pub fn set_config(&mut self, config: PieChartConfig) -> ChartResult<()> {
        self.config = validate_config(config)?;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Host resize hook.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.set_config(PieChartConfig {
            viewport,
            ..self.config
        })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.config.viewport.center()
    }

    #[must_use]
    pub fn geometry(&self) -> &PieGeometry {
        self.state.geometry()
    }

    #[must_use]
    pub fn slices(&self) -> &[Slice] {
        self.state.slices()
    }

    /// Current rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.state.rotation()
    }

    #[must_use]
    pub fn selected_slice(&self) -> Option<&Slice> {
        self.state.selected_slice()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.gesture.mode()
    }

    /// Height a host layout should reserve, using the renderer's font metrics.
    #[must_use]
    pub fn preferred_height(&self) -> f64 {
        let metrics = self.renderer.font_metrics(self.config.text_size);
        self.config.preferred_height(metrics.line_height())
    }
}
