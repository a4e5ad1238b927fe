use indexmap::IndexMap;

use crate::core::ChartState;
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::GestureTracker;
use crate::render::Renderer;

use super::{PieChartConfig, PluginEvent};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PieChartEngine` owns the chart state exclusively: slices, rotation and
/// selection only change through its methods, on the host's UI thread.
pub struct PieChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PieChartConfig,
    pub(super) state: ChartState,
    pub(super) gesture: GestureTracker,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
    pub(super) pending_invalidation: bool,
}

impl<R: Renderer> PieChartEngine<R> {
    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.finish_render_cycle();
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// GTK draw callbacks use this path so the renderer stays decoupled from
    /// GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.finish_render_cycle();
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn finish_render_cycle(&mut self) {
        self.pending_invalidation = false;
        self.emit_plugin_event(PluginEvent::Rendered);
    }
}
