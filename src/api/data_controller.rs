use tracing::{debug, warn};

use crate::core::{SliceConfig, compute_pie_geometry};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{PieChartEngine, PluginEvent};

impl<R: Renderer> PieChartEngine<R> {
    /// Replaces all slices and resets rotation.
    ///
    /// Empty input is a no-op that keeps the previous chart. Input whose
    /// values sum to zero is accepted and renders nothing. Any gesture in
    /// progress is dropped so a pending release cannot act on stale angles,
    /// and a dropped selection is notified as cleared.
    pub fn set_slices(&mut self, configs: Vec<SliceConfig>) -> ChartResult<()> {
        if configs.is_empty() {
            debug!("ignore empty slice configuration");
            return Ok(());
        }

        let geometry = compute_pie_geometry(&configs).inspect_err(|err| {
            warn!(error = %err, count = configs.len(), "reject slice configuration");
        })?;
        if geometry.is_degenerate() {
            debug!(count = configs.len(), "slice values sum to zero; chart renders empty");
        }

        debug!(
            count = configs.len(),
            total = geometry.total(),
            "set pie slices"
        );
        let had_selection = self.state.selected_slice().is_some();
        self.state.replace_geometry(geometry);
        self.gesture.cancel();
        self.request_redraw();
        self.emit_plugin_event(PluginEvent::SlicesUpdated {
            slice_count: self.state.slices().len(),
        });
        if had_selection {
            self.notify_selection();
        }
        Ok(())
    }
}
