use tracing::debug;

use crate::extensions::PluginContext;
use crate::interaction::SelectionChange;
use crate::render::Renderer;

use super::{PieChartEngine, PluginEvent};

impl<R: Renderer> PieChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            rotation: self.state.rotation(),
            slice_count: self.state.slices().len(),
            selected_index: self.state.selected_slice().map(|slice| slice.index),
            interaction_mode: self.gesture.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(&event, context);
        }
    }

    /// Emits the current selection: the selected slice, or an explicit
    /// "none".
    pub(super) fn notify_selection(&mut self) {
        let change = match self.state.selected_slice() {
            Some(slice) => SelectionChange::Selected(slice.clone()),
            None => SelectionChange::Cleared,
        };
        debug!(
            selected_index = self.state.selected_slice().map(|slice| slice.index),
            "pie selection changed"
        );
        self.emit_plugin_event(PluginEvent::SelectionChanged(change));
    }
}
