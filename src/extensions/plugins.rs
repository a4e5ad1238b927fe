use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{InteractionMode, SelectionChange};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub rotation: f64,
    pub slice_count: usize,
    pub selected_index: Option<usize>,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to plugins, dispatched synchronously in
/// registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    SlicesUpdated { slice_count: usize },
    RotationChanged { rotation: f64 },
    SelectionChanged(SelectionChange),
    Rendered,
}

/// Extension hook interface, also the channel for selection notifications.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
