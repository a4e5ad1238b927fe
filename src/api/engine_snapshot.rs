use serde::{Deserialize, Serialize};

use crate::core::{LabelLayout, Slice};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{PieChartConfig, PieChartEngine};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: PieChartConfig,
    pub rotation: f64,
    pub degenerate: bool,
    pub total_value: f64,
    pub interaction_mode: InteractionMode,
    pub slices: Vec<Slice>,
    pub labels: Vec<LabelLayout>,
    pub plugin_ids: Vec<String>,
}

impl<R: Renderer> PieChartEngine<R> {
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            config: self.config,
            rotation: self.state.rotation(),
            degenerate: self.state.geometry().is_degenerate(),
            total_value: self.state.geometry().total(),
            interaction_mode: self.gesture.mode(),
            slices: self.state.slices().to_vec(),
            labels: self.label_layouts()?,
            plugin_ids: self.plugins.keys().cloned().collect(),
        })
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|err| ChartError::Serialization(err.to_string()))
    }
}
