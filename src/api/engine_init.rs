use indexmap::IndexMap;
use tracing::debug;

use crate::core::ChartState;
use crate::error::ChartResult;
use crate::interaction::GestureTracker;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{PieChartConfig, PieChartEngine};

impl<R: Renderer> PieChartEngine<R> {
    /// Creates an engine with no slices; the first frame is empty.
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        let config = validate_config(config)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            radius = config.radius,
            "create pie chart engine"
        );

        Ok(Self {
            renderer,
            config,
            state: ChartState::default(),
            gesture: GestureTracker::default(),
            plugins: IndexMap::new(),
            pending_invalidation: true,
        })
    }
}
