mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod invalidation;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod selection_controller;
mod validation;

pub use engine::PieChartEngine;
pub use engine_config::{PREFERRED_HEIGHT_PADDING_PX, PieChartConfig};
pub use engine_snapshot::EngineSnapshot;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
pub use crate::interaction::{GestureResponse, PointerEvent, PointerPhase, SelectionChange};
