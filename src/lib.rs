//! pie-chart-rs: single-ring pie chart engine.
//!
//! The crate keeps a strict split between pure slice geometry (`core`),
//! pointer gesture tracking (`interaction`), backend-agnostic drawing
//! (`render`) and the orchestration facade consumed by hosts (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{PieChartConfig, PieChartEngine};
pub use error::{ChartError, ChartResult};
