//! Host-facing hook points.
//!
//! Plugins observe engine events without mutating chart state directly.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
