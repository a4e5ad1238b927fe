use crate::error::{ChartError, ChartResult};

use super::PieChartConfig;

pub(super) fn validate_config(config: PieChartConfig) -> ChartResult<PieChartConfig> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    for (name, value) in [
        ("radius", config.radius),
        ("text_size", config.text_size),
        ("connector_stroke_width", config.connector_stroke_width),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "pie config `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("selection_offset", config.selection_offset),
        ("connector_length1", config.connector_length1),
        ("connector_length2", config.connector_length2),
        ("drag_threshold_px", config.drag_threshold_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "pie config `{name}` must be finite and >= 0"
            )));
        }
    }

    config.text_color.validate()?;
    Ok(config)
}
