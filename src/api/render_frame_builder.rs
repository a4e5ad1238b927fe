use crate::core::{BoundingBox, LabelLayout, LabelLayoutParams, layout_labels, selection_shift};
use crate::error::ChartResult;
use crate::render::{ArcPrimitive, PathPrimitive, RenderFrame, Renderer, TextPrimitive};

use super::PieChartEngine;

impl<R: Renderer> PieChartEngine<R> {
    pub(super) fn label_layout_params(&self) -> LabelLayoutParams {
        LabelLayoutParams {
            center: self.center(),
            pie_radius: self.config.radius,
            selection_offset: self.config.selection_offset,
            connector_length1: self.config.connector_length1,
            connector_length2: self.config.connector_length2,
            rotation: self.state.rotation(),
            show_ratio_only: self.config.show_ratio_only,
            font_metrics: self.renderer.font_metrics(self.config.text_size),
        }
    }

    /// Label directives for every drawable slice, including suppressed ones.
    pub fn label_layouts(&self) -> ChartResult<Vec<LabelLayout>> {
        let params = self.label_layout_params();
        let text_size = self.config.text_size;
        let renderer = &self.renderer;
        layout_labels(self.state.geometry().drawable(), &params, |text| {
            renderer.measure_text_width(text, text_size)
        })
    }

    /// Materializes wedges, connectors and surviving labels for the current
    /// state. Degenerate and empty charts produce an empty frame.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        let rotation = self.state.rotation();
        let normal_bounds = BoundingBox::around_circle(self.center(), self.config.radius);

        for slice in self.state.geometry().drawable() {
            let bounds = if slice.selected {
                let (dx, dy) =
                    selection_shift(slice.bisector(rotation), self.config.selection_offset);
                normal_bounds.translated(dx, dy)
            } else {
                normal_bounds
            };
            frame.arcs.push(ArcPrimitive {
                slice_index: slice.index,
                bounds,
                start_angle_deg: slice.rotated_start(rotation),
                sweep_angle_deg: slice.sweep_angle,
                fill_color: slice.color,
            });
        }

        let text_color = self.config.text_color;
        for layout in self.label_layouts()? {
            if !layout.visible {
                continue;
            }
            frame.paths.push(PathPrimitive::new(
                layout.connector,
                self.config.connector_stroke_width,
                text_color,
            ));
            frame.texts.push(TextPrimitive::new(
                layout.text,
                layout.text_box.left,
                layout.baseline_y,
                self.config.text_size,
                text_color,
            ));
        }

        Ok(frame)
    }
}
